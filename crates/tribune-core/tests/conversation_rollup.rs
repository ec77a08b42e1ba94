use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;

use tribune_core::domain::conversations::models::{ConversationError, Rating};
use tribune_core::domain::conversations::repos::ConversationsRepository;
use tribune_core::dtos::{Message, MessageContent};
use tribune_core::infra::conversations::InMemoryConversationsRepository;
use tribune_core::test::{conversation, message, mock_reference_date};

fn message_at(id: &str, sender: &str, offset_secs: i64) -> Message {
    Message::new(
        id.into(),
        "conv".into(),
        sender.into(),
        MessageContent::new("Hello").unwrap(),
        mock_reference_date() + Duration::seconds(offset_secs),
        None,
    )
}

async fn seeded_repo() -> Result<Arc<InMemoryConversationsRepository>> {
    let repo = Arc::new(InMemoryConversationsRepository::new());
    repo.create(
        conversation("conv", "citizen", "rep"),
        message("m0", "conv", "citizen", "Hello"),
    )
    .await?;
    Ok(repo)
}

#[tokio::test]
async fn test_create_rolls_up_first_message_exactly_once() -> Result<()> {
    let repo = seeded_repo().await?;

    let conversation = repo.get(&"conv".into()).await?.unwrap();
    assert_eq!(conversation.total_messages, 1);
    assert_eq!(conversation.last_message_by, Some("citizen".into()));

    // One more append must count exactly one message on top of creation.
    let conversation = repo
        .append_message(&"conv".into(), message_at("m1", "rep", 10))
        .await?;
    assert_eq!(conversation.total_messages, 2);
    assert_eq!(conversation.last_message_by, Some("rep".into()));
    assert_eq!(
        conversation.last_message_at,
        mock_reference_date() + Duration::seconds(10)
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_appends_never_lose_updates() -> Result<()> {
    let repo = seeded_repo().await?;
    let append_count: i64 = 20;

    let mut handles = Vec::new();
    for i in 0..append_count {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            let sender = if i % 2 == 0 { "citizen" } else { "rep" };
            repo.append_message(
                &"conv".into(),
                message_at(&format!("m{}", i + 1), sender, i + 1),
            )
            .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let conversation = repo.get(&"conv".into()).await?.unwrap();
    assert_eq!(conversation.total_messages, append_count as u64 + 1);
    assert_eq!(
        conversation.last_message_at,
        mock_reference_date() + Duration::seconds(append_count)
    );

    let messages = repo.get_messages(&"conv".into()).await?;
    assert_eq!(messages.len(), append_count as usize + 1);

    Ok(())
}

#[tokio::test]
async fn test_rollup_tie_breaks_on_insertion_order() -> Result<()> {
    let repo = seeded_repo().await?;

    repo.append_message(&"conv".into(), message_at("m1", "citizen", 60))
        .await?;
    let conversation = repo
        .append_message(&"conv".into(), message_at("m2", "rep", 60))
        .await?;

    // Equal timestamps resolve to the later insert.
    assert_eq!(conversation.last_message_by, Some("rep".into()));

    Ok(())
}

#[tokio::test]
async fn test_closed_conversation_rejects_participant_messages() -> Result<()> {
    let repo = seeded_repo().await?;

    let mut notice = message_at("notice", "citizen", 30);
    notice.is_system_message = true;
    let conversation = repo
        .close(
            &"conv".into(),
            "citizen".into(),
            mock_reference_date() + Duration::seconds(30),
            notice,
        )
        .await?;

    assert!(conversation.is_closed);
    assert_eq!(conversation.closed_by, Some("citizen".into()));
    // The system notice still counts towards the rollup.
    assert_eq!(conversation.total_messages, 2);

    let result = repo
        .append_message(&"conv".into(), message_at("m1", "rep", 40))
        .await;
    let Err(ConversationError::ConversationClosed) = result else {
        panic!("Expected ConversationError::ConversationClosed")
    };

    let result = repo
        .close(
            &"conv".into(),
            "rep".into(),
            mock_reference_date() + Duration::seconds(50),
            message_at("notice-2", "rep", 50),
        )
        .await;
    let Err(ConversationError::AlreadyClosed { closed_by, .. }) = result else {
        panic!("Expected ConversationError::AlreadyClosed")
    };
    assert_eq!(closed_by, "citizen".into());

    Ok(())
}

#[tokio::test]
async fn test_set_rating_requires_closed_conversation() -> Result<()> {
    let repo = seeded_repo().await?;

    let result = repo
        .set_rating(&"conv".into(), Rating::new(4)?, None)
        .await;
    let Err(ConversationError::ConversationNotClosed) = result else {
        panic!("Expected ConversationError::ConversationNotClosed")
    };

    let mut notice = message_at("notice", "citizen", 30);
    notice.is_system_message = true;
    repo.close(
        &"conv".into(),
        "citizen".into(),
        mock_reference_date() + Duration::seconds(30),
        notice,
    )
    .await?;

    let conversation = repo
        .set_rating(&"conv".into(), Rating::new(5)?, Some("great".to_string()))
        .await?;
    assert_eq!(conversation.citizen_rating.map(|r| r.value()), Some(5));

    // Re-rating overwrites the previous value.
    let conversation = repo
        .set_rating(&"conv".into(), Rating::new(2)?, None)
        .await?;
    assert_eq!(conversation.citizen_rating.map(|r| r.value()), Some(2));
    assert_eq!(conversation.citizen_feedback, None);

    Ok(())
}

#[tokio::test]
async fn test_mark_all_read_transitions_only_other_senders_messages() -> Result<()> {
    let repo = seeded_repo().await?;

    repo.append_message(&"conv".into(), message_at("m1", "rep", 1))
        .await?;
    repo.append_message(&"conv".into(), message_at("m2", "rep", 2))
        .await?;
    repo.append_message(&"conv".into(), message_at("m3", "citizen", 3))
        .await?;

    // The representative catches up: m0 and m3 from the citizen flip.
    let transitioned = repo
        .mark_all_read(&"conv".into(), &"rep".into(), mock_reference_date())
        .await?;
    assert_eq!(transitioned, 2);

    // Repeating the bulk update transitions nothing.
    let transitioned = repo
        .mark_all_read(&"conv".into(), &"rep".into(), mock_reference_date())
        .await?;
    assert_eq!(transitioned, 0);

    assert_eq!(repo.unread_count(&"conv".into(), &"citizen".into()).await?, 0);
    assert_eq!(repo.unread_count(&"conv".into(), &"rep".into()).await?, 2);

    let messages = repo.get_messages(&"conv".into()).await?;
    assert!(messages
        .iter()
        .filter(|m| m.sender == "citizen".into())
        .all(|m| m.is_read));
    assert!(messages
        .iter()
        .filter(|m| m.sender == "rep".into())
        .all(|m| !m.is_read));

    Ok(())
}

#[tokio::test]
async fn test_mark_message_read_preserves_first_read_timestamp() -> Result<()> {
    let repo = seeded_repo().await?;

    let first_read_at = mock_reference_date() + Duration::seconds(5);
    let message = repo
        .mark_message_read(&"conv".into(), &"m0".into(), first_read_at)
        .await?
        .unwrap();
    assert!(message.is_read);
    assert_eq!(message.read_at, Some(first_read_at));

    let message = repo
        .mark_message_read(
            &"conv".into(),
            &"m0".into(),
            first_read_at + Duration::seconds(60),
        )
        .await?
        .unwrap();
    assert_eq!(message.read_at, Some(first_read_at));

    Ok(())
}

#[tokio::test]
async fn test_messages_are_returned_in_insertion_order() -> Result<()> {
    let repo = seeded_repo().await?;

    for i in 1..=5i64 {
        repo.append_message(
            &"conv".into(),
            message_at(&format!("m{i}"), if i % 2 == 0 { "rep" } else { "citizen" }, i),
        )
        .await?;
    }

    let messages = repo.get_messages(&"conv".into()).await?;
    let ids: Vec<&str> = messages.iter().map(|m| m.id.as_ref()).collect();
    assert_eq!(ids, vec!["m0", "m1", "m2", "m3", "m4", "m5"]);

    Ok(())
}
