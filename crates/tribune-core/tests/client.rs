use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;

use tribune_core::domain::conversations::models::ConversationError;
use tribune_core::domain::directory::services::mocks::MockDirectoryGateway;
use tribune_core::domain::messaging::models::ReadTrackingError;
use tribune_core::domain::moderation::models::{ModerationError, ReportReason};
use tribune_core::dtos::{
    ConversationsFilter, CreateConversationRequest, CreateProfileRequest, FileReportRequest,
    RepresentativeCard, Role, SendMessageRequest,
};
use tribune_core::test::{
    mock_reference_date, ConstantTimeProvider, IncrementingIDProvider,
};
use tribune_core::Client;

async fn build_client() -> Result<Client> {
    let mut directory_gateway = MockDirectoryGateway::new();
    directory_gateway.expect_fetch_metadata().returning(|id| {
        let id = id.clone();
        Box::pin(async move {
            Ok(Some(RepresentativeCard {
                id,
                name: "Dina Aziz".to_string(),
                governorate: Some("Cairo".to_string()),
                district: None,
                party: None,
                average_rating: None,
                is_featured: false,
            }))
        })
    });

    let client = Client::builder()
        .set_directory_gateway(Arc::new(directory_gateway))
        .set_id_provider(IncrementingIDProvider::new("id"))
        .set_time_provider(ConstantTimeProvider::new(mock_reference_date()))
        .build();

    client
        .profiles
        .create_profile(CreateProfileRequest {
            user_id: "citizen".into(),
            role: Role::Citizen,
            full_name: "Omar Farouk".to_string(),
            phone: Some("0123456789".to_string()),
            governorate: Some("Cairo".to_string()),
            district: None,
            directory_id: None,
        })
        .await?;
    client
        .profiles
        .create_profile(CreateProfileRequest {
            user_id: "rep".into(),
            role: Role::Representative,
            full_name: "Dina Aziz".to_string(),
            phone: None,
            governorate: Some("Cairo".to_string()),
            district: None,
            directory_id: Some("dir-rep".into()),
        })
        .await?;

    Ok(client)
}

fn create_request() -> CreateConversationRequest {
    CreateConversationRequest {
        citizen: "citizen".into(),
        representative: "rep".into(),
        subject: "Inquiry".to_string(),
        first_message: "Hello".to_string(),
    }
}

#[tokio::test]
async fn test_conversation_lifecycle() -> Result<()> {
    let client = build_client().await?;

    // A citizen opens a conversation.
    let conversation = client
        .conversations
        .create_conversation(create_request())
        .await?;
    assert_eq!(conversation.total_messages, 1);
    assert_eq!(conversation.last_message_by, Some("citizen".into()));
    assert!(!conversation.is_closed);

    // The representative reads and answers.
    let messages = client
        .messages
        .load_messages(&conversation.id, &"rep".into())
        .await?;
    assert_eq!(messages.len(), 1);

    let first_message = &messages[0];
    let read = client
        .messages
        .mark_read(&conversation.id, &first_message.id, &"rep".into())
        .await?;
    assert!(read.is_read);
    let read_at = read.read_at;

    // The sender retrying on an already-read message is a no-op.
    let read = client
        .messages
        .mark_read(&conversation.id, &first_message.id, &"citizen".into())
        .await?;
    assert!(read.is_read);
    assert_eq!(read.read_at, read_at);

    let reply = client
        .messages
        .send_message(
            &conversation.id,
            &"rep".into(),
            SendMessageRequest {
                content: "Happy to help.".to_string(),
                reply_to: Some(first_message.id.clone()),
            },
        )
        .await?;
    assert_eq!(reply.reply_to, Some(first_message.id.clone()));

    assert_eq!(
        client
            .messages
            .unread_count(&conversation.id, &"citizen".into())
            .await?,
        1
    );
    assert_eq!(client.messages.total_unread_count(&"citizen".into()).await?, 1);

    // The citizen closes and rates; the ledger is sealed afterwards.
    let closed = client
        .conversations
        .close_conversation(&conversation.id, &"citizen".into())
        .await?;
    assert!(closed.is_closed);
    assert_eq!(closed.total_messages, 3);

    let rated = client
        .conversations
        .rate_conversation(&conversation.id, &"citizen".into(), 5, Some("great".to_string()))
        .await?;
    assert_eq!(rated.citizen_rating.map(|r| r.value()), Some(5));

    let result = client
        .messages
        .send_message(
            &conversation.id,
            &"rep".into(),
            SendMessageRequest {
                content: "One more thing".to_string(),
                reply_to: None,
            },
        )
        .await;
    let Err(ConversationError::ConversationClosed) = result else {
        panic!("Expected ConversationError::ConversationClosed")
    };

    // The closed conversation shows up in the closed filter only.
    let active = client
        .conversations
        .load_conversations(&"citizen".into(), ConversationsFilter::Active)
        .await?;
    assert!(active.is_empty());
    let closed = client
        .conversations
        .load_conversations(&"citizen".into(), ConversationsFilter::Closed)
        .await?;
    assert_eq!(closed.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_notifications_projection() -> Result<()> {
    let client = build_client().await?;

    let conversation = client
        .conversations
        .create_conversation(create_request())
        .await?;

    // Creation notified the representative.
    assert_eq!(client.notifications.unread_count(&"rep".into()).await?, 1);
    assert_eq!(client.notifications.unread_count(&"citizen".into()).await?, 0);

    client
        .messages
        .send_message(
            &conversation.id,
            &"rep".into(),
            SendMessageRequest {
                content: "Hello back".to_string(),
                reply_to: None,
            },
        )
        .await?;
    assert_eq!(client.notifications.unread_count(&"citizen".into()).await?, 1);

    // Closing notifies the other participant, not the closer. The close
    // notice itself must not add a message notification on top.
    client
        .conversations
        .close_conversation(&conversation.id, &"rep".into())
        .await?;
    let citizen_notifications = client
        .notifications
        .load_notifications(&"citizen".into())
        .await?;
    assert_eq!(citizen_notifications.len(), 2);

    let transitioned = client.notifications.mark_all_read(&"citizen".into()).await?;
    assert_eq!(transitioned, 2);
    assert_eq!(client.notifications.unread_count(&"citizen".into()).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_moderation_flow() -> Result<()> {
    let client = build_client().await?;

    let conversation = client
        .conversations
        .create_conversation(create_request())
        .await?;
    let messages = client
        .messages
        .load_messages(&conversation.id, &"rep".into())
        .await?;
    let message_id = messages[0].id.clone();

    // The sender cannot report their own message.
    let result = client
        .moderation
        .file_report(FileReportRequest {
            conversation_id: conversation.id.clone(),
            message_id: message_id.clone(),
            reporter: "citizen".into(),
            reason: ReportReason::Spam,
            description: None,
        })
        .await;
    let Err(ModerationError::CannotReportSelf) = result else {
        panic!("Expected ModerationError::CannotReportSelf")
    };

    let report = client
        .moderation
        .file_report(FileReportRequest {
            conversation_id: conversation.id.clone(),
            message_id: message_id.clone(),
            reporter: "rep".into(),
            reason: ReportReason::Inappropriate,
            description: Some("Not a real inquiry".to_string()),
        })
        .await?;

    // Only one report per (message, reporter).
    let result = client
        .moderation
        .file_report(FileReportRequest {
            conversation_id: conversation.id.clone(),
            message_id: message_id.clone(),
            reporter: "rep".into(),
            reason: ReportReason::Spam,
            description: None,
        })
        .await;
    let Err(ModerationError::DuplicateReport) = result else {
        panic!("Expected ModerationError::DuplicateReport")
    };

    assert_eq!(client.moderation.load_unreviewed_reports().await?.len(), 1);

    let reviewed = client
        .moderation
        .review_report(&report.id, &"admin".into(), Some("Dismissed".to_string()))
        .await?;
    assert!(reviewed.is_reviewed);

    let result = client
        .moderation
        .review_report(&report.id, &"admin".into(), None)
        .await;
    let Err(ModerationError::AlreadyReviewed { .. }) = result else {
        panic!("Expected ModerationError::AlreadyReviewed")
    };
    assert!(client.moderation.load_unreviewed_reports().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_statistics_reflect_ledger() -> Result<()> {
    let client = build_client().await?;

    let conversation = client
        .conversations
        .create_conversation(create_request())
        .await?;
    client
        .messages
        .send_message(
            &conversation.id,
            &"rep".into(),
            SendMessageRequest {
                content: "Hello back".to_string(),
                reply_to: None,
            },
        )
        .await?;

    let citizen_stats = client.statistics.user_stats(&"citizen".into()).await?;
    assert_eq!(citizen_stats.total_conversations, 1);
    assert_eq!(citizen_stats.active_conversations, 1);
    assert_eq!(citizen_stats.total_messages_sent, 1);
    assert_eq!(citizen_stats.total_messages_received, 1);
    assert_eq!(citizen_stats.unread_messages, 1);

    let conversation_stats = client
        .statistics
        .conversation_stats(&"citizen".into())
        .await?;
    assert_eq!(conversation_stats.total_conversations, 1);
    assert_eq!(conversation_stats.conversations_today, 1);
    assert_eq!(conversation_stats.avg_messages_per_conversation, 2.0);

    let daily = client
        .statistics
        .rebuild_daily(&"rep".into(), mock_reference_date().date_naive())
        .await?;
    assert_eq!(daily.messages_sent, 1);
    assert_eq!(daily.messages_received, 1);
    // Prompt and reply carry the same mocked timestamp.
    assert_eq!(daily.avg_response_time_minutes, Some(0));

    assert_eq!(
        client
            .statistics
            .daily_statistics(&"rep".into(), mock_reference_date().date_naive())
            .await?,
        Some(daily)
    );

    Ok(())
}

#[tokio::test]
async fn test_rejects_directory_unknown_representative() -> Result<()> {
    let mut directory_gateway = MockDirectoryGateway::new();
    directory_gateway
        .expect_fetch_metadata()
        .returning(|_| Box::pin(async { Ok(None) }));

    let client = Client::builder()
        .set_directory_gateway(Arc::new(directory_gateway))
        .set_id_provider(IncrementingIDProvider::new("id"))
        .set_time_provider(ConstantTimeProvider::new(mock_reference_date()))
        .build();

    client
        .profiles
        .create_profile(CreateProfileRequest {
            user_id: "citizen".into(),
            role: Role::Citizen,
            full_name: "Omar Farouk".to_string(),
            phone: None,
            governorate: None,
            district: None,
            directory_id: None,
        })
        .await?;
    client
        .profiles
        .create_profile(CreateProfileRequest {
            user_id: "rep".into(),
            role: Role::Representative,
            full_name: "Dina Aziz".to_string(),
            phone: None,
            governorate: None,
            district: None,
            directory_id: Some("dir-rep".into()),
        })
        .await?;

    let result = client
        .conversations
        .create_conversation(create_request())
        .await;
    let Err(ConversationError::UnknownRepresentative) = result else {
        panic!("Expected ConversationError::UnknownRepresentative")
    };

    // Nothing was created.
    let conversations = client
        .conversations
        .load_conversations(&"citizen".into(), ConversationsFilter::All)
        .await?;
    assert!(conversations.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_load_messages_requires_participation() -> Result<()> {
    let client = build_client().await?;
    let conversation = client
        .conversations
        .create_conversation(create_request())
        .await?;

    let result = client
        .messages
        .load_messages(&conversation.id, &"stranger".into())
        .await;
    let Err(ReadTrackingError::NotParticipant) = result else {
        panic!("Expected ReadTrackingError::NotParticipant")
    };

    Ok(())
}
