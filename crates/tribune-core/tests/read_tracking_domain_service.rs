use anyhow::Result;
use chrono::Duration;

use tribune_core::domain::messaging::models::ReadTrackingError;
use tribune_core::domain::messaging::services::impls::ReadTrackingDomainService;
use tribune_core::domain::messaging::services::ReadTrackingDomainService as ReadTrackingDomainServiceTrait;
use tribune_core::domain::shared::models::UserId;
use tribune_core::test::{
    conversation, message, mock_reference_date, MockReadTrackingDomainServiceDependencies,
};

#[tokio::test]
async fn test_marks_message_read_on_behalf_of_recipient() -> Result<()> {
    let mut deps = MockReadTrackingDomainServiceDependencies::default();

    deps.conversations_repo
        .expect_get()
        .returning(|_| Box::pin(async { Ok(Some(conversation("conv", "citizen", "rep"))) }));
    deps.conversations_repo
        .expect_get_message()
        .returning(|_, _| Box::pin(async { Ok(Some(message("m1", "conv", "citizen", "Hello"))) }));
    deps.conversations_repo
        .expect_mark_message_read()
        .once()
        .return_once(|_, _, read_at| {
            let mut message = message("m1", "conv", "citizen", "Hello");
            message.mark_read(read_at);
            Box::pin(async move { Ok(Some(message)) })
        });

    let service = ReadTrackingDomainService::from(deps.into_deps());
    let message = service
        .mark_read(&"conv".into(), &"m1".into(), &"rep".into())
        .await?;

    assert!(message.is_read);
    assert_eq!(message.read_at, Some(mock_reference_date()));

    Ok(())
}

#[tokio::test]
async fn test_mark_read_is_idempotent() -> Result<()> {
    let mut deps = MockReadTrackingDomainServiceDependencies::default();

    let earlier_read_at = mock_reference_date() - Duration::hours(1);

    deps.conversations_repo
        .expect_get()
        .returning(|_| Box::pin(async { Ok(Some(conversation("conv", "citizen", "rep"))) }));
    deps.conversations_repo
        .expect_get_message()
        .returning(move |_, _| {
            Box::pin(async move {
                let mut message = message("m1", "conv", "citizen", "Hello");
                message.mark_read(earlier_read_at);
                Ok(Some(message))
            })
        });
    deps.conversations_repo
        .expect_mark_message_read()
        .returning(move |_, _, read_at| {
            Box::pin(async move {
                let mut message = message("m1", "conv", "citizen", "Hello");
                message.mark_read(earlier_read_at);
                // The second transition is a no-op.
                message.mark_read(read_at);
                Ok(Some(message))
            })
        });

    let service = ReadTrackingDomainService::from(deps.into_deps());
    let message = service
        .mark_read(&"conv".into(), &"m1".into(), &"rep".into())
        .await?;

    assert!(message.is_read);
    assert_eq!(message.read_at, Some(earlier_read_at));

    Ok(())
}

#[tokio::test]
async fn test_mark_read_rejects_sender_and_strangers() -> Result<()> {
    let mut deps = MockReadTrackingDomainServiceDependencies::default();

    deps.conversations_repo
        .expect_get()
        .returning(|_| Box::pin(async { Ok(Some(conversation("conv", "citizen", "rep"))) }));
    deps.conversations_repo
        .expect_get_message()
        .returning(|_, _| Box::pin(async { Ok(Some(message("m1", "conv", "citizen", "Hello"))) }));

    let service = ReadTrackingDomainService::from(deps.into_deps());

    let result = service
        .mark_read(&"conv".into(), &"m1".into(), &"citizen".into())
        .await;
    let Err(ReadTrackingError::SelfMarkForbidden) = result else {
        panic!("Expected ReadTrackingError::SelfMarkForbidden")
    };

    let result = service
        .mark_read(&"conv".into(), &"m1".into(), &"stranger".into())
        .await;
    let Err(ReadTrackingError::NotParticipant) = result else {
        panic!("Expected ReadTrackingError::NotParticipant")
    };

    Ok(())
}

#[tokio::test]
async fn test_marks_whole_conversation_read() -> Result<()> {
    let mut deps = MockReadTrackingDomainServiceDependencies::default();

    deps.conversations_repo
        .expect_get()
        .returning(|_| Box::pin(async { Ok(Some(conversation("conv", "citizen", "rep"))) }));
    deps.conversations_repo
        .expect_mark_all_read()
        .once()
        .withf(|_, excluding_sender: &UserId, _| excluding_sender == &UserId::from("rep"))
        .returning(|_, _, _| Box::pin(async { Ok(3) }));

    let service = ReadTrackingDomainService::from(deps.into_deps());
    let transitioned = service
        .mark_conversation_read(&"conv".into(), &"rep".into())
        .await?;

    assert_eq!(transitioned, 3);

    Ok(())
}

#[tokio::test]
async fn test_unread_count_is_symmetric() -> Result<()> {
    let mut deps = MockReadTrackingDomainServiceDependencies::default();

    deps.conversations_repo
        .expect_get()
        .returning(|_| Box::pin(async { Ok(Some(conversation("conv", "citizen", "rep"))) }));
    deps.conversations_repo
        .expect_unread_count()
        .withf(|_, sent_by: &UserId| sent_by == &UserId::from("rep"))
        .returning(|_, _| Box::pin(async { Ok(2) }));
    deps.conversations_repo
        .expect_unread_count()
        .withf(|_, sent_by: &UserId| sent_by == &UserId::from("citizen"))
        .returning(|_, _| Box::pin(async { Ok(5) }));

    let service = ReadTrackingDomainService::from(deps.into_deps());

    assert_eq!(
        service
            .unread_count_for(&"conv".into(), &"citizen".into())
            .await?,
        2
    );
    assert_eq!(
        service
            .unread_count_for(&"conv".into(), &"rep".into())
            .await?,
        5
    );

    let result = service
        .unread_count_for(&"conv".into(), &"stranger".into())
        .await;
    let Err(ReadTrackingError::NotParticipant) = result else {
        panic!("Expected ReadTrackingError::NotParticipant")
    };

    Ok(())
}
