// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::conversations::models::{Conversation, ConversationError, ConversationId};
use crate::domain::messaging::models::{Message, MessageId};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateConversationRequest {
    pub citizen: UserId,
    pub representative: UserId,
    pub subject: String,
    pub first_message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub content: String,
    pub reply_to: Option<MessageId>,
}

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConversationsDomainService: Send + Sync {
    /// Creates a conversation and its first message as one unit after
    /// validating both participants against their profiles and the
    /// representative against the directory.
    ///
    /// Fails with:
    /// - `InvalidParticipants` if citizen and representative are the same user.
    /// - `NotCitizen` if the creator's profile is missing or not a citizen.
    /// - `UnknownRepresentative` if the representative has no matching
    ///   profile/directory record.
    /// - `DirectoryUnavailable` if the directory cannot be reached; the
    ///   conversation is not created in that case.
    /// - `Validation` for malformed subject or first message.
    ///
    /// Dispatches `ClientEvent::ConversationCreated` after processing; the
    /// first message is implied by the creation event and does not produce
    /// a separate `MessageAppended`.
    async fn create_conversation(
        &self,
        request: CreateConversationRequest,
    ) -> Result<Conversation, ConversationError>;

    /// Appends a participant message. Insert and rollup update are a single
    /// unit; concurrent appends serialize on the conversation. Dispatches
    /// `ClientEvent::MessageAppended` after processing.
    async fn append_message(
        &self,
        conversation_id: &ConversationId,
        sender: &UserId,
        request: SendMessageRequest,
    ) -> Result<Message, ConversationError>;

    /// Closes the conversation and appends a system message recording who
    /// closed it. Dispatches `ClientEvent::ConversationClosed` after
    /// processing.
    async fn close_conversation(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
    ) -> Result<Conversation, ConversationError>;

    /// Records the citizen's rating of a closed conversation. Repeated calls
    /// overwrite the previous rating and feedback.
    async fn rate_conversation(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
        rating: u8,
        feedback: Option<String>,
    ) -> Result<Conversation, ConversationError>;
}
