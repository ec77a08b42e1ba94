// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use tribune_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynClientEventDispatcher, DynConversationsRepository, DynDirectoryGateway, DynIDProvider,
    DynProfilesRepository, DynTimeProvider,
};
use crate::domain::conversations::models::{
    Conversation, ConversationError, ConversationId, Rating, Subject,
};
use crate::domain::conversations::services::{CreateConversationRequest, SendMessageRequest};
use crate::domain::messaging::models::{Message, MessageContent};
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

use super::super::ConversationsDomainService as ConversationsDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct ConversationsDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    conversations_repo: DynConversationsRepository,
    directory_gateway: DynDirectoryGateway,
    id_provider: DynIDProvider,
    profiles_repo: DynProfilesRepository,
    time_provider: DynTimeProvider,
}

#[async_trait]
impl ConversationsDomainServiceTrait for ConversationsDomainService {
    #[tracing::instrument(skip(self, request), fields(citizen = %request.citizen, representative = %request.representative))]
    async fn create_conversation(
        &self,
        request: CreateConversationRequest,
    ) -> Result<Conversation, ConversationError> {
        if request.citizen == request.representative {
            return Err(ConversationError::InvalidParticipants);
        }

        let subject = Subject::new(&request.subject)?;
        let content = MessageContent::new(&request.first_message)?;

        let Some(citizen_profile) = self.profiles_repo.get(&request.citizen).await? else {
            return Err(ConversationError::NotCitizen);
        };
        if !citizen_profile.role.is_citizen() {
            return Err(ConversationError::NotCitizen);
        }

        let Some(rep_profile) = self.profiles_repo.get(&request.representative).await? else {
            return Err(ConversationError::UnknownRepresentative);
        };
        if !rep_profile.role.is_representative() {
            return Err(ConversationError::UnknownRepresentative);
        }
        let Some(directory_id) = rep_profile.directory_id else {
            return Err(ConversationError::UnknownRepresentative);
        };

        match self.directory_gateway.exists(&directory_id).await {
            Ok(true) => (),
            Ok(false) => return Err(ConversationError::UnknownRepresentative),
            Err(error) => return Err(ConversationError::DirectoryUnavailable(error)),
        }

        let now = self.time_provider.now();
        let conversation = Conversation::new(
            self.id_provider.new_id().into(),
            request.citizen.clone(),
            request.representative.clone(),
            subject,
            now,
        );
        let first_message = Message::new(
            self.id_provider.new_id().into(),
            conversation.id.clone(),
            request.citizen.clone(),
            content,
            now,
            None,
        );

        let conversation = self
            .conversations_repo
            .create(conversation, first_message)
            .await?;

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationCreated {
                conversation_id: conversation.id.clone(),
                citizen: conversation.citizen.clone(),
                representative: conversation.representative.clone(),
            })
            .await;

        Ok(conversation)
    }

    #[tracing::instrument(skip(self, request), fields(conversation = %conversation_id, sender = %sender))]
    async fn append_message(
        &self,
        conversation_id: &ConversationId,
        sender: &UserId,
        request: SendMessageRequest,
    ) -> Result<Message, ConversationError> {
        let conversation = self
            .conversations_repo
            .get(conversation_id)
            .await?
            .ok_or_else(|| ConversationError::ConversationNotFound(conversation_id.clone()))?;

        if !conversation.is_participant(sender) {
            return Err(ConversationError::NotParticipant);
        }
        if conversation.is_closed {
            return Err(ConversationError::ConversationClosed);
        }

        let content = MessageContent::new(&request.content)?;

        if let Some(reply_to) = &request.reply_to {
            if self
                .conversations_repo
                .get_message(conversation_id, reply_to)
                .await?
                .is_none()
            {
                return Err(ConversationError::InvalidReply(reply_to.clone()));
            }
        }

        let message = Message::new(
            self.id_provider.new_id().into(),
            conversation_id.clone(),
            sender.clone(),
            content,
            self.time_provider.now(),
            request.reply_to,
        );

        // The repo re-checks the closed flag inside the critical section so
        // a concurrent close cannot slip in between the check above and the
        // insert.
        let conversation = self
            .conversations_repo
            .append_message(conversation_id, message.clone())
            .await?;

        let recipient = conversation
            .other_participant(sender)
            .cloned()
            .unwrap_or_else(|| conversation.citizen.clone());

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::MessageAppended {
                conversation_id: conversation_id.clone(),
                message_id: message.id.clone(),
                sender: sender.clone(),
                recipient,
                is_system_message: false,
            })
            .await;

        Ok(message)
    }

    #[tracing::instrument(skip(self), fields(conversation = %conversation_id, actor = %actor))]
    async fn close_conversation(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
    ) -> Result<Conversation, ConversationError> {
        let conversation = self
            .conversations_repo
            .get(conversation_id)
            .await?
            .ok_or_else(|| ConversationError::ConversationNotFound(conversation_id.clone()))?;

        if !conversation.is_participant(actor) {
            return Err(ConversationError::NotParticipant);
        }

        // The closed check is left to the repo which sees the authoritative
        // state inside the critical section.
        let actor_name = match self.profiles_repo.get(actor).await? {
            Some(profile) => profile.display_name().to_string(),
            None => actor.to_string(),
        };

        let now = self.time_provider.now();
        let notice = Message::system(
            self.id_provider.new_id().into(),
            conversation_id.clone(),
            actor.clone(),
            MessageContent::new(format!("Conversation closed by {actor_name}."))?,
            now,
        );

        let conversation = self
            .conversations_repo
            .close(conversation_id, actor.clone(), now, notice)
            .await?;

        let other_participant = conversation
            .other_participant(actor)
            .cloned()
            .unwrap_or_else(|| conversation.citizen.clone());

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConversationClosed {
                conversation_id: conversation_id.clone(),
                closed_by: actor.clone(),
                other_participant,
            })
            .await;

        Ok(conversation)
    }

    #[tracing::instrument(skip(self, feedback), fields(conversation = %conversation_id, actor = %actor))]
    async fn rate_conversation(
        &self,
        conversation_id: &ConversationId,
        actor: &UserId,
        rating: u8,
        feedback: Option<String>,
    ) -> Result<Conversation, ConversationError> {
        let conversation = self
            .conversations_repo
            .get(conversation_id)
            .await?
            .ok_or_else(|| ConversationError::ConversationNotFound(conversation_id.clone()))?;

        if actor != &conversation.citizen {
            return Err(ConversationError::NotCitizen);
        }
        if !conversation.is_closed {
            return Err(ConversationError::ConversationNotClosed);
        }

        let rating = Rating::new(rating)?;

        Ok(self
            .conversations_repo
            .set_rating(conversation_id, rating, feedback)
            .await?)
    }
}
