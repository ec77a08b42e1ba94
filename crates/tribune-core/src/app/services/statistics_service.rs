// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, Utc};

use tribune_proc_macros::InjectDependencies;

use crate::app::deps::{DynConversationsRepository, DynStatisticsRepository, DynTimeProvider};
use crate::domain::messaging::models::Message;
use crate::domain::shared::models::UserId;
use crate::domain::statistics::models::{ConversationStats, DailyStatistics, UserStats};

/// On-demand aggregation over the conversation ledger. All reads are
/// eventually consistent; a concurrently appended message shows up in the
/// next computation.
#[derive(InjectDependencies)]
pub struct StatisticsService {
    #[inject]
    conversations_repo: DynConversationsRepository,
    #[inject]
    statistics_repo: DynStatisticsRepository,
    #[inject]
    time_provider: DynTimeProvider,
}

impl StatisticsService {
    pub async fn user_stats(&self, user_id: &UserId) -> Result<UserStats> {
        let now = self.time_provider.now();
        let month_ago = now - Duration::days(30);
        let conversations = self.conversations_repo.get_all_for_user(user_id).await?;

        let mut stats = UserStats {
            total_conversations: conversations.len() as u64,
            ..Default::default()
        };

        for conversation in &conversations {
            if !conversation.is_closed {
                stats.active_conversations += 1;
            }
            if conversation.created_at >= month_ago {
                stats.conversations_this_month += 1;
            }

            let messages = self
                .conversations_repo
                .get_messages(&conversation.id)
                .await?;

            for message in &messages {
                if &message.sender == user_id {
                    stats.total_messages_sent += 1;
                    if message.created_at >= month_ago {
                        stats.messages_this_month += 1;
                    }
                } else {
                    stats.total_messages_received += 1;
                    if !message.is_read {
                        stats.unread_messages += 1;
                    }
                }
            }
        }

        Ok(stats)
    }

    pub async fn conversation_stats(&self, user_id: &UserId) -> Result<ConversationStats> {
        let now = self.time_provider.now();
        let today = now.date_naive();
        let week_ago = today - Duration::days(7);
        let month_ago = today - Duration::days(30);
        let conversations = self.conversations_repo.get_all_for_user(user_id).await?;

        let mut stats = ConversationStats {
            total_conversations: conversations.len() as u64,
            ..Default::default()
        };

        let mut total_messages = 0u64;
        let mut closed_durations_days = Vec::new();

        for conversation in &conversations {
            if conversation.is_closed {
                stats.closed_conversations += 1;
            } else {
                stats.active_conversations += 1;
            }

            let created_on = conversation.created_at.date_naive();
            if created_on == today {
                stats.conversations_today += 1;
            }
            if created_on >= week_ago {
                stats.conversations_this_week += 1;
            }
            if created_on >= month_ago {
                stats.conversations_this_month += 1;
            }

            total_messages += conversation.total_messages;

            if let Some(closed_at) = conversation.closed_at.filter(|_| conversation.is_closed) {
                closed_durations_days.push((closed_at - conversation.created_at).num_days() as f64);
            }
        }

        if !conversations.is_empty() {
            stats.avg_messages_per_conversation =
                total_messages as f64 / conversations.len() as f64;
        }
        if !closed_durations_days.is_empty() {
            stats.avg_conversation_duration_days =
                closed_durations_days.iter().sum::<f64>() / closed_durations_days.len() as f64;
        }

        Ok(stats)
    }

    /// Recomputes the user's row for `date` from the ledger and replaces
    /// whatever the projection held before.
    pub async fn rebuild_daily(&self, user_id: &UserId, date: NaiveDate) -> Result<DailyStatistics> {
        let conversations = self.conversations_repo.get_all_for_user(user_id).await?;

        let mut statistics = DailyStatistics {
            user_id: user_id.clone(),
            date,
            messages_sent: 0,
            messages_received: 0,
            conversations_started: 0,
            conversations_closed: 0,
            avg_response_time_minutes: None,
        };

        let mut response_minutes = Vec::new();

        for conversation in &conversations {
            if conversation.citizen == *user_id && conversation.created_at.date_naive() == date {
                statistics.conversations_started += 1;
            }
            if conversation.closed_by.as_ref() == Some(user_id)
                && conversation.closed_at.map(|at| at.date_naive()) == Some(date)
            {
                statistics.conversations_closed += 1;
            }

            let messages: Vec<Message> = self
                .conversations_repo
                .get_messages(&conversation.id)
                .await?
                .into_iter()
                .filter(|message| message.created_at.date_naive() == date)
                .collect();

            // Response time pairs the earliest unanswered counterpart
            // message with the user's next same-day reply.
            let mut pending_prompt: Option<DateTime<Utc>> = None;

            for message in &messages {
                if &message.sender == user_id {
                    statistics.messages_sent += 1;
                    if let Some(prompt_at) = pending_prompt.take() {
                        response_minutes.push((message.created_at - prompt_at).num_minutes());
                    }
                } else {
                    statistics.messages_received += 1;
                    if pending_prompt.is_none() {
                        pending_prompt = Some(message.created_at);
                    }
                }
            }
        }

        if !response_minutes.is_empty() {
            let avg = response_minutes.iter().sum::<i64>() / response_minutes.len() as i64;
            statistics.avg_response_time_minutes = Some(avg.max(0) as u32);
        }

        self.statistics_repo.upsert(statistics.clone()).await?;
        Ok(statistics)
    }

    pub async fn daily_statistics(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyStatistics>> {
        self.statistics_repo.get(user_id, date).await
    }
}
