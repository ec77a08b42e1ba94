// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use tribune_utils::TimeProvider;

use crate::domain::directory::models::{DirectoryError, DirectoryId, RepresentativeCard};
use crate::domain::directory::services::DirectoryGateway;

struct CacheSlot {
    card: RepresentativeCard,
    expires_at: DateTime<Utc>,
}

/// TTL side-cache in front of another `DirectoryGateway`. Only successful
/// lookups are cached; misses and failures always hit the wrapped gateway
/// again. Stale reads are acceptable here, the cache never feeds conversation
/// state.
pub struct CachingDirectoryGateway {
    inner: Arc<dyn DirectoryGateway>,
    ttl: Duration,
    time_provider: Arc<dyn TimeProvider>,
    cache: RwLock<HashMap<DirectoryId, CacheSlot>>,
}

impl CachingDirectoryGateway {
    pub fn new(
        inner: Arc<dyn DirectoryGateway>,
        ttl: Duration,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        CachingDirectoryGateway {
            inner,
            ttl,
            time_provider,
            cache: Default::default(),
        }
    }

    fn cached_card(&self, id: &DirectoryId) -> Option<RepresentativeCard> {
        let cache = self.cache.read();
        let slot = cache.get(id)?;

        if slot.expires_at <= self.time_provider.now() {
            return None;
        }

        Some(slot.card.clone())
    }

    fn store(&self, card: &RepresentativeCard) {
        let Ok(ttl) = chrono::Duration::from_std(self.ttl) else {
            return;
        };

        self.cache.write().insert(
            card.id.clone(),
            CacheSlot {
                card: card.clone(),
                expires_at: self.time_provider.now() + ttl,
            },
        );
    }
}

#[async_trait]
impl DirectoryGateway for CachingDirectoryGateway {
    async fn exists(&self, id: &DirectoryId) -> Result<bool, DirectoryError> {
        Ok(self.fetch_metadata(id).await?.is_some())
    }

    async fn fetch_metadata(
        &self,
        id: &DirectoryId,
    ) -> Result<Option<RepresentativeCard>, DirectoryError> {
        if let Some(card) = self.cached_card(id) {
            return Ok(Some(card));
        }

        let card = self.inner.fetch_metadata(id).await?;
        if let Some(card) = &card {
            self.store(card);
        }

        Ok(card)
    }
}
