use crate::core::errors::LedgerError;
use crate::core::services::GroupSummary;
use crate::infrastructure::cache::{Cache, cache_keys::group_summary_key};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryCache {
    cache: Arc<RwLock<HashMap<String, (GroupSummary, DateTime<Utc>)>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_group_summary(&self, group_id: &str) -> Result<Option<GroupSummary>, LedgerError> {
        let cache = self.cache.read().await;
        let now = Utc::now();
        Ok(cache
            .get(&group_summary_key(group_id))
            .filter(|(_, expiry)| *expiry > now)
            .map(|(summary, _)| summary.clone()))
    }

    async fn save_group_summary(
        &self,
        group_id: &str,
        summary: &GroupSummary,
        ttl: std::time::Duration,
    ) -> Result<(), LedgerError> {
        let expiry = Utc::now()
            + chrono::Duration::from_std(ttl)
                .map_err(|e| LedgerError::CacheError(format!("Failed to convert TTL: {}", e)))?;
        let mut cache = self.cache.write().await;
        cache.insert(group_summary_key(group_id), (summary.clone(), expiry));
        Ok(())
    }

    async fn invalidate_group(&self, group_id: &str) -> Result<(), LedgerError> {
        let mut cache = self.cache.write().await;
        cache.remove(&group_summary_key(group_id));
        let now = Utc::now();
        cache.retain(|_, (_, expiry)| *expiry > now);
        Ok(())
    }
}
