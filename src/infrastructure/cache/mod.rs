pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::LedgerError;
use crate::core::services::GroupSummary;
use async_trait::async_trait;

#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_group_summary(&self, group_id: &str) -> Result<Option<GroupSummary>, LedgerError>;
    async fn save_group_summary(
        &self,
        group_id: &str,
        summary: &GroupSummary,
        ttl: std::time::Duration,
    ) -> Result<(), LedgerError>;
    async fn invalidate_group(&self, group_id: &str) -> Result<(), LedgerError>;
}
