pub mod in_memory;

use crate::core::errors::LedgerError;
use crate::core::models::{ActivityEntry, ActivityKind};
use async_trait::async_trait;

/// Activity feed behind the notifications view.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_action(
        &self,
        kind: ActivityKind,
        action: &str,
        details: serde_json::Value,
        group_id: Option<&str>,
        member_id: Option<&str>,
    ) -> Result<(), LedgerError>;
    /// Newest first.
    async fn get_logs(&self) -> Result<Vec<ActivityEntry>, LedgerError>;
    async fn mark_read(&self, entry_id: &str) -> Result<(), LedgerError>;
    async fn mark_all_read(&self) -> Result<usize, LedgerError>;
}
