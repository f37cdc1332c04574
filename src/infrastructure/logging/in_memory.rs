use crate::core::errors::LedgerError;
use crate::core::models::{ActivityEntry, ActivityKind};
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<RwLock<Vec<ActivityEntry>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        InMemoryLogging::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        kind: ActivityKind,
        action: &str,
        details: serde_json::Value,
        group_id: Option<&str>,
        member_id: Option<&str>,
    ) -> Result<(), LedgerError> {
        if !(details.is_object() || details.is_null()) {
            return Err(LedgerError::LoggingError(format!(
                "Activity details for `{}` must be a JSON object",
                action
            )));
        }
        let mut logs = self.logs.write().await;
        logs.push(ActivityEntry {
            id: Uuid::new_v4().to_string(),
            kind,
            action: action.to_string(),
            group_id: group_id.map(String::from),
            member_id: member_id.map(String::from),
            details,
            timestamp: chrono::Utc::now(),
            read: false,
        });
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<ActivityEntry>, LedgerError> {
        let logs = self.logs.read().await;
        Ok(logs.iter().rev().cloned().collect())
    }

    async fn mark_read(&self, entry_id: &str) -> Result<(), LedgerError> {
        let mut logs = self.logs.write().await;
        let entry = logs
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| LedgerError::NotificationNotFound(entry_id.to_string()))?;
        entry.read = true;
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<usize, LedgerError> {
        let mut logs = self.logs.write().await;
        let mut marked = 0;
        for entry in logs.iter_mut().filter(|e| !e.read) {
            entry.read = true;
            marked += 1;
        }
        Ok(marked)
    }
}
