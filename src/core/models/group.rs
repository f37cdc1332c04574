use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Group {
    pub id: String,
    pub name: String,
    /// Member ids; order carries no meaning.
    pub member_ids: Vec<String>,
    pub created_by: String,
    #[schema(value_type = String, example = "2025-04-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn has_member(&self, member_id: &str) -> bool {
        self.member_ids.iter().any(|id| id == member_id)
    }
}
