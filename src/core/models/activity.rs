use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Expense,
    Settlement,
    Budget,
    Group,
}

/// One entry of the activity feed shown as notifications.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub action: String,
    pub group_id: Option<String>,
    pub member_id: Option<String>,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    #[schema(value_type = String, example = "2025-04-15T19:02:11Z")]
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Per-kind notification switches; everything is on by default.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, IntoParams, PartialEq, Eq)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct NotificationSettings {
    pub expenses: bool,
    pub settlements: bool,
    pub budget: bool,
    pub groups: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            expenses: true,
            settlements: true,
            budget: true,
            groups: true,
        }
    }
}

impl NotificationSettings {
    pub fn allows(&self, kind: ActivityKind) -> bool {
        match kind {
            ActivityKind::Expense => self.expenses,
            ActivityKind::Settlement => self.settlements,
            ActivityKind::Budget => self.budget,
            ActivityKind::Group => self.groups,
        }
    }
}
