use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

use crate::core::money::Money;

/// How an expense amount is divided between participants.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SplitRule {
    /// Even split; any remainder goes one unit at a time to the first
    /// participants in this order.
    Equal { participants: Vec<String> },
    /// Caller-assigned share per participant.
    Custom {
        #[schema(value_type = Object)]
        shares: BTreeMap<String, Money>,
    },
}

impl SplitRule {
    pub fn participants(&self) -> Vec<&str> {
        match self {
            SplitRule::Equal { participants } => participants.iter().map(String::as_str).collect(),
            SplitRule::Custom { shares } => shares.keys().map(String::as_str).collect(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SplitRule::Equal { .. } => "equal",
            SplitRule::Custom { .. } => "custom",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Expense {
    pub id: String,
    pub group_id: String,
    pub title: String,
    #[schema(value_type = String, example = "124.80")]
    pub amount: Money,
    pub category: String,
    pub payer_id: String,
    #[schema(value_type = String, example = "2025-04-15")]
    pub date: NaiveDate,
    pub split: SplitRule,
    #[schema(value_type = String, example = "2025-04-15T19:02:11Z")]
    pub created_at: DateTime<Utc>,
}

/// User-entered expense fields, before an id is assigned.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewExpense {
    pub title: String,
    #[schema(value_type = String, example = "124.80")]
    pub amount: Money,
    pub category: String,
    pub payer_id: String,
    #[schema(value_type = String, example = "2025-04-15")]
    pub date: NaiveDate,
    pub split: SplitRule,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpenseFilter {
    /// Case-insensitive match against title or category
    pub search: Option<String>,
    /// Exact category label
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                expense.title.to_lowercase().contains(&term) || expense.category.to_lowercase().contains(&term)
            }
        };
        let category_ok = match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => expense.category == category,
        };
        search_ok && category_ok
    }
}
