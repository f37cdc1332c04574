use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::money::Money;

/// "`from` owes `to` `amount`". Either entered by hand or produced by a
/// settlement plan. The settled flag is a record only; it never moves
/// balances.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Debt {
    pub id: String,
    pub group_id: String,
    pub from: String,
    pub to: String,
    #[schema(value_type = String, example = "450.20")]
    pub amount: Money,
    pub description: String,
    pub settled: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = i64, example = 1743500000)]
    pub created_at: DateTime<Utc>,
}

/// Active debts next to the settled history, as the debt tracker shows them.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DebtBoard {
    pub active: Vec<Debt>,
    pub settled: Vec<Debt>,
}

impl DebtBoard {
    pub fn from_debts(debts: impl IntoIterator<Item = Debt>) -> Self {
        let (settled, active) = debts.into_iter().partition(|d| d.settled);
        DebtBoard { active, settled }
    }
}
