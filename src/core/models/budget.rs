use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::core::money::Money;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryBudget {
    #[schema(value_type = String, example = "600.00")]
    pub allocated: Money,
    /// Entered by the user; not derived from expenses unless explicitly refreshed.
    #[schema(value_type = String, example = "314.45")]
    #[serde(default)]
    pub spent: Money,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Budget {
    pub group_id: String,
    #[schema(value_type = String, example = "3000.00")]
    pub monthly_total: Money,
    pub categories: BTreeMap<String, CategoryBudget>,
}
