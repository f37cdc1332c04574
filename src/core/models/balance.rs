use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::money::Money;

/// Contributed minus owed for one member. Positive: the group owes them.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NetBalance {
    pub member_id: String,
    #[schema(value_type = String, example = "1240.60")]
    pub contributed: Money,
    #[schema(value_type = String, example = "450.20")]
    pub owed: Money,
    #[schema(value_type = String, example = "790.40")]
    pub net: Money,
}
