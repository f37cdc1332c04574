use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap};
use utoipa::ToSchema;

use crate::core::models::{Expense, NetBalance};
use crate::core::money::Money;

pub const PALETTE: [&str; 10] = [
    "#4F46E5", // indigo
    "#EC4899", // pink
    "#22C55E", // green
    "#F59E0B", // amber
    "#3B82F6", // blue
    "#EF4444", // red
    "#10B981", // emerald
    "#A855F7", // purple
    "#EAB308", // yellow
    "#14B8A6", // teal
];

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    #[schema(value_type = String, example = "314.45")]
    pub value: Money,
    pub color: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// `YYYY-MM`
    pub month: String,
    #[schema(value_type = String, example = "1850.00")]
    pub total: Money,
}

/// Spend per category in the order categories first appear, each with a
/// palette color.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategorySlice> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Money> = HashMap::new();
    for expense in expenses {
        let total = totals.entry(expense.category.as_str()).or_insert_with(|| {
            order.push(expense.category.as_str());
            Money::ZERO
        });
        *total += expense.amount;
    }

    order
        .into_iter()
        .enumerate()
        .map(|(index, name)| CategorySlice {
            name: name.to_string(),
            value: totals[name],
            color: PALETTE[index % PALETTE.len()].to_string(),
        })
        .collect()
}

pub fn monthly_totals(expenses: &[Expense]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<(i32, u32), Money> = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry((expense.date.year(), expense.date.month()))
            .or_insert(Money::ZERO) += expense.amount;
    }
    totals
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal {
            month: format!("{:04}-{:02}", year, month),
            total,
        })
        .collect()
}

/// Chart.js bar chart configuration for net balances. `names` maps member
/// ids to display names; unknown ids fall back to the id itself.
pub fn balance_chart(group_name: &str, balances: &[NetBalance], names: &HashMap<String, String>) -> Value {
    let labels: Vec<&str> = balances
        .iter()
        .map(|b| names.get(&b.member_id).map(String::as_str).unwrap_or(b.member_id.as_str()))
        .collect();
    // Chart.js expects plain numbers
    let data: Vec<f64> = balances.iter().map(|b| b.net.minor() as f64 / 100.0).collect();
    let colors: Vec<&str> = (0..balances.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();

    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Net balance",
                "data": data,
                "backgroundColor": colors,
                "borderColor": colors,
                "borderWidth": 1
            }]
        },
        "options": {
            "scales": {
                "y": {
                    "title": { "display": true, "text": "Balance" }
                },
                "x": {
                    "title": { "display": true, "text": "Members" }
                }
            },
            "plugins": {
                "title": {
                    "display": true,
                    "text": format!("Balances for group: {}", group_name)
                }
            }
        }
    })
}
