use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::constants::MAX_AMOUNT_MINOR;
use crate::core::errors::{FieldError, LedgerError};
use crate::core::models::{Budget, Expense};
use crate::core::money::Money;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    OverBudget,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: String,
    #[schema(value_type = String, example = "600.00")]
    pub allocated: Money,
    #[schema(value_type = String, example = "314.45")]
    pub spent: Money,
    pub percent: u32,
    pub status: BudgetStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct BudgetReport {
    pub group_id: String,
    #[schema(value_type = String, example = "3000.00")]
    pub monthly_total: Money,
    #[schema(value_type = String, example = "3050.00")]
    pub total_allocated: Money,
    #[schema(value_type = String, example = "2515.15")]
    pub total_spent: Money,
    #[schema(value_type = String, example = "484.85")]
    pub remaining: Money,
    pub percent: u32,
    pub status: BudgetStatus,
    pub categories: Vec<CategoryReport>,
}

fn too_large(field: String, amount: Money) -> LedgerError {
    LedgerError::InvalidInput(
        field.clone(),
        FieldError::new(
            &field,
            "Amount Too Large",
            format!("{} cannot exceed {}", amount, Money::from_minor(MAX_AMOUNT_MINOR)),
        ),
    )
}

pub fn validate_budget(budget: &Budget) -> Result<(), LedgerError> {
    if !budget.monthly_total.is_positive() {
        return Err(LedgerError::InvalidAmount(budget.monthly_total));
    }
    if budget.monthly_total.minor() > MAX_AMOUNT_MINOR {
        return Err(too_large("monthly_total".to_string(), budget.monthly_total));
    }
    for (category, values) in &budget.categories {
        if category.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                "category".to_string(),
                FieldError::new("category", "Invalid category", "Category label cannot be empty"),
            ));
        }
        if values.allocated.is_negative() || values.spent.is_negative() {
            return Err(LedgerError::InvalidInput(
                format!("categories.{}", category),
                FieldError::new(
                    "allocated",
                    "Invalid allocation",
                    format!("Allocation and spending for {} must not be negative", category),
                ),
            ));
        }
        for (field, amount) in [("allocated", values.allocated), ("spent", values.spent)] {
            if amount.minor() > MAX_AMOUNT_MINOR {
                return Err(too_large(format!("categories.{}.{}", category, field), amount));
            }
        }
    }
    Ok(())
}

/// Share of `limit` used by `spent`, in whole percent rounded half up.
fn percent_of(spent: Money, limit: Money) -> u32 {
    if !limit.is_positive() {
        return if spent.is_positive() { 100 } else { 0 };
    }
    let spent = spent.minor().max(0) as i128;
    let limit = limit.minor() as i128;
    let percent = (spent * 200 + limit) / (limit * 2);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

fn status_for(spent: Money, limit: Money, percent: u32, near_limit_percent: u32) -> BudgetStatus {
    if spent > limit {
        BudgetStatus::OverBudget
    } else if percent > near_limit_percent {
        BudgetStatus::NearLimit
    } else {
        BudgetStatus::OnTrack
    }
}

pub fn build_report(budget: &Budget, near_limit_percent: u32) -> Result<BudgetReport, LedgerError> {
    let categories: Vec<CategoryReport> = budget
        .categories
        .iter()
        .map(|(category, values)| {
            let percent = percent_of(values.spent, values.allocated);
            CategoryReport {
                category: category.clone(),
                allocated: values.allocated,
                spent: values.spent,
                percent,
                status: status_for(values.spent, values.allocated, percent, near_limit_percent),
            }
        })
        .collect();

    let total_spent = Money::checked_sum(categories.iter().map(|c| c.spent))?;
    let total_allocated = Money::checked_sum(categories.iter().map(|c| c.allocated))?;
    let percent = percent_of(total_spent, budget.monthly_total);

    Ok(BudgetReport {
        group_id: budget.group_id.clone(),
        monthly_total: budget.monthly_total,
        total_allocated,
        total_spent,
        remaining: budget.monthly_total.checked_sub(total_spent)?,
        percent,
        status: status_for(total_spent, budget.monthly_total, percent, near_limit_percent),
        categories,
    })
}

/// Per-category totals of expenses dated in the given month.
pub fn rollup_spending(expenses: &[Expense], year: i32, month: u32) -> Result<BTreeMap<String, Money>, LedgerError> {
    let mut totals = BTreeMap::new();
    for expense in expenses
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
    {
        let total = totals.entry(expense.category.clone()).or_insert(Money::ZERO);
        *total = total.checked_add(expense.amount)?;
    }
    Ok(totals)
}
