use crate::constants::MAX_AMOUNT_MINOR;
use crate::core::budget::{self, BudgetStatus};
use crate::core::errors::LedgerError;
use crate::core::models::{Budget, CategoryBudget, NewExpense, SplitRule};
use crate::core::money::Money;
use crate::tests::{create_test_service, date, equal_expense, money, seed_group};
use std::collections::BTreeMap;

fn category(allocated: &str, spent: &str) -> CategoryBudget {
    CategoryBudget {
        allocated: money(allocated),
        spent: money(spent),
    }
}

fn sample_budget() -> Budget {
    Budget {
        group_id: "g1".to_string(),
        monthly_total: money("3000.00"),
        categories: BTreeMap::from([
            ("Food".to_string(), category("600.00", "314.45")),
            ("Rent".to_string(), category("1500.00", "1500.00")),
            ("Travel".to_string(), category("400.00", "450.00")),
            ("Utilities".to_string(), category("200.00", "185.00")),
        ]),
    }
}

#[test]
fn test_report_totals_and_statuses() {
    let report = budget::build_report(&sample_budget(), 90).unwrap();

    assert_eq!(report.total_allocated, money("2700.00"));
    assert_eq!(report.total_spent, money("2449.45"));
    assert_eq!(report.remaining, money("550.55"));
    assert_eq!(report.percent, 82);
    assert_eq!(report.status, BudgetStatus::OnTrack);

    let statuses: Vec<(&str, u32, BudgetStatus)> = report
        .categories
        .iter()
        .map(|c| (c.category.as_str(), c.percent, c.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("Food", 52, BudgetStatus::OnTrack),
            ("Rent", 100, BudgetStatus::NearLimit),
            ("Travel", 113, BudgetStatus::OverBudget),
            ("Utilities", 93, BudgetStatus::NearLimit),
        ]
    );
}

#[test]
fn test_zero_allocation_percent() {
    let budget = Budget {
        group_id: "g1".to_string(),
        monthly_total: money("100.00"),
        categories: BTreeMap::from([
            ("Empty".to_string(), category("0", "0")),
            ("Unplanned".to_string(), category("0", "12.00")),
        ]),
    };
    let report = budget::build_report(&budget, 90).unwrap();
    assert_eq!(report.categories[0].percent, 0);
    assert_eq!(report.categories[0].status, BudgetStatus::OnTrack);
    assert_eq!(report.categories[1].percent, 100);
    assert_eq!(report.categories[1].status, BudgetStatus::OverBudget);
}

#[test]
fn test_validate_budget() {
    let mut budget = sample_budget();
    assert!(budget::validate_budget(&budget).is_ok());

    budget.monthly_total = Money::ZERO;
    assert_eq!(
        budget::validate_budget(&budget),
        Err(LedgerError::InvalidAmount(Money::ZERO))
    );

    let mut budget = sample_budget();
    budget
        .categories
        .insert("Misc".to_string(), category("-1.00", "0"));
    assert!(matches!(
        budget::validate_budget(&budget),
        Err(LedgerError::InvalidInput(field, _)) if field == "categories.Misc"
    ));
}

#[test]
fn test_validate_budget_caps_every_value() {
    let mut budget = sample_budget();
    budget.monthly_total = Money::from_minor(MAX_AMOUNT_MINOR + 1);
    assert!(matches!(
        budget::validate_budget(&budget),
        Err(LedgerError::InvalidInput(field, _)) if field == "monthly_total"
    ));

    let mut budget = sample_budget();
    budget.categories.insert(
        "Huge".to_string(),
        CategoryBudget {
            allocated: Money::ZERO,
            spent: Money::from_minor(i64::MAX),
        },
    );
    assert!(matches!(
        budget::validate_budget(&budget),
        Err(LedgerError::InvalidInput(field, _)) if field == "categories.Huge.spent"
    ));
}

#[test]
fn test_report_overflow_is_an_error() {
    let budget = Budget {
        group_id: "g1".to_string(),
        monthly_total: money("100.00"),
        categories: BTreeMap::from([
            ("A".to_string(), category("1.00", "0")),
            (
                "B".to_string(),
                CategoryBudget {
                    allocated: Money::from_minor(i64::MAX),
                    spent: Money::ZERO,
                },
            ),
        ]),
    };
    assert_eq!(budget::build_report(&budget, 90), Err(LedgerError::AmountOverflow));
}

#[tokio::test]
async fn test_set_budget_rejects_oversized_allocation() {
    let service = create_test_service();
    let (group, _) = seed_group(&service, &["Alice"]).await;

    let categories = BTreeMap::from([(
        "Food".to_string(),
        CategoryBudget {
            allocated: Money::from_minor(i64::MAX),
            spent: Money::ZERO,
        },
    )]);
    let result = service.set_budget(&group.id, money("3000.00"), categories).await;
    assert!(matches!(
        result,
        Err(LedgerError::InvalidInput(field, _)) if field == "categories.Food.allocated"
    ));
    assert_eq!(
        service.budget_report(&group.id).await.unwrap_err(),
        LedgerError::BudgetNotFound(group.id.clone())
    );
}

#[tokio::test]
async fn test_set_budget_and_report() {
    let service = create_test_service();
    let (group, _) = seed_group(&service, &["Alice", "Bob"]).await;

    assert_eq!(
        service.budget_report(&group.id).await.unwrap_err(),
        LedgerError::BudgetNotFound(group.id.clone())
    );

    service
        .set_budget(&group.id, money("3000.00"), sample_budget().categories)
        .await
        .unwrap();
    let report = service.budget_report(&group.id).await.unwrap();
    assert_eq!(report.group_id, group.id);
    assert_eq!(report.total_spent, money("2449.45"));
}

#[tokio::test]
async fn test_refresh_budget_spending_rolls_up_month() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob"]).await;
    let (alice, bob) = (&members[0], &members[1]);

    service
        .set_budget(
            &group.id,
            money("1000.00"),
            BTreeMap::from([
                ("Food".to_string(), category("300.00", "999.00")),
                ("Rent".to_string(), category("500.00", "0")),
            ]),
        )
        .await
        .unwrap();

    service
        .add_expense(&group.id, equal_expense("Groceries", "120.00", alice, &[alice, bob]))
        .await
        .unwrap();
    service
        .add_expense(&group.id, equal_expense("Dinner", "60.50", bob, &[alice, bob]))
        .await
        .unwrap();
    let taxi = NewExpense {
        title: "Taxi".to_string(),
        amount: money("25.00"),
        category: "Transport".to_string(),
        payer_id: alice.id.clone(),
        date: date(2025, 4, 20),
        split: SplitRule::Equal {
            participants: vec![alice.id.clone()],
        },
    };
    service.add_expense(&group.id, taxi).await.unwrap();
    let mut march = equal_expense("Old dinner", "80.00", alice, &[alice, bob]);
    march.date = date(2025, 3, 30);
    service.add_expense(&group.id, march).await.unwrap();

    let report = service.refresh_budget_spending(&group.id, 2025, 4).await.unwrap();
    let spent: Vec<(&str, Money, Money)> = report
        .categories
        .iter()
        .map(|c| (c.category.as_str(), c.allocated, c.spent))
        .collect();
    assert_eq!(
        spent,
        vec![
            ("Food", money("300.00"), money("180.50")),
            ("Rent", money("500.00"), Money::ZERO),
            ("Transport", Money::ZERO, money("25.00")),
        ]
    );
    assert_eq!(report.total_spent, money("205.50"));

    assert!(matches!(
        service.refresh_budget_spending(&group.id, 2025, 13).await,
        Err(LedgerError::InvalidInput(field, _)) if field == "month"
    ));
}
