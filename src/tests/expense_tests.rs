use crate::config::ServiceSettings;
use crate::core::errors::LedgerError;
use crate::core::models::{ExpenseFilter, NewExpense, SplitRule};
use crate::core::money::Money;
use crate::core::split::ShareMap;
use crate::tests::{create_test_service, create_test_service_with, date, equal_expense, money, seed_group};

fn custom(title: &str, amount: &str, payer: &str, shares: &[(&str, &str)]) -> NewExpense {
    NewExpense {
        title: title.to_string(),
        amount: money(amount),
        category: "Food".to_string(),
        payer_id: payer.to_string(),
        date: date(2025, 4, 15),
        split: SplitRule::Custom {
            shares: shares
                .iter()
                .map(|(id, share)| (id.to_string(), money(share)))
                .collect(),
        },
    }
}

#[tokio::test]
async fn test_add_equal_expense_updates_balances() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob", "Carol"]).await;
    let (alice, bob, carol) = (&members[0], &members[1], &members[2]);

    let details = service
        .add_expense(
            &group.id,
            equal_expense("Dinner at Italian Restaurant", "124.80", alice, &[alice, bob, carol]),
        )
        .await
        .unwrap();
    assert_eq!(details.adjustment, Money::ZERO);
    assert!(details.shares.values().all(|s| *s == money("41.60")));

    let balances = service.group_balances(&group.id).await.unwrap();
    let nets: Vec<Money> = balances.iter().map(|b| b.net).collect();
    assert_eq!(nets, vec![money("83.20"), money("-41.60"), money("-41.60")]);

    let plan = service.settlement_plan(&group.id).await.unwrap();
    assert_eq!(plan.len(), 2);
    assert!(plan.iter().all(|d| d.to == alice.id && d.amount == money("41.60")));
}

#[tokio::test]
async fn test_custom_split_mismatch_blocks_expense() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob"]).await;
    let (alice, bob) = (members[0].id.as_str(), members[1].id.as_str());

    let result = service
        .add_expense(
            &group.id,
            custom("Tickets", "100.00", alice, &[(alice, "60.00"), (bob, "39.99")]),
        )
        .await;
    assert_eq!(
        result.unwrap_err(),
        LedgerError::SplitMismatch {
            delta: Money::from_minor(1)
        }
    );
    assert!(
        service
            .list_expenses(&group.id, &ExpenseFilter::default())
            .await
            .unwrap()
            .is_empty()
    );

    let details = service
        .add_expense(
            &group.id,
            custom("Tickets", "100.00", alice, &[(alice, "60.00"), (bob, "40.00")]),
        )
        .await
        .unwrap();
    assert_eq!(details.shares[bob], money("40.00"));
    let nets: Vec<Money> = service
        .group_balances(&group.id)
        .await
        .unwrap()
        .iter()
        .map(|b| b.net)
        .collect();
    assert_eq!(nets, vec![money("40.00"), money("-40.00")]);
}

#[tokio::test]
async fn test_custom_split_with_oversized_shares_is_rejected() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob", "Carol"]).await;
    let (alice, bob, carol) = (
        members[0].id.as_str(),
        members[1].id.as_str(),
        members[2].id.as_str(),
    );

    let mut expense = custom("Tickets", "0.02", alice, &[(carol, "0.04")]);
    if let SplitRule::Custom { shares } = &mut expense.split {
        shares.insert(alice.to_string(), Money::from_minor(i64::MAX));
        shares.insert(bob.to_string(), Money::from_minor(i64::MAX));
    }
    let result = service.add_expense(&group.id, expense).await;
    assert!(matches!(
        result,
        Err(LedgerError::InvalidInput(field, _)) if field.starts_with("shares.")
    ));
    assert!(
        service
            .list_expenses(&group.id, &ExpenseFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_custom_split_tolerance_reconciles_and_stores_adjusted_shares() {
    let service = create_test_service_with(ServiceSettings {
        split_tolerance: Money::from_minor(2),
        ..ServiceSettings::default()
    });
    let (group, members) = seed_group(&service, &["Alice", "Bob", "Carol"]).await;
    let (alice, bob, carol) = (
        members[0].id.as_str(),
        members[1].id.as_str(),
        members[2].id.as_str(),
    );

    let details = service
        .add_expense(
            &group.id,
            custom(
                "Groceries",
                "100.00",
                alice,
                &[(alice, "33.33"), (bob, "33.33"), (carol, "33.33")],
            ),
        )
        .await
        .unwrap();
    assert_eq!(details.adjustment, Money::from_minor(1));
    let total: Money = details.shares.values().sum();
    assert_eq!(total, money("100.00"));

    let stored = service.expense_shares(&details.expense.id).await.unwrap();
    assert_eq!(stored, details.shares);
}

#[tokio::test]
async fn test_expense_validation() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob"]).await;
    let (alice, bob) = (&members[0], &members[1]);
    let outsider = service
        .add_member("Eve".to_string(), "eve@example.com".to_string())
        .await
        .unwrap();

    let mut zero = equal_expense("Nothing", "0", alice, &[alice, bob]);
    zero.amount = Money::ZERO;
    assert_eq!(
        service.add_expense(&group.id, zero).await.unwrap_err(),
        LedgerError::InvalidAmount(Money::ZERO)
    );

    assert_eq!(
        service
            .add_expense(&group.id, equal_expense("Dinner", "10.00", &outsider, &[alice, bob]))
            .await
            .unwrap_err(),
        LedgerError::NotGroupMember(outsider.id.clone())
    );
    assert_eq!(
        service
            .add_expense(&group.id, equal_expense("Dinner", "10.00", alice, &[alice, &outsider]))
            .await
            .unwrap_err(),
        LedgerError::NotGroupMember(outsider.id.clone())
    );
    assert_eq!(
        service
            .add_expense(&group.id, equal_expense("Dinner", "10.00", alice, &[]))
            .await
            .unwrap_err(),
        LedgerError::EmptyParticipantSet
    );
    assert_eq!(
        service
            .add_expense(&group.id, equal_expense("Dinner", "10.00", alice, &[alice, alice]))
            .await
            .unwrap_err(),
        LedgerError::DuplicateParticipant(alice.id.clone())
    );
    assert!(matches!(
        service
            .add_expense(&group.id, equal_expense("", "10.00", alice, &[alice]))
            .await,
        Err(LedgerError::InvalidInput(field, _)) if field == "title"
    ));
    assert!(matches!(
        service
            .add_expense(&group.id, equal_expense("Yacht", "1000000.01", alice, &[alice]))
            .await,
        Err(LedgerError::InvalidInput(field, _)) if field == "amount"
    ));
    assert_eq!(
        service
            .add_expense("missing", equal_expense("Dinner", "10.00", alice, &[alice]))
            .await
            .unwrap_err(),
        LedgerError::GroupNotFound("missing".to_string())
    );
}

#[tokio::test]
async fn test_replace_and_delete_expense() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob"]).await;
    let (alice, bob) = (&members[0], &members[1]);

    let original = service
        .add_expense(&group.id, equal_expense("Dinner", "30.00", alice, &[alice, bob]))
        .await
        .unwrap()
        .expense;

    let replaced = service
        .replace_expense(&original.id, equal_expense("Late dinner", "50.00", bob, &[alice, bob]))
        .await
        .unwrap();
    assert_eq!(replaced.expense.id, original.id);
    assert_eq!(replaced.expense.created_at, original.created_at);
    assert_eq!(service.get_expense(&original.id).await.unwrap().title, "Late dinner");

    let nets: Vec<Money> = service
        .group_balances(&group.id)
        .await
        .unwrap()
        .iter()
        .map(|b| b.net)
        .collect();
    assert_eq!(nets, vec![money("-25.00"), money("25.00")]);

    service.delete_expense(&original.id).await.unwrap();
    let balances = service.group_balances(&group.id).await.unwrap();
    assert!(balances.iter().all(|b| b.net.is_zero()));
    assert_eq!(
        service.delete_expense(&original.id).await.unwrap_err(),
        LedgerError::ExpenseNotFound(original.id.clone())
    );
    assert_eq!(
        service
            .replace_expense(&original.id, equal_expense("Ghost", "1.00", alice, &[alice]))
            .await
            .unwrap_err(),
        LedgerError::ExpenseNotFound(original.id.clone())
    );
}

#[tokio::test]
async fn test_list_expenses_filters_and_sorts_newest_first() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob"]).await;
    let (alice, bob) = (&members[0], &members[1]);

    let mut groceries = equal_expense("Weekly groceries", "80.00", alice, &[alice, bob]);
    groceries.category = "Groceries".to_string();
    groceries.date = date(2025, 4, 2);
    let mut rent = equal_expense("April rent", "1500.00", bob, &[alice, bob]);
    rent.category = "Rent".to_string();
    rent.date = date(2025, 4, 1);
    let mut dinner = equal_expense("Dinner", "45.00", alice, &[alice, bob]);
    dinner.date = date(2025, 4, 10);

    for expense in [groceries, rent, dinner] {
        service.add_expense(&group.id, expense).await.unwrap();
    }

    let titles = |expenses: Vec<crate::core::models::Expense>| -> Vec<String> {
        expenses.into_iter().map(|e| e.title).collect()
    };

    let all = service
        .list_expenses(&group.id, &ExpenseFilter::default())
        .await
        .unwrap();
    assert_eq!(titles(all), vec!["Dinner", "Weekly groceries", "April rent"]);

    let search = ExpenseFilter {
        search: Some("GROC".to_string()),
        category: None,
    };
    assert_eq!(
        titles(service.list_expenses(&group.id, &search).await.unwrap()),
        vec!["Weekly groceries"]
    );

    let by_category = ExpenseFilter {
        search: None,
        category: Some("Rent".to_string()),
    };
    assert_eq!(
        titles(service.list_expenses(&group.id, &by_category).await.unwrap()),
        vec!["April rent"]
    );

    assert_eq!(
        service.categories(&group.id).await.unwrap(),
        vec!["Food", "Groceries", "Rent"]
    );
}

#[tokio::test]
async fn test_expense_shares_for_equal_split() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob", "Carol"]).await;
    let (alice, bob, carol) = (&members[0], &members[1], &members[2]);

    let details = service
        .add_expense(&group.id, equal_expense("Cab", "100.00", alice, &[alice, bob, carol]))
        .await
        .unwrap();
    let shares: ShareMap = service.expense_shares(&details.expense.id).await.unwrap();
    assert_eq!(shares[&alice.id], money("33.34"));
    assert_eq!(shares[&bob.id], money("33.33"));
    assert_eq!(shares[&carol.id], money("33.33"));
}
