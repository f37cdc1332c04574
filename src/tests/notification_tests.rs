use crate::constants::{DEBT_RECORDED, EXPENSE_ADDED, GROUP_CREATED, MEMBER_ADDED};
use crate::core::errors::LedgerError;
use crate::core::models::{ActivityKind, NotificationSettings};
use crate::tests::{create_test_service, equal_expense, money, seed_group};

#[tokio::test]
async fn test_every_mutation_is_logged_newest_first() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob"]).await;
    let (alice, bob) = (&members[0], &members[1]);
    service
        .add_expense(&group.id, equal_expense("Dinner", "20.00", alice, &[alice, bob]))
        .await
        .unwrap();
    service
        .record_debt(&group.id, &bob.id, &alice.id, money("5.00"), "Coffee".to_string())
        .await
        .unwrap();

    let entries = service.notifications(&NotificationSettings::default()).await.unwrap();
    // two members, group, join, expense, debt
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0].action, DEBT_RECORDED);
    assert_eq!(entries[0].kind, ActivityKind::Settlement);
    assert_eq!(entries[1].action, EXPENSE_ADDED);
    assert_eq!(entries[1].group_id.as_deref(), Some(group.id.as_str()));
    assert_eq!(entries[3].action, GROUP_CREATED);
    assert_eq!(entries[5].action, MEMBER_ADDED);
    assert!(entries.iter().all(|e| !e.read));
}

#[tokio::test]
async fn test_settings_filter_kinds() {
    let service = create_test_service();
    let (group, members) = seed_group(&service, &["Alice", "Bob"]).await;
    let (alice, bob) = (&members[0], &members[1]);
    service
        .add_expense(&group.id, equal_expense("Dinner", "20.00", alice, &[alice, bob]))
        .await
        .unwrap();

    let only_expenses = NotificationSettings {
        expenses: true,
        settlements: false,
        budget: false,
        groups: false,
    };
    let entries = service.notifications(&only_expenses).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, ActivityKind::Expense);
    assert_eq!(service.unread_count(&only_expenses).await.unwrap(), 1);
}

#[tokio::test]
async fn test_mark_read() {
    let service = create_test_service();
    seed_group(&service, &["Alice", "Bob"]).await;
    let settings = NotificationSettings::default();

    let entries = service.notifications(&settings).await.unwrap();
    service.mark_notification_read(&entries[0].id).await.unwrap();
    assert_eq!(service.unread_count(&settings).await.unwrap(), entries.len() - 1);

    assert_eq!(
        service.mark_all_notifications_read().await.unwrap(),
        entries.len() - 1
    );
    assert_eq!(service.unread_count(&settings).await.unwrap(), 0);
    assert_eq!(service.mark_all_notifications_read().await.unwrap(), 0);

    assert_eq!(
        service.mark_notification_read("missing").await.unwrap_err(),
        LedgerError::NotificationNotFound("missing".to_string())
    );
}
