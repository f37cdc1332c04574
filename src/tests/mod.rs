mod budget_tests;
mod expense_tests;
mod money_tests;
mod notification_tests;

use crate::config::ServiceSettings;
use crate::core::models::{Group, Member, NewExpense, SplitRule};
use crate::core::money::Money;
use crate::core::services::SplitService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use chrono::NaiveDate;

pub type TestService = SplitService<InMemoryLogging, InMemoryStorage, InMemoryCache>;

pub fn create_test_service() -> TestService {
    create_test_service_with(ServiceSettings::default())
}

pub fn create_test_service_with(settings: ServiceSettings) -> TestService {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    SplitService::new(storage, logging, cache, settings)
}

pub fn money(s: &str) -> Money {
    s.parse().unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Registers one member per name (email `<name>@example.com`, lowercased)
/// and puts them all in a new group created by the first.
pub async fn seed_group(service: &TestService, names: &[&str]) -> (Group, Vec<Member>) {
    let mut members = Vec::new();
    for name in names {
        let member = service
            .add_member(name.to_string(), format!("{}@example.com", name.to_lowercase()))
            .await
            .unwrap();
        members.push(member);
    }
    let mut group = service
        .create_group("Trip".to_string(), &members[0].id)
        .await
        .unwrap();
    for member in &members[1..] {
        group = service.join_group(&group.id, &member.id).await.unwrap();
    }
    (group, members)
}

pub fn equal_expense(title: &str, amount: &str, payer: &Member, participants: &[&Member]) -> NewExpense {
    NewExpense {
        title: title.to_string(),
        amount: money(amount),
        category: "Food".to_string(),
        payer_id: payer.id.clone(),
        date: date(2025, 4, 15),
        split: SplitRule::Equal {
            participants: participants.iter().map(|m| m.id.clone()).collect(),
        },
    }
}
