use crate::core::errors::LedgerError;
use crate::core::models::{Budget, Debt, Expense, Group, Member};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    members: Arc<RwLock<HashMap<String, Member>>>,
    members_by_email: Arc<RwLock<HashMap<String, String>>>,
    groups: Arc<RwLock<HashMap<String, Group>>>,
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
    debts: Arc<RwLock<HashMap<String, Debt>>>,
    budgets: Arc<RwLock<HashMap<String, Budget>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_member(&self, member: Member) -> Result<(), LedgerError> {
        let email_key = member.email.to_lowercase();
        let mut members_by_email = self.members_by_email.write().await;
        if members_by_email.contains_key(&email_key) {
            return Err(LedgerError::EmailAlreadyRegistered(member.email));
        }
        let mut members = self.members.write().await;
        members_by_email.insert(email_key, member.id.clone());
        members.insert(member.id.clone(), member);
        Ok(())
    }

    async fn get_member(&self, member_id: &str) -> Result<Option<Member>, LedgerError> {
        let members = self.members.read().await;
        Ok(members.get(member_id).cloned())
    }

    async fn get_member_by_email(&self, email: &str) -> Result<Option<Member>, LedgerError> {
        let member_id = self
            .members_by_email
            .read()
            .await
            .get(&email.to_lowercase())
            .cloned();
        Ok(match member_id {
            Some(id) => self.members.read().await.get(&id).cloned(),
            None => None,
        })
    }

    async fn list_members(&self) -> Result<Vec<Member>, LedgerError> {
        Ok(self.members.read().await.values().cloned().collect())
    }

    async fn save_group(&self, group: Group) -> Result<(), LedgerError> {
        self.groups.write().await.insert(group.id.clone(), group);
        Ok(())
    }

    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, LedgerError> {
        Ok(self.groups.read().await.get(group_id).cloned())
    }

    async fn get_member_groups(&self, member_id: &str) -> Result<Vec<Group>, LedgerError> {
        let groups = self.groups.read().await;
        let mut member_groups: Vec<Group> = groups
            .values()
            .filter(|g| g.has_member(member_id))
            .cloned()
            .collect();
        member_groups.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(member_groups)
    }

    async fn delete_group(&self, group_id: &str) -> Result<(), LedgerError> {
        let removed = self.groups.write().await.remove(group_id);
        if removed.is_none() {
            return Err(LedgerError::GroupNotFound(group_id.to_string()));
        }
        self.expenses.write().await.retain(|_, e| e.group_id != group_id);
        self.debts.write().await.retain(|_, d| d.group_id != group_id);
        self.budgets.write().await.remove(group_id);
        Ok(())
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError> {
        self.expenses.write().await.insert(expense.id.clone(), expense);
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError> {
        Ok(self.expenses.read().await.get(expense_id).cloned())
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<(), LedgerError> {
        self.expenses
            .write()
            .await
            .remove(expense_id)
            .map(|_| ())
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))
    }

    async fn get_group_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError> {
        let expenses = self.expenses.read().await;
        let mut group_expenses: Vec<Expense> = expenses
            .values()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect();
        group_expenses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(group_expenses)
    }

    async fn save_debt(&self, debt: Debt) -> Result<(), LedgerError> {
        self.debts.write().await.insert(debt.id.clone(), debt);
        Ok(())
    }

    async fn get_debt(&self, debt_id: &str) -> Result<Option<Debt>, LedgerError> {
        Ok(self.debts.read().await.get(debt_id).cloned())
    }

    async fn get_group_debts(&self, group_id: &str) -> Result<Vec<Debt>, LedgerError> {
        let debts = self.debts.read().await;
        let mut group_debts: Vec<Debt> = debts
            .values()
            .filter(|d| d.group_id == group_id)
            .cloned()
            .collect();
        group_debts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(group_debts)
    }

    async fn save_budget(&self, budget: Budget) -> Result<(), LedgerError> {
        self.budgets.write().await.insert(budget.group_id.clone(), budget);
        Ok(())
    }

    async fn get_budget(&self, group_id: &str) -> Result<Option<Budget>, LedgerError> {
        Ok(self.budgets.read().await.get(group_id).cloned())
    }
}
