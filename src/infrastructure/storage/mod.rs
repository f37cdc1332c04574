use crate::core::errors::LedgerError;
use crate::core::models::{Budget, Debt, Expense, Group, Member};
use async_trait::async_trait;

/// Persistence port. The service loads records through it and feeds them
/// to the calculation core; nothing here computes balances.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_member(&self, member: Member) -> Result<(), LedgerError>;
    async fn get_member(&self, member_id: &str) -> Result<Option<Member>, LedgerError>;
    async fn get_member_by_email(&self, email: &str) -> Result<Option<Member>, LedgerError>;
    async fn list_members(&self) -> Result<Vec<Member>, LedgerError>;

    async fn save_group(&self, group: Group) -> Result<(), LedgerError>;
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, LedgerError>;
    async fn get_member_groups(&self, member_id: &str) -> Result<Vec<Group>, LedgerError>;
    /// Removes the group together with its expenses, debts and budget.
    async fn delete_group(&self, group_id: &str) -> Result<(), LedgerError>;

    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError>;
    async fn get_expense(&self, expense_id: &str) -> Result<Option<Expense>, LedgerError>;
    async fn delete_expense(&self, expense_id: &str) -> Result<(), LedgerError>;
    async fn get_group_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError>;

    async fn save_debt(&self, debt: Debt) -> Result<(), LedgerError>;
    async fn get_debt(&self, debt_id: &str) -> Result<Option<Debt>, LedgerError>;
    async fn get_group_debts(&self, group_id: &str) -> Result<Vec<Debt>, LedgerError>;

    async fn save_budget(&self, budget: Budget) -> Result<(), LedgerError>;
    async fn get_budget(&self, group_id: &str) -> Result<Option<Budget>, LedgerError>;
}

pub mod in_memory;
