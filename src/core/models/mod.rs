pub mod activity;
pub mod balance;
pub mod budget;
pub mod debt;
pub mod expense;
pub mod group;
pub mod member;

pub use activity::{ActivityEntry, ActivityKind, NotificationSettings};
pub use balance::NetBalance;
pub use budget::{Budget, CategoryBudget};
pub use debt::{Debt, DebtBoard};
pub use expense::{Expense, ExpenseFilter, NewExpense, SplitRule};
pub use group::Group;
pub use member::{Member, MemberSearch};
