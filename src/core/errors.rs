use serde::Serialize;
use thiserror::Error;

use crate::core::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LedgerError {
    /// Expense or transfer amount is zero or negative
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Money),

    /// Split requested over nobody
    #[error("Participant set is empty")]
    EmptyParticipantSet,

    #[error("Participant {0} appears more than once")]
    DuplicateParticipant(String),

    #[error("Share for {0} is negative")]
    NegativeShare(String),

    /// Custom split does not add up; `delta` is amount minus the sum of shares
    #[error("Split shares do not add up to the amount (delta {delta})")]
    SplitMismatch { delta: Money },

    /// Sum of user-supplied amounts left the representable range
    #[error("Amount total is out of range")]
    AmountOverflow,

    /// Balances do not net to zero, so no plan can zero them all
    #[error("Ledger does not balance (residual {residual})")]
    UnbalancedLedger { residual: Money },

    #[error("Member {0} not found")]
    UnknownMember(String),

    #[error("A member cannot owe themselves")]
    SelfDebt,

    #[error("Debt {0} not found")]
    DebtNotFound(String),

    #[error("Invalid money value: {0}")]
    InvalidMoney(String),

    #[error("Group {0} not found")]
    GroupNotFound(String),

    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    #[error("No budget set for group {0}")]
    BudgetNotFound(String),

    #[error("Notification {0} not found")]
    NotificationNotFound(String),

    #[error("Member {0} is already a group member")]
    AlreadyGroupMember(String),

    #[error("Member {0} is not a group member")]
    NotGroupMember(String),

    #[error("Cannot remove last group member")]
    CannotRemoveLastMember,

    /// Member still owes or is owed money in the group
    #[error("Member {0} has an outstanding balance of {1}")]
    OutstandingBalance(String, Money),

    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
