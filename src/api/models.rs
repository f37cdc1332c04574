use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::core::errors::LedgerError;
use crate::core::models::CategoryBudget;
use crate::core::money::Money;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    pub created_by_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct InviteMemberRequest {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct GroupMemberRequest {
    pub member_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RecordDebtRequest {
    pub from: String,
    pub to: String,
    #[schema(value_type = String, example = "25.00")]
    pub amount: Money,
    /// Defaults to "Settle up"
    pub description: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct SetBudgetRequest {
    #[schema(value_type = String, example = "3000.00")]
    pub monthly_total: Money,
    #[schema(value_type = Object)]
    pub categories: BTreeMap<String, CategoryBudget>,
}

#[derive(Deserialize, ToSchema)]
pub struct BudgetPeriod {
    pub year: i32,
    pub month: u32,
}

#[derive(Serialize, ToSchema)]
pub struct UnreadCountResponse {
    pub unread: usize,
}

#[derive(Serialize, ToSchema)]
pub struct MarkAllReadResponse {
    pub marked: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for LedgerError to implement IntoResponse
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            LedgerError::InvalidAmount(_)
            | LedgerError::EmptyParticipantSet
            | LedgerError::DuplicateParticipant(_)
            | LedgerError::NegativeShare(_)
            | LedgerError::SplitMismatch { .. }
            | LedgerError::SelfDebt
            | LedgerError::InvalidMoney(_)
            | LedgerError::AmountOverflow
            | LedgerError::InvalidEmail(_)
            | LedgerError::InvalidInput(..)
            | LedgerError::CannotRemoveLastMember => StatusCode::BAD_REQUEST,
            LedgerError::UnknownMember(_)
            | LedgerError::DebtNotFound(_)
            | LedgerError::GroupNotFound(_)
            | LedgerError::ExpenseNotFound(_)
            | LedgerError::BudgetNotFound(_)
            | LedgerError::NotificationNotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::NotGroupMember(_) => StatusCode::FORBIDDEN,
            LedgerError::AlreadyGroupMember(_)
            | LedgerError::OutstandingBalance(..)
            | LedgerError::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
            LedgerError::UnbalancedLedger { .. }
            | LedgerError::StorageError(_)
            | LedgerError::LoggingError(_)
            | LedgerError::CacheError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        let error_message = match &self.0 {
            LedgerError::InvalidInput(field, detail) => {
                format!("Invalid input for {}: {}", field, detail.description)
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
