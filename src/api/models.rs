use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::error::LedgerError;
use crate::models::{Expense, ExpenseDraft, Group, PairwiseBalance, Payment, UserBalance};

// Request structs for JSON payloads. Every request carries the snapshot it is
// computed over; payments are expected to be scoped to the group already
// unless the endpoint says otherwise.
#[derive(Deserialize, ToSchema)]
pub struct UserBalanceRequest {
    pub user_id: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Deserialize, ToSchema)]
pub struct PairwiseBalanceRequest {
    pub user_a: String,
    pub user_b: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Deserialize, ToSchema)]
pub struct GroupLedgerRequest {
    pub members: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Deserialize, ToSchema)]
pub struct SettleUpRequest {
    pub debtor: String,
    pub creditor: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// `payments` is the whole ledger across groups here.
#[derive(Deserialize, ToSchema)]
pub struct SettleAllRequest {
    pub group: Group,
    pub members: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Deserialize, ToSchema)]
pub struct BalanceChartRequest {
    pub group: Group,
    pub members: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub viewing_user: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateExpenseRequest {
    pub draft: ExpenseDraft,
    pub members: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub payment: Payment,
}

/// `payments` is the whole ledger across groups here.
#[derive(Deserialize, ToSchema)]
pub struct OverallBalancesRequest {
    pub groups: Vec<Group>,
    #[serde(default)]
    pub expenses_by_group: HashMap<String, Vec<Expense>>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub viewing_user: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GroupBalancesResponse {
    pub balances: Vec<UserBalance>,
    /// Only pairs more than a cent apart.
    pub pairwise: Vec<PairwiseBalance>,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
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

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            LedgerError::EmptySplit
            | LedgerError::InvalidInput(..)
            | LedgerError::InvalidAmount(_)
            | LedgerError::SelfPayment(_) => StatusCode::BAD_REQUEST,
            LedgerError::NotGroupMember(_) => StatusCode::FORBIDDEN,
            LedgerError::NoDebtToSettle { .. } => StatusCode::CONFLICT,
            LedgerError::NoBalancesAvailable(_) => StatusCode::NOT_FOUND,
        };
        let error_message = match self.0 {
            LedgerError::InvalidInput(field, detail) => {
                format!("Invalid input for {}: {}", field, detail.description)
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
