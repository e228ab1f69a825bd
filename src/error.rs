use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum LedgerError {
    /// An expense lists nobody to share its cost
    #[error("Expense must be shared with at least one participant")]
    EmptySplit,

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Amount is not positive, too large or too precise
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A payment whose payer is also its recipient
    #[error("{0} cannot pay themselves")]
    SelfPayment(String),

    /// Participant named on a record is not part of the group
    #[error("{0} is not a group member")]
    NotGroupMember(String),

    /// Settle-up requested between two participants who are already even
    #[error("No debt to settle between {debtor} and {creditor}")]
    NoDebtToSettle { debtor: String, creditor: String },

    /// Nothing to chart for the group
    #[error("No balances available for group {0}")]
    NoBalancesAvailable(String),
}
