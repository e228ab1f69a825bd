//! Balance and settlement calculations.
//!
//! Every function here is pure: it reads the expense, payment and membership
//! snapshots handed to it and returns a computed view. Nothing is cached and
//! nothing is written back, so the functions may be called concurrently on
//! shared snapshots. Payments are expected to be scoped by the caller (see
//! [`crate::models::group_payments`]) unless a function says otherwise.
//!
//! Amounts stay unrounded while they are being summed and are rounded to
//! cents once, on the way out.

mod overall;
mod pairwise;
mod settlement;
mod user;

pub use overall::calculate_overall_balances;
pub use pairwise::{
    calculate_all_pairwise_balances, calculate_pairwise_balance, outstanding_pairwise_balances,
};
pub use settlement::{
    SettleAllOutcome, get_settlement_suggestions, record_payment, settle_all, suggest_settle_up,
};
pub use user::{calculate_group_balances, calculate_user_balance};
