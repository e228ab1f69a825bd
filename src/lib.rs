pub mod api;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod money;
pub mod validation;
pub mod visualization;

pub use engine::{
    SettleAllOutcome, calculate_all_pairwise_balances, calculate_group_balances,
    calculate_overall_balances, calculate_pairwise_balance, calculate_user_balance,
    get_settlement_suggestions, outstanding_pairwise_balances, record_payment, settle_all,
    suggest_settle_up,
};
pub use error::LedgerError;
pub use models::{
    Expense, ExpenseDraft, Group, GroupScope, PairwiseBalance, Payment, SettlementSuggestion,
    UserBalance, group_payments,
};
pub use visualization::{BalanceStatus, Visualization};

#[cfg(test)]
mod tests;
