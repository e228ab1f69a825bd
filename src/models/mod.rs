pub mod balance;
pub mod expense;
pub mod group;
pub mod payment;

pub use balance::{PairwiseBalance, SettlementSuggestion, UserBalance};
pub use expense::{Expense, ExpenseDraft};
pub use group::Group;
pub use payment::{GroupScope, Payment, group_payments};
