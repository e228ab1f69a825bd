mod balance_tests;
mod visualization_tests;

use crate::models::{Expense, Payment};
use rust_decimal::Decimal;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// A stored expense record, unvalidated, as the record store would hand it over.
pub fn expense(cost: Decimal, who_paid: &str, shared_with: &[&str]) -> Expense {
    Expense {
        cost,
        who_paid: who_paid.to_string(),
        shared_with: names(shared_with),
        ..Default::default()
    }
}

/// A stored payment record without any group scope.
pub fn payment(who_paid: &str, to_who: &str, how_much_paid: Decimal) -> Payment {
    Payment {
        who_paid: who_paid.to_string(),
        to_who: to_who.to_string(),
        how_much_paid,
        ..Default::default()
    }
}
