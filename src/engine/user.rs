use log::{debug, warn};
use rust_decimal::Decimal;

use crate::models::{Expense, Payment, UserBalance};
use crate::money::{add_checked, round_money};

/// Net balance of `user_id`: positive when the user is owed, negative when
/// the user owes.
///
/// A payer who is not among the sharers gets the whole cost back. An expense
/// with nobody to share it contributes nothing. Unknown users come out at 0.
/// A record that would push the running total out of range is skipped.
pub fn calculate_user_balance(user_id: &str, expenses: &[Expense], payments: &[Payment]) -> Decimal {
    let mut balance = Decimal::ZERO;

    for expense in expenses {
        let Some(share) = expense.share() else {
            warn!(
                "Skipping expense {:?} paid by {}: nobody shares it",
                expense.id, expense.who_paid
            );
            continue;
        };

        let delta = if expense.who_paid == user_id {
            if expense.is_shared_with(user_id) {
                expense.cost - share
            } else {
                expense.cost
            }
        } else if expense.is_shared_with(user_id) {
            -share
        } else {
            continue;
        };

        if !add_checked(&mut balance, delta) {
            warn!(
                "Skipping expense {:?}: balance of {} would overflow",
                expense.id, user_id
            );
        }
    }

    // Paying discharges debt, receiving cancels credit
    for payment in payments {
        let delta = if payment.who_paid == user_id {
            payment.how_much_paid
        } else if payment.to_who == user_id {
            -payment.how_much_paid
        } else {
            continue;
        };

        if !add_checked(&mut balance, delta) {
            warn!(
                "Skipping payment {:?}: balance of {} would overflow",
                payment.id, user_id
            );
        }
    }

    round_money(balance)
}

/// [`calculate_user_balance`] for each member, in member order.
pub fn calculate_group_balances<S: AsRef<str>>(
    members: &[S],
    expenses: &[Expense],
    payments: &[Payment],
) -> Vec<UserBalance> {
    let balances: Vec<UserBalance> = members
        .iter()
        .map(|member| {
            let member = member.as_ref();
            UserBalance::new(member, calculate_user_balance(member, expenses, payments))
        })
        .collect();

    debug!("Group balances calculated: {:?}", balances);
    balances
}
