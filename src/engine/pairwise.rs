use log::{debug, warn};
use rust_decimal::Decimal;

use crate::models::{Expense, PairwiseBalance, Payment};
use crate::money::{add_checked, is_settled, round_money};

/// How much `user_a` owes `user_b` directly (negative when `user_b` owes `user_a`).
///
/// Only the edge between the two is looked at: what either of them owes a
/// third participant does not net in here, so this can disagree with the
/// settlement suggestions for the same group. Callers show it as the
/// bilateral relationship and nothing more.
pub fn calculate_pairwise_balance(
    user_a: &str,
    user_b: &str,
    expenses: &[Expense],
    payments: &[Payment],
) -> Decimal {
    if user_a == user_b {
        return Decimal::ZERO;
    }

    let mut balance = Decimal::ZERO;

    for expense in expenses {
        let Some(share) = expense.share() else {
            continue;
        };

        let delta = if expense.who_paid == user_a && expense.is_shared_with(user_b) {
            -share
        } else if expense.who_paid == user_b && expense.is_shared_with(user_a) {
            share
        } else {
            continue;
        };

        if !add_checked(&mut balance, delta) {
            warn!(
                "Skipping expense {:?}: balance between {} and {} would overflow",
                expense.id, user_a, user_b
            );
        }
    }

    for payment in payments {
        let delta = if payment.who_paid == user_a && payment.to_who == user_b {
            -payment.how_much_paid
        } else if payment.who_paid == user_b && payment.to_who == user_a {
            payment.how_much_paid
        } else {
            continue;
        };

        if !add_checked(&mut balance, delta) {
            warn!(
                "Skipping payment {:?}: balance between {} and {} would overflow",
                payment.id, user_a, user_b
            );
        }
    }

    round_money(balance)
}

/// Every unordered pair `(members[i], members[j])` with `i < j`, in member order.
pub fn calculate_all_pairwise_balances<S: AsRef<str>>(
    members: &[S],
    expenses: &[Expense],
    payments: &[Payment],
) -> Vec<PairwiseBalance> {
    let mut balances = Vec::with_capacity(members.len() * members.len().saturating_sub(1) / 2);

    for (i, user_a) in members.iter().enumerate() {
        for user_b in &members[i + 1..] {
            let (user_a, user_b) = (user_a.as_ref(), user_b.as_ref());
            balances.push(PairwiseBalance {
                user_a: user_a.to_string(),
                user_b: user_b.to_string(),
                amount: calculate_pairwise_balance(user_a, user_b, expenses, payments),
            });
        }
    }

    debug!("Calculated {} pairwise balances", balances.len());
    balances
}

/// The pairs from [`calculate_all_pairwise_balances`] that are more than a cent apart.
pub fn outstanding_pairwise_balances<S: AsRef<str>>(
    members: &[S],
    expenses: &[Expense],
    payments: &[Payment],
) -> Vec<PairwiseBalance> {
    calculate_all_pairwise_balances(members, expenses, payments)
        .into_iter()
        .filter(|pair| !is_settled(pair.amount))
        .collect()
}
