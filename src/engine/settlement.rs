use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::SETTLE_EPSILON;
use crate::engine::{calculate_group_balances, calculate_pairwise_balance};
use crate::error::LedgerError;
use crate::models::{Expense, Group, Payment, SettlementSuggestion, group_payments};
use crate::money::{add_checked, is_settled, round_money};

/// Greedy debt simplification over the members' net balances.
///
/// The largest debtor pays the largest creditor as much as either side can
/// take, and the sweep moves on from whichever side drops below a cent.
/// Ties keep member order. For `n` participants with a non-zero balance this
/// yields at most `n - 1` suggestions; an already settled group yields none.
pub fn get_settlement_suggestions<S: AsRef<str>>(
    members: &[S],
    expenses: &[Expense],
    payments: &[Payment],
) -> Vec<SettlementSuggestion> {
    let balances = calculate_group_balances(members, expenses, payments);

    let mut creditors: Vec<(&str, Decimal)> = balances
        .iter()
        .filter_map(|b| {
            if b.balance > SETTLE_EPSILON {
                Some((b.user_id.as_str(), b.balance))
            } else {
                None
            }
        })
        .collect();

    let mut debtors: Vec<(&str, Decimal)> = balances
        .iter()
        .filter_map(|b| {
            if b.balance < -SETTLE_EPSILON {
                Some((b.user_id.as_str(), -b.balance))
            } else {
                None
            }
        })
        .collect();

    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut suggestions = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let (debtor, debt_amt) = debtors[i];
        let (creditor, credit_amt) = creditors[j];

        let settled_amt = debt_amt.min(credit_amt);

        if settled_amt > SETTLE_EPSILON {
            suggestions.push(SettlementSuggestion {
                from: debtor.to_string(),
                to: creditor.to_string(),
                amount: round_money(settled_amt),
            });
        }

        debtors[i].1 = debt_amt - settled_amt;
        creditors[j].1 = credit_amt - settled_amt;

        if debtors[i].1 < SETTLE_EPSILON {
            i += 1;
        }
        if creditors[j].1 < SETTLE_EPSILON {
            j += 1;
        }
    }

    debug!("Settlement suggestions: {:?}", suggestions);
    suggestions
}

/// The payment that clears the direct debt between `debtor` and `creditor`.
///
/// The direction follows the sign of the pairwise balance, so asking with the
/// two names swapped still produces the right payer.
pub fn suggest_settle_up(
    debtor: &str,
    creditor: &str,
    expenses: &[Expense],
    payments: &[Payment],
) -> Result<SettlementSuggestion, LedgerError> {
    let debt = calculate_pairwise_balance(debtor, creditor, expenses, payments);
    if is_settled(debt) {
        return Err(LedgerError::NoDebtToSettle {
            debtor: debtor.to_string(),
            creditor: creditor.to_string(),
        });
    }

    let (from, to) = if debt > Decimal::ZERO {
        (debtor, creditor)
    } else {
        (creditor, debtor)
    };

    Ok(SettlementSuggestion {
        from: from.to_string(),
        to: to.to_string(),
        amount: debt.abs(),
    })
}

/// Adds `payment` to `ledger`. A record for the same payer, payee and group
/// absorbs the amount instead of a second record being appended, unless the
/// merged amount would overflow.
///
/// `payment` is expected to be validated already (see [`Payment::into_validated`]).
pub fn record_payment(ledger: &[Payment], payment: Payment) -> Vec<Payment> {
    let mut ledger = ledger.to_vec();
    accumulate(&mut ledger, payment);
    ledger
}

fn accumulate(ledger: &mut Vec<Payment>, payment: Payment) {
    if let Some(existing) = ledger.iter_mut().find(|existing| existing.same_channel(&payment)) {
        if add_checked(&mut existing.how_much_paid, payment.how_much_paid) {
            debug!(
                "Merged payment {} -> {} into existing record, now {}",
                existing.who_paid, existing.to_who, existing.how_much_paid
            );
            return;
        }
        warn!(
            "Merging payment {} -> {} would overflow, keeping it as a separate record",
            payment.who_paid, payment.to_who
        );
    }

    debug!(
        "Appending payment {} -> {} of {}",
        payment.who_paid, payment.to_who, payment.how_much_paid
    );
    ledger.push(payment);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettleAllOutcome {
    pub suggestions: Vec<SettlementSuggestion>,
    /// The whole payment ledger with the settling payments folded in.
    pub payments: Vec<Payment>,
}

/// Settles every member of `group` in one go.
///
/// `payments` is the complete ledger across groups; only the part booked
/// against `group` feeds the suggestions, and the returned ledger keeps every
/// other record untouched. The caller decides whether to store the result.
pub fn settle_all<S: AsRef<str>>(
    group: &Group,
    members: &[S],
    expenses: &[Expense],
    payments: &[Payment],
    at: DateTime<Utc>,
) -> SettleAllOutcome {
    let scoped = group_payments(payments, group);
    let suggestions = get_settlement_suggestions(members, expenses, &scoped);

    if suggestions.is_empty() {
        info!("Everyone in group {} is already settled up", group.id);
    } else {
        info!(
            "Settling group {} with {} payment(s)",
            group.id,
            suggestions.len()
        );
    }

    let mut ledger = payments.to_vec();
    for suggestion in &suggestions {
        accumulate(&mut ledger, suggestion.to_payment(group, at));
    }

    SettleAllOutcome {
        suggestions,
        payments: ledger,
    }
}
