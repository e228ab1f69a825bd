use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::engine::calculate_group_balances;
use crate::models::{Expense, Group, Payment, UserBalance, group_payments};
use crate::money::{add_checked, round_money};

/// Running totals that remember the order participants were first seen in.
#[derive(Default)]
struct Tally {
    order: Vec<String>,
    totals: HashMap<String, Decimal>,
}

impl Tally {
    fn note(&mut self, participant: &str) {
        if !self.totals.contains_key(participant) {
            self.order.push(participant.to_string());
            self.totals.insert(participant.to_string(), Decimal::ZERO);
        }
    }

    fn add(&mut self, participant: &str, amount: Decimal) {
        self.note(participant);
        if let Some(total) = self.totals.get_mut(participant) {
            if !add_checked(total, amount) {
                warn!("Overall balance of {} would overflow, dropping {}", participant, amount);
            }
        }
    }

    fn into_balances(mut self) -> Vec<UserBalance> {
        self.order
            .into_iter()
            .map(|participant| {
                let total = self.totals.remove(&participant).unwrap_or_default();
                UserBalance::new(participant, round_money(total))
            })
            .collect()
    }
}

/// Sums every participant's net balance across all `groups`.
///
/// `expenses_by_group` is keyed by group id. `payments` is the whole ledger;
/// each group only sees the payments booked against it, by id or, for older
/// records, by group name.
///
/// Every group's owner is implicit. When `viewing_user` is given it is taken
/// as the owner of each group. Otherwise the owner is guessed per group as the
/// first payer who is not one of its friends.
///
/// The result lists the viewing user first, then everyone else in the order
/// they were first seen.
pub fn calculate_overall_balances(
    groups: &[Group],
    expenses_by_group: &HashMap<String, Vec<Expense>>,
    payments: &[Payment],
    viewing_user: Option<&str>,
) -> Vec<UserBalance> {
    let mut tally = Tally::default();

    if let Some(viewer) = viewing_user {
        tally.note(viewer);
    }
    for friend in groups.iter().flat_map(|g| g.friends.iter()) {
        tally.note(friend);
    }

    for group in groups {
        let expenses = expenses_by_group
            .get(&group.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let scoped = group_payments(payments, group);

        let owner = viewing_user.or_else(|| group.infer_owner(expenses, &scoped));
        if owner.is_none() {
            debug!("No owner could be determined for group {}", group.id);
        }

        let members = group.members(owner);
        for balance in calculate_group_balances(&members, expenses, &scoped) {
            tally.add(&balance.user_id, balance.balance);
        }
    }

    let balances = tally.into_balances();
    debug!("Overall balances: {:?}", balances);
    balances
}
