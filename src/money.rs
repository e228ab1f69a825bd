//! Rounding and comparison helpers shared by every balance calculation.
//!
//! Calculations run on unrounded [`Decimal`] values and call [`round_money`]
//! once, on the value they return.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{MONEY_DECIMAL_PLACES, SETTLE_EPSILON};

/// Rounds to cents, halves away from zero. A negative zero comes back as plain zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    let rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Adds `delta` to `total` unless the sum would leave `Decimal`'s range.
/// Returns `false` and leaves `total` untouched in that case.
#[must_use]
pub fn add_checked(total: &mut Decimal, delta: Decimal) -> bool {
    match total.checked_add(delta) {
        Some(sum) => {
            *total = sum;
            true
        }
        None => false,
    }
}

/// `true` when `amount` is within one cent of zero.
#[must_use]
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= SETTLE_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_money(dec!(0.125)), dec!(0.13));
        assert_eq!(round_money(dec!(-0.125)), dec!(-0.13));
        assert_eq!(round_money(dec!(2.675)), dec!(2.68));
        assert_eq!(round_money(dec!(33.33333333)), dec!(33.33));
    }

    #[test]
    fn negative_zero_is_normalised() {
        let rounded = round_money(dec!(-0.001));
        assert_eq!(rounded, Decimal::ZERO);
        assert!(!rounded.is_sign_negative());
    }

    #[test]
    fn add_checked_refuses_to_overflow() {
        let mut total = dec!(70000000000000000000000000000);
        assert!(!add_checked(&mut total, dec!(70000000000000000000000000000)));
        assert_eq!(total, dec!(70000000000000000000000000000));

        assert!(add_checked(&mut total, dec!(-1)));
        assert_eq!(total, dec!(69999999999999999999999999999));
    }

    #[test]
    fn settled_includes_the_cent_boundary() {
        assert!(is_settled(dec!(0.01)));
        assert!(is_settled(dec!(-0.01)));
        assert!(!is_settled(dec!(0.011)));
    }
}
