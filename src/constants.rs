use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One cent. Any balance or remainder whose magnitude does not exceed this is settled.
pub const SETTLE_EPSILON: Decimal = dec!(0.01);

/// Monetary results are rounded to cents.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Upper bound for a single expense or payment entered through the record boundary.
pub const MAX_AMOUNT: Decimal = dec!(999999);

pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_PARTICIPANT_NAME_LEN: usize = 100;

pub const MIN_GROUP_NAME_LEN: usize = 2;
pub const MAX_GROUP_NAME_LEN: usize = 50;

/// Label substituted for the viewing user's own name.
pub const YOU_LABEL: &str = "You";
