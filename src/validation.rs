//! Input checks applied where records enter the system.

use rust_decimal::Decimal;

use crate::constants::{MAX_AMOUNT, MONEY_DECIMAL_PLACES};
use crate::error::{FieldError, LedgerError};

fn invalid(field: &str, title: String, description: String) -> LedgerError {
    LedgerError::InvalidInput(
        field.to_string(),
        FieldError {
            field: field.to_string(),
            title,
            description,
        },
    )
}

pub fn validate_string_input(
    field: &str,
    value: &str,
    min_length: usize,
    max_length: usize,
) -> Result<(), LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(
            field,
            format!("Invalid {}", field),
            format!("{} cannot be empty", field),
        ));
    }
    let length = trimmed.chars().count();
    if length < min_length {
        return Err(invalid(
            field,
            format!("{} Too Short", field),
            format!("{} must be at least {} characters", field, min_length),
        ));
    }
    if length > max_length {
        return Err(invalid(
            field,
            format!("{} Too Long", field),
            format!("{} cannot exceed {} characters", field, max_length),
        ));
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err(invalid(
            field,
            format!("Invalid {}", field),
            format!("{} contains invalid characters", field),
        ));
    }
    Ok(())
}

pub fn validate_amount_input(field: &str, amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "{} must be greater than 0",
            field
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::InvalidAmount(format!(
            "{} cannot exceed {}",
            field, MAX_AMOUNT
        )));
    }
    if amount.normalize().scale() > MONEY_DECIMAL_PLACES {
        return Err(LedgerError::InvalidAmount(format!(
            "{} cannot have more than {} decimal places",
            field, MONEY_DECIMAL_PLACES
        )));
    }
    Ok(())
}
