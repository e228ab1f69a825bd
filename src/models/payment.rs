use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::MAX_PARTICIPANT_NAME_LEN;
use crate::error::LedgerError;
use crate::models::Group;
use crate::validation::{validate_amount_input, validate_string_input};

/// Money handed directly from `who_paid` to `to_who` to discharge a debt.
///
/// Older records carry only `group_name`; newer ones carry `group_id` as well.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub who_paid: String,
    pub to_who: String,
    pub how_much_paid: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The group a payment is booked against, resolved once: a non-empty
/// `group_id` wins, otherwise the legacy `group_name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupScope<'a> {
    Id(&'a str),
    Name(&'a str),
}

impl Payment {
    pub fn new(
        who_paid: impl Into<String>,
        to_who: impl Into<String>,
        how_much_paid: Decimal,
    ) -> Result<Self, LedgerError> {
        Self {
            who_paid: who_paid.into(),
            to_who: to_who.into(),
            how_much_paid,
            ..Default::default()
        }
        .into_validated()
    }

    /// Trims the participant names and validates the result.
    pub fn into_validated(self) -> Result<Self, LedgerError> {
        let payment = Self {
            who_paid: self.who_paid.trim().to_string(),
            to_who: self.to_who.trim().to_string(),
            ..self
        };
        payment.validate()?;
        Ok(payment)
    }

    /// Books the payment against `group` by both id and name.
    pub fn in_group(self, group: &Group) -> Self {
        Self {
            group_id: Some(group.id.clone()),
            group_name: Some(group.name.clone()),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), LedgerError> {
        validate_string_input("who_paid", &self.who_paid, 1, MAX_PARTICIPANT_NAME_LEN)?;
        validate_string_input("to_who", &self.to_who, 1, MAX_PARTICIPANT_NAME_LEN)?;
        validate_amount_input("how_much_paid", self.how_much_paid)?;
        if self.who_paid.trim() == self.to_who.trim() {
            return Err(LedgerError::SelfPayment(self.who_paid.trim().to_string()));
        }
        Ok(())
    }

    pub fn scope(&self) -> Option<GroupScope<'_>> {
        match (self.group_id.as_deref(), self.group_name.as_deref()) {
            (Some(id), _) if !id.is_empty() => Some(GroupScope::Id(id)),
            (_, Some(name)) if !name.is_empty() => Some(GroupScope::Name(name)),
            _ => None,
        }
    }

    pub fn belongs_to(&self, group: &Group) -> bool {
        match self.scope() {
            Some(GroupScope::Id(id)) => id == group.id,
            Some(GroupScope::Name(name)) => name == group.name,
            None => false,
        }
    }

    /// `true` when `other` moves money between the same two people, in the same
    /// direction, within the same group as this record. The comparison key is
    /// this record's scope: its id if it has one, else its name.
    pub fn same_channel(&self, other: &Payment) -> bool {
        if self.who_paid != other.who_paid || self.to_who != other.to_who {
            return false;
        }
        match self.scope() {
            Some(GroupScope::Id(id)) => other.group_id.as_deref() == Some(id),
            Some(GroupScope::Name(name)) => other.group_name.as_deref() == Some(name),
            None => other.scope().is_none(),
        }
    }
}

/// The payments booked against `group`.
pub fn group_payments(payments: &[Payment], group: &Group) -> Vec<Payment> {
    payments
        .iter()
        .filter(|p| p.belongs_to(group))
        .cloned()
        .collect()
}
