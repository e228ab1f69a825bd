use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_PARTICIPANT_NAME_LEN};
use crate::error::LedgerError;
use crate::validation::{validate_amount_input, validate_string_input};

/// A shared cost paid by one participant and divided equally among `shared_with`.
///
/// Records read back from storage are taken as they are; only [`Expense::new`],
/// [`Expense::from_draft`] and [`Expense::revise`] validate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub message: String,
    pub cost: Decimal,
    pub who_paid: String,
    pub shared_with: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// What a user submits from the expense form.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ExpenseDraft {
    pub message: String,
    pub cost: Decimal,
    pub who_paid: String,
    pub shared_with: Vec<String>,
}

impl Expense {
    /// Names are trimmed before they are checked, deduplicated and stored.
    pub fn new<I, S>(
        cost: Decimal,
        who_paid: impl Into<String>,
        shared_with: I,
    ) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let who_paid = Into::<String>::into(who_paid).trim().to_string();
        validate_amount_input("cost", cost)?;
        validate_string_input("who_paid", &who_paid, 1, MAX_PARTICIPANT_NAME_LEN)?;

        let shared_with = distinct(
            shared_with
                .into_iter()
                .map(|name| Into::<String>::into(name).trim().to_string()),
        );
        if shared_with.is_empty() {
            return Err(LedgerError::EmptySplit);
        }
        for participant in &shared_with {
            validate_string_input("shared_with", participant, 1, MAX_PARTICIPANT_NAME_LEN)?;
        }

        Ok(Self {
            cost,
            who_paid,
            shared_with,
            ..Default::default()
        })
    }

    /// Validates a submitted form against the group's members and stamps a new record.
    pub fn from_draft(
        draft: ExpenseDraft,
        members: &[String],
        at: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        validate_string_input("message", &draft.message, 1, MAX_DESCRIPTION_LEN)?;
        let expense = Self::new(draft.cost, draft.who_paid, draft.shared_with)?;
        expense.ensure_members(members)?;

        Ok(Self {
            id: Some(Uuid::new_v4().to_string()),
            message: draft.message.trim().to_string(),
            created_at: Some(at),
            updated_at: Some(at),
            ..expense
        })
    }

    /// Replaces the record wholesale, keeping its identity and creation time.
    pub fn revise(
        &self,
        draft: ExpenseDraft,
        members: &[String],
        at: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        let revised = Self::from_draft(draft, members, at)?;
        Ok(Self {
            id: self.id.clone().or(revised.id),
            created_at: self.created_at.or(revised.created_at),
            ..revised
        })
    }

    pub fn is_shared_with(&self, participant: &str) -> bool {
        self.shared_with.iter().any(|p| p == participant)
    }

    /// Number of distinct participants sharing the cost.
    pub fn sharer_count(&self) -> usize {
        self.shared_with.iter().collect::<HashSet<_>>().len()
    }

    /// Each sharer's portion of the cost, or `None` when nobody shares it.
    pub fn share(&self) -> Option<Decimal> {
        match self.sharer_count() {
            0 => None,
            n => Some(self.cost / Decimal::from(n)),
        }
    }

    fn ensure_members(&self, members: &[String]) -> Result<(), LedgerError> {
        std::iter::once(&self.who_paid)
            .chain(&self.shared_with)
            .find(|p| !members.contains(*p))
            .map_or(Ok(()), |p| Err(LedgerError::NotGroupMember(p.clone())))
    }
}

fn distinct(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}
