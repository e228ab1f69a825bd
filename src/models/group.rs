use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{MAX_GROUP_NAME_LEN, MIN_GROUP_NAME_LEN};
use crate::error::LedgerError;
use crate::models::{Expense, Payment};
use crate::validation::validate_string_input;

/// A group as stored by the record store. The owner is implicit: `friends`
/// lists everybody else.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub friends: Vec<String>,
}

impl Group {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        friends: Vec<String>,
    ) -> Result<Self, LedgerError> {
        let name = name.into();
        validate_string_input("name", &name, MIN_GROUP_NAME_LEN, MAX_GROUP_NAME_LEN)?;
        Ok(Self {
            id: id.into(),
            name: name.trim().to_string(),
            friends,
        })
    }

    pub fn has_friend(&self, participant: &str) -> bool {
        self.friends.iter().any(|f| f == participant)
    }

    /// Owner first (when known), then friends, without repeats.
    pub fn members(&self, owner: Option<&str>) -> Vec<String> {
        let mut members: Vec<String> = Vec::with_capacity(self.friends.len() + 1);
        for name in owner.into_iter().chain(self.friends.iter().map(String::as_str)) {
            if !members.iter().any(|m| m == name) {
                members.push(name.to_string());
            }
        }
        members
    }

    /// Guesses the implicit owner: the first expense payer, then the first
    /// payment payer, who is not one of the friends.
    pub fn infer_owner<'a>(&self, expenses: &'a [Expense], payments: &'a [Payment]) -> Option<&'a str> {
        expenses
            .iter()
            .map(|e| e.who_paid.as_str())
            .chain(payments.iter().map(|p| p.who_paid.as_str()))
            .find(|payer| !payer.is_empty() && !self.has_friend(payer))
    }
}
