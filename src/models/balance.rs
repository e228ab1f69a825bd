use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Group, Payment};

/// Net position of one participant: positive is owed money, negative owes money.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserBalance {
    pub user_id: String,
    pub balance: Decimal,
}

impl UserBalance {
    pub fn new(user_id: impl Into<String>, balance: Decimal) -> Self {
        Self {
            user_id: user_id.into(),
            balance,
        }
    }
}

/// Direct debt between two participants: positive means `user_a` owes `user_b`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PairwiseBalance {
    pub user_a: String,
    pub user_b: String,
    pub amount: Decimal,
}

/// A payment instruction that reduces outstanding debt when carried out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettlementSuggestion {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

impl SettlementSuggestion {
    /// The payment record that carries out this suggestion inside `group`.
    pub fn to_payment(&self, group: &Group, at: DateTime<Utc>) -> Payment {
        Payment {
            id: Some(Uuid::new_v4().to_string()),
            who_paid: self.from.clone(),
            to_who: self.to.clone(),
            how_much_paid: self.amount,
            created_at: Some(at),
            ..Default::default()
        }
        .in_group(group)
    }
}
