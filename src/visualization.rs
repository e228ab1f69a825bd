use crate::constants::{SETTLE_EPSILON, YOU_LABEL};
use crate::error::LedgerError;
use crate::models::{Group, UserBalance};
use crate::money::round_money;
use log::{debug, error};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};

/// How a balance reads to the person looking at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    GetsBack,
    Owes,
    SettledUp,
}

// Display helpers layered on top of the engine's results
pub struct Visualization;

impl Visualization {
    /// Shows the viewing user as "You".
    pub fn display_name<'a>(name: &'a str, viewing_user: Option<&str>) -> &'a str {
        if viewing_user == Some(name) {
            YOU_LABEL
        } else {
            name
        }
    }

    /// Magnitude with two decimals, e.g. `-12.5` becomes `"12.50"`.
    pub fn format_amount(amount: Decimal) -> String {
        format!("{:.2}", round_money(amount).abs())
    }

    /// Dollar amount with thousands separators, e.g. `-1234.5` becomes `"-$1,234.50"`.
    pub fn format_currency(amount: Decimal) -> String {
        let rounded = round_money(amount);
        let formatted = format!("{:.2}", rounded.abs());
        let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        format!("{}${}.{}", sign, grouped, cents)
    }

    pub fn balance_status(balance: Decimal) -> BalanceStatus {
        if balance > SETTLE_EPSILON {
            BalanceStatus::GetsBack
        } else if balance < -SETTLE_EPSILON {
            BalanceStatus::Owes
        } else {
            BalanceStatus::SettledUp
        }
    }

    /// Generates a Chart.js bar chart configuration for the balances of a group.
    ///
    /// # Arguments
    /// * `group` - The group the balances belong to, used for the chart title.
    /// * `balances` - Member balances as returned by `calculate_group_balances`.
    /// * `viewing_user` - Shown as "You" in the labels when present.
    ///
    /// # Returns
    /// A JSON Value containing the Chart.js configuration, or an error when there
    /// is nothing to chart.
    pub fn generate_balance_chart(
        group: &Group,
        balances: &[UserBalance],
        viewing_user: Option<&str>,
    ) -> Result<Value, LedgerError> {
        debug!(
            "Generating balance chart for group {} with {} balances",
            group.id,
            balances.len()
        );

        if balances.is_empty() {
            error!("No balances found for group {}", group.id);
            return Err(LedgerError::NoBalancesAvailable(group.id.clone()));
        }

        let labels: Vec<&str> = balances
            .iter()
            .map(|b| Self::display_name(&b.user_id, viewing_user))
            .collect();
        let data: Vec<Decimal> = balances.iter().map(|b| b.balance).collect();

        // Green for people who get money back, red for people who owe, grey when even
        let mut background_colors = Vec::with_capacity(balances.len());
        let mut border_colors = Vec::with_capacity(balances.len());
        for balance in balances {
            let (r, g, b) = match Self::balance_status(balance.balance) {
                BalanceStatus::GetsBack => (75, 192, 192),
                BalanceStatus::Owes => (255, 99, 132),
                BalanceStatus::SettledUp => (201, 203, 207),
            };
            background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
            border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
        }

        let chart_config = json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Balances",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "title": {
                            "display": true,
                            "text": "Balance"
                        }
                    },
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Members"
                        }
                    }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Balances for Group: {}", group.name)
                    }
                }
            }
        });

        debug!("Generated Chart.js configuration for group {}", group.id);
        Ok(chart_config)
    }
}
