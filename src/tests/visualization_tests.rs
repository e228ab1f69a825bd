use crate::error::LedgerError;
use crate::models::{Group, UserBalance};
use crate::tests::{init_logger, names};
use crate::visualization::{BalanceStatus, Visualization};
use rust_decimal_macros::dec;

fn trip() -> Group {
    Group {
        id: "g1".to_string(),
        name: "Trip".to_string(),
        friends: names(&["Bob", "Carol"]),
    }
}

#[test]
fn test_display_name_shows_the_viewer_as_you() {
    assert_eq!(Visualization::display_name("Alice", Some("Alice")), "You");
    assert_eq!(Visualization::display_name("Bob", Some("Alice")), "Bob");
    assert_eq!(Visualization::display_name("Bob", None), "Bob");
}

#[test]
fn test_format_amount_drops_the_sign() {
    assert_eq!(Visualization::format_amount(dec!(-12.5)), "12.50");
    assert_eq!(Visualization::format_amount(dec!(33.333)), "33.33");
    assert_eq!(Visualization::format_amount(dec!(0)), "0.00");
}

#[test]
fn test_format_currency_groups_thousands() {
    assert_eq!(Visualization::format_currency(dec!(-1234.5)), "-$1,234.50");
    assert_eq!(Visualization::format_currency(dec!(1000000)), "$1,000,000.00");
    assert_eq!(Visualization::format_currency(dec!(999.999)), "$1,000.00");
    assert_eq!(Visualization::format_currency(dec!(-0.001)), "$0.00");
}

#[test]
fn test_balance_status_uses_the_cent_threshold() {
    assert_eq!(Visualization::balance_status(dec!(0.02)), BalanceStatus::GetsBack);
    assert_eq!(Visualization::balance_status(dec!(-5)), BalanceStatus::Owes);
    assert_eq!(Visualization::balance_status(dec!(0.01)), BalanceStatus::SettledUp);
    assert_eq!(Visualization::balance_status(dec!(-0.01)), BalanceStatus::SettledUp);
}

#[test]
fn test_balance_status_serializes_snake_case() {
    let value = serde_json::to_value(BalanceStatus::SettledUp).unwrap();

    assert_eq!(value, "settled_up");
}

#[test]
fn test_generate_balance_chart() {
    init_logger();
    let balances = vec![
        UserBalance::new("Alice", dec!(60)),
        UserBalance::new("Bob", dec!(-30.5)),
        UserBalance::new("Carol", dec!(0)),
    ];

    let chart = Visualization::generate_balance_chart(&trip(), &balances, Some("Alice")).unwrap();

    assert_eq!(chart["type"], "bar");
    assert_eq!(
        chart["data"]["labels"],
        serde_json::json!(["You", "Bob", "Carol"])
    );
    let data = chart["data"]["datasets"][0]["data"].as_array().unwrap();
    assert_eq!(data[0].as_f64(), Some(60.0));
    assert_eq!(data[1].as_f64(), Some(-30.5));
    assert_eq!(
        chart["data"]["datasets"][0]["backgroundColor"],
        serde_json::json!([
            "rgba(75, 192, 192, 0.6)",
            "rgba(255, 99, 132, 0.6)",
            "rgba(201, 203, 207, 0.6)"
        ])
    );
    assert_eq!(
        chart["options"]["plugins"]["title"]["text"],
        "Balances for Group: Trip"
    );
}

#[test]
fn test_generate_balance_chart_without_balances() {
    let result = Visualization::generate_balance_chart(&trip(), &[], None);

    assert_eq!(result, Err(LedgerError::NoBalancesAvailable("g1".to_string())));
}
