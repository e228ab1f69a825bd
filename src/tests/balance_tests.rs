use crate::engine::{calculate_group_balances, calculate_user_balance};
use crate::models::UserBalance;
use crate::tests::{expense, init_logger, names, payment};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_single_payer_sharing_the_cost() {
    let expenses = vec![expense(dec!(100), "Alice", &["Alice", "Bob"])];

    assert_eq!(calculate_user_balance("Alice", &expenses, &[]), dec!(50));
    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), dec!(-50));
}

#[test]
fn test_payer_outside_the_split_gets_the_full_cost_back() {
    let expenses = vec![expense(dec!(90), "Alice", &["Bob", "Carol"])];

    assert_eq!(calculate_user_balance("Alice", &expenses, &[]), dec!(90));
    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), dec!(-45));
    assert_eq!(calculate_user_balance("Carol", &expenses, &[]), dec!(-45));
}

#[test]
fn test_payment_settles_the_debt() {
    let expenses = vec![expense(dec!(60), "Alice", &["Alice", "Bob"])];
    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), dec!(-30));

    let payments = vec![payment("Bob", "Alice", dec!(30))];
    assert_eq!(calculate_user_balance("Bob", &expenses, &payments), Decimal::ZERO);
    assert_eq!(calculate_user_balance("Alice", &expenses, &payments), Decimal::ZERO);
}

#[test]
fn test_partial_payment_leaves_the_remainder() {
    let expenses = vec![expense(dec!(60), "Alice", &["Alice", "Bob"])];
    let payments = vec![payment("Bob", "Alice", dec!(12.50))];

    assert_eq!(calculate_user_balance("Bob", &expenses, &payments), dec!(-17.50));
    assert_eq!(calculate_user_balance("Alice", &expenses, &payments), dec!(17.50));
}

#[test]
fn test_rounding_happens_once_at_the_end() {
    // Three thirds of a cent would drift to 0.03 if each share were rounded first
    let expenses = vec![
        expense(dec!(0.10), "Alice", &["Alice", "Bob", "Carol"]),
        expense(dec!(0.10), "Alice", &["Alice", "Bob", "Carol"]),
        expense(dec!(0.10), "Alice", &["Alice", "Bob", "Carol"]),
    ];

    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), dec!(-0.10));
    assert_eq!(calculate_user_balance("Alice", &expenses, &[]), dec!(0.20));
}

#[test]
fn test_uneven_split_rounds_half_away_from_zero() {
    let expenses = vec![expense(dec!(100), "Alice", &["Alice", "Bob", "Carol"])];

    assert_eq!(calculate_user_balance("Alice", &expenses, &[]), dec!(66.67));
    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), dec!(-33.33));
    assert_eq!(calculate_user_balance("Carol", &expenses, &[]), dec!(-33.33));
}

#[test]
fn test_expense_without_sharers_is_skipped() {
    init_logger();
    let expenses = vec![
        expense(dec!(40), "Alice", &[]),
        expense(dec!(10), "Alice", &["Alice", "Bob"]),
    ];

    assert_eq!(calculate_user_balance("Alice", &expenses, &[]), dec!(5));
    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), dec!(-5));
}

#[test]
fn test_duplicate_sharers_count_once() {
    let expenses = vec![expense(dec!(90), "Alice", &["Bob", "Bob", "Carol"])];

    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), dec!(-45));
    assert_eq!(calculate_user_balance("Carol", &expenses, &[]), dec!(-45));
}

#[test]
fn test_unknown_user_has_zero_balance() {
    let expenses = vec![expense(dec!(100), "Alice", &["Alice", "Bob"])];
    let payments = vec![payment("Bob", "Alice", dec!(20))];

    assert_eq!(calculate_user_balance("Zed", &expenses, &payments), Decimal::ZERO);
}

#[test]
fn test_balance_is_idempotent() {
    let expenses = vec![
        expense(dec!(33.33), "Alice", &["Alice", "Bob", "Carol"]),
        expense(dec!(12.07), "Carol", &["Bob"]),
    ];
    let payments = vec![payment("Bob", "Carol", dec!(5))];

    let first = calculate_user_balance("Bob", &expenses, &payments);
    let second = calculate_user_balance("Bob", &expenses, &payments);
    assert_eq!(first, second);
}

#[test]
fn test_group_balances_follow_member_order() {
    let members = names(&["Carol", "Alice", "Bob"]);
    let expenses = vec![expense(dec!(90), "Alice", &["Alice", "Bob", "Carol"])];

    let balances = calculate_group_balances(&members, &expenses, &[]);

    assert_eq!(
        balances,
        vec![
            UserBalance::new("Carol", dec!(-30)),
            UserBalance::new("Alice", dec!(60)),
            UserBalance::new("Bob", dec!(-30)),
        ]
    );
}

#[test]
fn test_group_balances_conserve_money() {
    let members = names(&["Alice", "Bob", "Carol", "Dave"]);
    let expenses = vec![
        expense(dec!(120), "Alice", &["Alice", "Bob", "Carol", "Dave"]),
        expense(dec!(45.50), "Bob", &["Carol", "Dave"]),
        expense(dec!(9.99), "Dave", &["Alice", "Bob", "Carol"]),
    ];

    let total: Decimal = calculate_group_balances(&members, &expenses, &[])
        .iter()
        .map(|b| b.balance)
        .sum();

    assert!(total.abs() <= dec!(0.01), "money leaked: {}", total);
}

#[test]
fn test_record_that_would_overflow_is_skipped() {
    init_logger();
    let huge = dec!(70000000000000000000000000000);
    let expenses = vec![
        expense(huge, "Alice", &["Bob"]),
        expense(huge, "Alice", &["Bob"]),
        expense(dec!(10), "Alice", &["Bob"]),
    ];

    assert_eq!(calculate_user_balance("Alice", &expenses, &[]), huge + dec!(10));
    assert_eq!(calculate_user_balance("Bob", &expenses, &[]), -huge - dec!(10));
}

#[test]
fn test_payment_that_would_overflow_is_skipped() {
    let huge = dec!(70000000000000000000000000000);
    let expenses = vec![expense(huge, "Alice", &["Bob"])];
    let payments = vec![payment("Alice", "Carol", huge), payment("Bob", "Alice", dec!(5))];

    assert_eq!(calculate_user_balance("Alice", &expenses, &payments), huge - dec!(5));
}
