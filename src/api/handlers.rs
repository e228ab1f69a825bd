use crate::{
    api::models::*,
    engine::{
        SettleAllOutcome, calculate_group_balances, calculate_overall_balances,
        calculate_pairwise_balance, calculate_user_balance, get_settlement_suggestions,
        outstanding_pairwise_balances, record_payment, settle_all, suggest_settle_up,
    },
    models::{Expense, PairwiseBalance, Payment, SettlementSuggestion, UserBalance},
    visualization::Visualization,
};
use axum::{Json, Router, routing::{get, post}};
use chrono::Utc;
use log::{info, warn};
use serde_json::Value;

// Define API routes
pub fn api_routes() -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/balances/user", post(user_balance))
        .route("/balances/pairwise", post(pairwise_balance))
        .route("/balances/overall", post(overall_balances))
        .route("/groups/balances", post(group_balances))
        .route("/groups/settlements", post(settlement_suggestions))
        .route("/groups/settle-up", post(settle_up))
        .route("/groups/settle-all", post(settle_all_members))
        .route("/groups/chart", post(balance_chart))
        .route("/expenses", post(create_expense))
        .route("/payments", post(add_payment))
}

#[utoipa::path(
    post,
    path = "/balances/user",
    request_body = UserBalanceRequest,
    responses((status = 200, description = "Net balance of the user", body = UserBalance))
)]
pub async fn user_balance(Json(req): Json<UserBalanceRequest>) -> Json<UserBalance> {
    let balance = calculate_user_balance(&req.user_id, &req.expenses, &req.payments);
    Json(UserBalance::new(req.user_id, balance))
}

#[utoipa::path(
    post,
    path = "/balances/pairwise",
    request_body = PairwiseBalanceRequest,
    responses((status = 200, description = "Positive when user_a owes user_b", body = PairwiseBalance))
)]
pub async fn pairwise_balance(Json(req): Json<PairwiseBalanceRequest>) -> Json<PairwiseBalance> {
    let amount = calculate_pairwise_balance(&req.user_a, &req.user_b, &req.expenses, &req.payments);
    Json(PairwiseBalance {
        user_a: req.user_a,
        user_b: req.user_b,
        amount,
    })
}

#[utoipa::path(
    post,
    path = "/groups/balances",
    request_body = GroupLedgerRequest,
    responses((status = 200, description = "Member balances and outstanding pairs", body = GroupBalancesResponse))
)]
pub async fn group_balances(Json(req): Json<GroupLedgerRequest>) -> Json<GroupBalancesResponse> {
    Json(GroupBalancesResponse {
        balances: calculate_group_balances(&req.members, &req.expenses, &req.payments),
        pairwise: outstanding_pairwise_balances(&req.members, &req.expenses, &req.payments),
    })
}

#[utoipa::path(
    post,
    path = "/groups/settlements",
    request_body = GroupLedgerRequest,
    responses((status = 200, description = "Greedy settlement suggestions", body = [SettlementSuggestion]))
)]
pub async fn settlement_suggestions(
    Json(req): Json<GroupLedgerRequest>,
) -> Json<Vec<SettlementSuggestion>> {
    Json(get_settlement_suggestions(
        &req.members,
        &req.expenses,
        &req.payments,
    ))
}

#[utoipa::path(
    post,
    path = "/groups/settle-up",
    request_body = SettleUpRequest,
    responses(
        (status = 200, description = "Payment clearing the direct debt", body = SettlementSuggestion),
        (status = 409, description = "The two participants are even", body = ErrorResponse)
    )
)]
pub async fn settle_up(
    Json(req): Json<SettleUpRequest>,
) -> Result<Json<SettlementSuggestion>, ApiError> {
    let suggestion = suggest_settle_up(&req.debtor, &req.creditor, &req.expenses, &req.payments)?;
    Ok(Json(suggestion))
}

#[utoipa::path(
    post,
    path = "/groups/settle-all",
    request_body = SettleAllRequest,
    responses((status = 200, description = "Suggestions and the updated payment ledger", body = SettleAllOutcome))
)]
pub async fn settle_all_members(Json(req): Json<SettleAllRequest>) -> Json<SettleAllOutcome> {
    let outcome = settle_all(
        &req.group,
        &req.members,
        &req.expenses,
        &req.payments,
        Utc::now(),
    );
    Json(outcome)
}

#[utoipa::path(
    post,
    path = "/groups/chart",
    request_body = BalanceChartRequest,
    responses(
        (status = 200, description = "Chart.js bar chart configuration"),
        (status = 404, description = "Nothing to chart", body = ErrorResponse)
    )
)]
pub async fn balance_chart(Json(req): Json<BalanceChartRequest>) -> Result<Json<Value>, ApiError> {
    let balances = calculate_group_balances(&req.members, &req.expenses, &req.payments);
    let chart =
        Visualization::generate_balance_chart(&req.group, &balances, req.viewing_user.as_deref())?;
    Ok(Json(chart))
}

#[utoipa::path(
    post,
    path = "/expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 200, description = "Validated expense record", body = Expense),
        (status = 400, description = "Invalid expense", body = ErrorResponse),
        (status = 403, description = "Participant outside the group", body = ErrorResponse)
    )
)]
pub async fn create_expense(Json(req): Json<CreateExpenseRequest>) -> Result<Json<Expense>, ApiError> {
    let expense = Expense::from_draft(req.draft, &req.members, Utc::now()).inspect_err(|e| {
        warn!("Rejected expense: {}", e);
    })?;
    info!("Expense {:?} accepted for {}", expense.id, expense.cost);
    Ok(Json(expense))
}

#[utoipa::path(
    post,
    path = "/payments",
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment ledger with the payment recorded", body = [Payment]),
        (status = 400, description = "Invalid payment", body = ErrorResponse)
    )
)]
pub async fn add_payment(Json(req): Json<RecordPaymentRequest>) -> Result<Json<Vec<Payment>>, ApiError> {
    let payment = req.payment.into_validated().inspect_err(|e| {
        warn!("Rejected payment: {}", e);
    })?;
    Ok(Json(record_payment(&req.payments, payment)))
}

#[utoipa::path(
    post,
    path = "/balances/overall",
    request_body = OverallBalancesRequest,
    responses((status = 200, description = "Balances summed across groups", body = [UserBalance]))
)]
pub async fn overall_balances(Json(req): Json<OverallBalancesRequest>) -> Json<Vec<UserBalance>> {
    Json(calculate_overall_balances(
        &req.groups,
        &req.expenses_by_group,
        &req.payments,
        req.viewing_user.as_deref(),
    ))
}
