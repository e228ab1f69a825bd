use utoipa::OpenApi;

use crate::{
    api::models::{
        BalanceChartRequest, CreateExpenseRequest, ErrorResponse, GroupBalancesResponse,
        GroupLedgerRequest, OverallBalancesRequest, PairwiseBalanceRequest, RecordPaymentRequest,
        SettleAllRequest, SettleUpRequest, UserBalanceRequest,
    },
    engine::SettleAllOutcome,
    models::{Expense, ExpenseDraft, Group, PairwiseBalance, Payment, SettlementSuggestion, UserBalance},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::user_balance,
        super::handlers::pairwise_balance,
        super::handlers::group_balances,
        super::handlers::settlement_suggestions,
        super::handlers::settle_up,
        super::handlers::settle_all_members,
        super::handlers::balance_chart,
        super::handlers::create_expense,
        super::handlers::add_payment,
        super::handlers::overall_balances
    ),
    components(schemas(
        UserBalanceRequest,
        PairwiseBalanceRequest,
        GroupLedgerRequest,
        SettleUpRequest,
        SettleAllRequest,
        BalanceChartRequest,
        CreateExpenseRequest,
        RecordPaymentRequest,
        OverallBalancesRequest,
        GroupBalancesResponse,
        ErrorResponse,
        Expense,
        ExpenseDraft,
        Payment,
        Group,
        UserBalance,
        PairwiseBalance,
        SettlementSuggestion,
        SettleAllOutcome
    )),
    info(
        title = "Splitledger API",
        description = "Balances and settlement suggestions computed over shared-expense snapshots",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
