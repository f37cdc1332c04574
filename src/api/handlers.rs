use crate::{
    api::models::*,
    core::{
        budget::BudgetReport,
        errors::LedgerError,
        ledger::SETTLEMENT_DESCRIPTION,
        models::{
            ActivityEntry, Budget, Debt, DebtBoard, Expense, ExpenseFilter, Group, Member, MemberSearch, NetBalance,
            NewExpense, NotificationSettings,
        },
        reports::{CategorySlice, MonthlyTotal},
        services::{ExpenseDetails, GroupSummary, MemberProfile, MemberSummary, SplitService},
        split::ShareMap,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;

pub type AppService = Arc<SplitService<InMemoryLogging, InMemoryStorage, InMemoryCache>>;

// Define API routes
pub fn api_routes(service: AppService) -> Router {
    Router::new()
        .route("/members", post(create_member).get(list_members))
        .route("/members/{member_id}", get(get_member))
        .route("/members/{member_id}/groups", get(get_member_groups))
        .route("/members/{member_id}/profile", get(get_member_profile))
        .route("/groups", post(create_group))
        .route("/groups/{group_id}", get(get_group).delete(delete_group))
        .route("/groups/{group_id}/invite", post(invite_member))
        .route("/groups/{group_id}/join", post(join_group))
        .route("/groups/{group_id}/members/remove", post(remove_member))
        .route("/groups/{group_id}/expenses", post(add_expense).get(list_expenses))
        .route("/groups/{group_id}/categories", get(get_categories))
        .route(
            "/expenses/{expense_id}",
            get(get_expense).put(replace_expense).delete(delete_expense),
        )
        .route("/expenses/{expense_id}/shares", get(get_expense_shares))
        .route("/groups/{group_id}/debts", post(record_debt).get(get_debt_board))
        .route("/debts/{debt_id}/toggle", post(toggle_debt_settled))
        .route("/groups/{group_id}/balances", get(get_balances))
        .route("/groups/{group_id}/settlement", get(get_settlement_plan))
        .route("/groups/{group_id}/summary", get(get_group_summary))
        .route("/groups/{group_id}/budget", get(get_budget_report).put(set_budget))
        .route("/groups/{group_id}/budget/refresh", post(refresh_budget_spending))
        .route("/groups/{group_id}/reports/categories", get(get_category_breakdown))
        .route("/groups/{group_id}/reports/monthly", get(get_monthly_totals))
        .route("/groups/{group_id}/reports/balances", get(get_balance_chart))
        .route("/notifications", get(get_notifications))
        .route("/notifications/unread", get(get_unread_count))
        .route("/notifications/read-all", post(mark_all_notifications_read))
        .route("/notifications/{entry_id}/read", post(mark_notification_read))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created successfully", body = Member),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_member(
    State(service): State<AppService>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let member = service.add_member(req.name, req.email).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    get,
    path = "/api/members",
    params(MemberSearch),
    responses(
        (status = 200, description = "Member directory with totals", body = Vec<MemberSummary>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_members(
    State(service): State<AppService>,
    Query(filter): Query<MemberSearch>,
) -> Result<Json<Vec<MemberSummary>>, ApiError> {
    let members = service.list_members(&filter).await?;
    Ok(Json(members))
}

#[utoipa::path(
    get,
    path = "/api/members/{member_id}",
    params(
        ("member_id" = String, Path, description = "ID of the member to retrieve")
    ),
    responses(
        (status = 200, description = "Member retrieved successfully", body = Member),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_member(
    State(service): State<AppService>,
    Path(member_id): Path<String>,
) -> Result<Json<Member>, ApiError> {
    let member = service
        .get_member(&member_id)
        .await?
        .ok_or_else(|| LedgerError::UnknownMember(member_id))?;
    Ok(Json(member))
}

#[utoipa::path(
    get,
    path = "/api/members/{member_id}/groups",
    params(
        ("member_id" = String, Path, description = "ID of the member")
    ),
    responses(
        (status = 200, description = "Groups the member belongs to", body = Vec<Group>),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_member_groups(
    State(service): State<AppService>,
    Path(member_id): Path<String>,
) -> Result<Json<Vec<Group>>, ApiError> {
    Ok(Json(service.list_member_groups(&member_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/members/{member_id}/profile",
    params(
        ("member_id" = String, Path, description = "ID of the member")
    ),
    responses(
        (status = 200, description = "Totals across all of the member's groups", body = MemberProfile),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_member_profile(
    State(service): State<AppService>,
    Path(member_id): Path<String>,
) -> Result<Json<MemberProfile>, ApiError> {
    Ok(Json(service.member_profile(&member_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created successfully", body = Group),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_group(
    State(service): State<AppService>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let group = service.create_group(req.name, &req.created_by_id).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Group retrieved successfully", body = Group),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_group(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(service.get_group(&group_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}",
    params(
        ("group_id" = String, Path, description = "ID of the group to delete")
    ),
    responses(
        (status = 204, description = "Group and its records deleted"),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_group(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_group(&group_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/invite",
    request_body = InviteMemberRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Member added by email", body = Group),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 404, description = "Group or member not found", body = ErrorResponse),
        (status = 409, description = "Already a group member", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn invite_member(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Json(req): Json<InviteMemberRequest>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(service.invite_member_by_email(&group_id, &req.email).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/join",
    request_body = GroupMemberRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Joined group successfully", body = Group),
        (status = 404, description = "Group or member not found", body = ErrorResponse),
        (status = 409, description = "Already a group member", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn join_group(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Json(req): Json<GroupMemberRequest>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(service.join_group(&group_id, &req.member_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/members/remove",
    request_body = GroupMemberRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Member removed", body = Group),
        (status = 400, description = "Cannot remove last group member", body = ErrorResponse),
        (status = 403, description = "Not a group member", body = ErrorResponse),
        (status = 409, description = "Member has an outstanding balance", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn remove_member(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Json(req): Json<GroupMemberRequest>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(service.remove_member(&group_id, &req.member_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/expenses",
    request_body = NewExpense,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 201, description = "Expense added", body = ExpenseDetails),
        (status = 400, description = "Invalid amount or split", body = ErrorResponse),
        (status = 403, description = "Payer or participant is not a group member", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn add_expense(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Json(req): Json<NewExpense>,
) -> Result<(StatusCode, Json<ExpenseDetails>), ApiError> {
    let details = service.add_expense(&group_id, req).await?;
    Ok((StatusCode::CREATED, Json(details)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/expenses",
    params(
        ("group_id" = String, Path, description = "ID of the group"),
        ExpenseFilter
    ),
    responses(
        (status = 200, description = "Matching expenses, newest first", body = Vec<Expense>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_expenses(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Query(filter): Query<ExpenseFilter>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    Ok(Json(service.list_expenses(&group_id, &filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/categories",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Distinct expense categories", body = Vec<String>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_categories(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(service.categories(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 200, description = "Expense retrieved successfully", body = Expense),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_expense(
    State(service): State<AppService>,
    Path(expense_id): Path<String>,
) -> Result<Json<Expense>, ApiError> {
    Ok(Json(service.get_expense(&expense_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{expense_id}",
    request_body = NewExpense,
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 200, description = "Expense replaced", body = ExpenseDetails),
        (status = 400, description = "Invalid amount or split", body = ErrorResponse),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn replace_expense(
    State(service): State<AppService>,
    Path(expense_id): Path<String>,
    Json(req): Json<NewExpense>,
) -> Result<Json<ExpenseDetails>, ApiError> {
    Ok(Json(service.replace_expense(&expense_id, req).await?))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_expense(
    State(service): State<AppService>,
    Path(expense_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_expense(&expense_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/expenses/{expense_id}/shares",
    params(
        ("expense_id" = String, Path, description = "ID of the expense")
    ),
    responses(
        (status = 200, description = "Share per participant", content_type = "application/json"),
        (status = 404, description = "Expense not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_expense_shares(
    State(service): State<AppService>,
    Path(expense_id): Path<String>,
) -> Result<Json<ShareMap>, ApiError> {
    Ok(Json(service.expense_shares(&expense_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/debts",
    request_body = RecordDebtRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 201, description = "Debt recorded", body = Debt),
        (status = 400, description = "Invalid amount or self debt", body = ErrorResponse),
        (status = 403, description = "Not a group member", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn record_debt(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Json(req): Json<RecordDebtRequest>,
) -> Result<(StatusCode, Json<Debt>), ApiError> {
    let description = req
        .description
        .unwrap_or_else(|| SETTLEMENT_DESCRIPTION.to_string());
    let debt = service
        .record_debt(&group_id, &req.from, &req.to, req.amount, description)
        .await?;
    Ok((StatusCode::CREATED, Json(debt)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/debts",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Active and settled debts", body = DebtBoard),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_debt_board(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<DebtBoard>, ApiError> {
    Ok(Json(service.debt_board(&group_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/debts/{debt_id}/toggle",
    params(
        ("debt_id" = String, Path, description = "ID of the debt")
    ),
    responses(
        (status = 200, description = "Settled flag flipped", body = Debt),
        (status = 404, description = "Debt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn toggle_debt_settled(
    State(service): State<AppService>,
    Path(debt_id): Path<String>,
) -> Result<Json<Debt>, ApiError> {
    Ok(Json(service.toggle_debt_settled(&debt_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/balances",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Net balance per member", body = Vec<NetBalance>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_balances(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<NetBalance>>, ApiError> {
    Ok(Json(service.group_balances(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/settlement",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Transfers that zero every balance", body = Vec<Debt>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_settlement_plan(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<Debt>>, ApiError> {
    Ok(Json(service.settlement_plan(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/summary",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Balances and settlement plan", body = GroupSummary),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_group_summary(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupSummary>, ApiError> {
    Ok(Json(service.group_summary(&group_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/groups/{group_id}/budget",
    request_body = SetBudgetRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Budget stored", body = Budget),
        (status = 400, description = "Invalid budget", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn set_budget(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Json(req): Json<SetBudgetRequest>,
) -> Result<Json<Budget>, ApiError> {
    Ok(Json(service.set_budget(&group_id, req.monthly_total, req.categories).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/budget",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Budget usage report", body = BudgetReport),
        (status = 404, description = "Group or budget not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_budget_report(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<BudgetReport>, ApiError> {
    Ok(Json(service.budget_report(&group_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/budget/refresh",
    request_body = BudgetPeriod,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Spending recomputed from expenses", body = BudgetReport),
        (status = 400, description = "Invalid month", body = ErrorResponse),
        (status = 404, description = "Group or budget not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn refresh_budget_spending(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
    Json(period): Json<BudgetPeriod>,
) -> Result<Json<BudgetReport>, ApiError> {
    Ok(Json(
        service
            .refresh_budget_spending(&group_id, period.year, period.month)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/reports/categories",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Spend per category", body = Vec<CategorySlice>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_category_breakdown(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<CategorySlice>>, ApiError> {
    Ok(Json(service.category_breakdown(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/reports/monthly",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Spend per calendar month", body = Vec<MonthlyTotal>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_monthly_totals(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<MonthlyTotal>>, ApiError> {
    Ok(Json(service.monthly_totals(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/reports/balances",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Chart.js bar chart of net balances", content_type = "application/json"),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_balance_chart(
    State(service): State<AppService>,
    Path(group_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(service.balance_chart(&group_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(NotificationSettings),
    responses(
        (status = 200, description = "Activity entries allowed by the settings, newest first", body = Vec<ActivityEntry>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_notifications(
    State(service): State<AppService>,
    Query(settings): Query<NotificationSettings>,
) -> Result<Json<Vec<ActivityEntry>>, ApiError> {
    Ok(Json(service.notifications(&settings).await?))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread",
    params(NotificationSettings),
    responses(
        (status = 200, description = "Number of unread entries", body = UnreadCountResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_unread_count(
    State(service): State<AppService>,
    Query(settings): Query<NotificationSettings>,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let unread = service.unread_count(&settings).await?;
    Ok(Json(UnreadCountResponse { unread }))
}

#[utoipa::path(
    post,
    path = "/api/notifications/{entry_id}/read",
    params(
        ("entry_id" = String, Path, description = "ID of the activity entry")
    ),
    responses(
        (status = 204, description = "Entry marked read"),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn mark_notification_read(
    State(service): State<AppService>,
    Path(entry_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.mark_notification_read(&entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    responses(
        (status = 200, description = "Entries newly marked read", body = MarkAllReadResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn mark_all_notifications_read(
    State(service): State<AppService>,
) -> Result<Json<MarkAllReadResponse>, ApiError> {
    let marked = service.mark_all_notifications_read().await?;
    Ok(Json(MarkAllReadResponse { marked }))
}
