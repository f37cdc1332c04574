use utoipa::OpenApi;

use crate::{
    api::models::{
        BudgetPeriod, CreateGroupRequest, CreateMemberRequest, ErrorResponse, GroupMemberRequest, InviteMemberRequest,
        MarkAllReadResponse, RecordDebtRequest, SetBudgetRequest, UnreadCountResponse,
    },
    core::{
        budget::{BudgetReport, BudgetStatus, CategoryReport},
        models::{
            ActivityEntry, ActivityKind, Budget, CategoryBudget, Debt, DebtBoard, Expense, Group, Member, NetBalance,
            NewExpense, SplitRule,
        },
        reports::{CategorySlice, MonthlyTotal},
        services::{ExpenseDetails, GroupBalance, GroupSummary, MemberProfile, MemberSummary},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_member,
        super::handlers::list_members,
        super::handlers::get_member,
        super::handlers::get_member_groups,
        super::handlers::get_member_profile,
        super::handlers::create_group,
        super::handlers::get_group,
        super::handlers::delete_group,
        super::handlers::invite_member,
        super::handlers::join_group,
        super::handlers::remove_member,
        super::handlers::add_expense,
        super::handlers::list_expenses,
        super::handlers::get_categories,
        super::handlers::get_expense,
        super::handlers::replace_expense,
        super::handlers::delete_expense,
        super::handlers::get_expense_shares,
        super::handlers::record_debt,
        super::handlers::get_debt_board,
        super::handlers::toggle_debt_settled,
        super::handlers::get_balances,
        super::handlers::get_settlement_plan,
        super::handlers::get_group_summary,
        super::handlers::set_budget,
        super::handlers::get_budget_report,
        super::handlers::refresh_budget_spending,
        super::handlers::get_category_breakdown,
        super::handlers::get_monthly_totals,
        super::handlers::get_balance_chart,
        super::handlers::get_notifications,
        super::handlers::get_unread_count,
        super::handlers::mark_notification_read,
        super::handlers::mark_all_notifications_read
    ),
    components(schemas(
        CreateMemberRequest,
        CreateGroupRequest,
        InviteMemberRequest,
        GroupMemberRequest,
        RecordDebtRequest,
        SetBudgetRequest,
        BudgetPeriod,
        UnreadCountResponse,
        MarkAllReadResponse,
        ErrorResponse,
        Member,
        Group,
        SplitRule,
        NewExpense,
        Expense,
        ExpenseDetails,
        Debt,
        DebtBoard,
        NetBalance,
        GroupSummary,
        GroupBalance,
        MemberProfile,
        MemberSummary,
        CategoryBudget,
        Budget,
        BudgetStatus,
        CategoryReport,
        BudgetReport,
        CategorySlice,
        MonthlyTotal,
        ActivityKind,
        ActivityEntry
    )),
    info(
        title = "Splitledger API",
        description = "API for splitting group expenses, tracking balances and settling up",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
