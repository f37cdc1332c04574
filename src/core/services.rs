use crate::config::ServiceSettings;
use crate::constants::{
    BUDGET_SET, BUDGET_SPENDING_REFRESHED, DEBT_RECORDED, DEBT_REOPENED, DEBT_SETTLED, EXPENSE_ADDED,
    EXPENSE_DELETED, EXPENSE_REPLACED, GROUP_CREATED, GROUP_DELETED, MAX_AMOUNT_MINOR, MAX_CATEGORY_LENGTH,
    MAX_NAME_LENGTH, MAX_TITLE_LENGTH, MEMBER_ADDED, MEMBER_INVITED, MEMBER_JOINED, MEMBER_REMOVED,
};
use crate::core::budget::{self, BudgetReport};
use crate::core::errors::{FieldError, LedgerError};
use crate::core::ledger::LedgerEngine;
use crate::core::models::{
    ActivityEntry, ActivityKind, Budget, CategoryBudget, Debt, DebtBoard, Expense, ExpenseFilter, Group, Member,
    MemberSearch, NetBalance, NewExpense, NotificationSettings, SplitRule,
};
use crate::core::money::Money;
use crate::core::reports::{self, CategorySlice, MonthlyTotal};
use crate::core::split::{ShareMap, SplitCalculator};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Balances and settlement plan of one group, as the dashboard shows them.
#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct GroupSummary {
    pub group: Group,
    #[schema(value_type = String, example = "2209.85")]
    pub total_spent: Money,
    pub balances: Vec<NetBalance>,
    pub settlement_plan: Vec<Debt>,
}

/// A stored expense together with its computed shares. `adjustment` is the
/// amount folded into a custom split to make it add up (zero when none).
#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct ExpenseDetails {
    pub expense: Expense,
    #[schema(value_type = Object)]
    pub shares: ShareMap,
    #[schema(value_type = String, example = "0.00")]
    pub adjustment: Money,
}

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq, Eq)]
pub struct GroupBalance {
    pub group_id: String,
    pub group_name: String,
    #[schema(value_type = String, example = "-33.00")]
    pub net: Money,
}

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct MemberProfile {
    pub member: Member,
    #[schema(value_type = String, example = "1240.60")]
    pub contributed: Money,
    #[schema(value_type = String, example = "450.20")]
    pub owed: Money,
    #[schema(value_type = String, example = "790.40")]
    pub net: Money,
    pub groups: Vec<GroupBalance>,
}

/// One row of the member directory: totals across all of the member's groups.
#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub member: Member,
    #[schema(value_type = String, example = "1240.60")]
    pub contributed: Money,
    #[schema(value_type = String, example = "450.20")]
    pub owed: Money,
    #[schema(value_type = String, example = "790.40")]
    pub net: Money,
}

pub struct SplitService<L: LoggingService, S: Storage, C: Cache> {
    storage: S,
    logging: L,
    cache: C,
    settings: ServiceSettings,
    group_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<L: LoggingService, S: Storage, C: Cache> SplitService<L, S, C> {
    pub fn new(storage: S, logging: L, cache: C, settings: ServiceSettings) -> Self {
        SplitService {
            storage,
            logging,
            cache,
            settings,
            group_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), LedgerError> {
        if value.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError::new(field, format!("Invalid {}", field), format!("{} cannot be empty", field)),
            ));
        }
        if value.chars().count() > max_length {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError::new(
                    field,
                    format!("{} Too Long", field),
                    format!("{} cannot exceed {} characters", field, max_length),
                ),
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError::new(
                    field,
                    format!("Invalid {}", field),
                    format!("{} contains invalid characters", field),
                ),
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount.minor() > MAX_AMOUNT_MINOR {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError::new(
                    field,
                    "Amount Too Large",
                    format!("Amount cannot exceed {}", Money::from_minor(MAX_AMOUNT_MINOR)),
                ),
            ));
        }
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), LedgerError> {
        if !email.contains('@') || !email.contains('.') || email.len() < 5 {
            return Err(LedgerError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    async fn load_group(&self, group_id: &str) -> Result<Group, LedgerError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))
    }

    async fn load_member(&self, member_id: &str) -> Result<Member, LedgerError> {
        self.storage
            .get_member(member_id)
            .await?
            .ok_or_else(|| LedgerError::UnknownMember(member_id.to_string()))
    }

    async fn load_expense(&self, expense_id: &str) -> Result<Expense, LedgerError> {
        self.storage
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| LedgerError::ExpenseNotFound(expense_id.to_string()))
    }

    fn ensure_group_member(&self, group: &Group, member_id: &str) -> Result<(), LedgerError> {
        if group.has_member(member_id) {
            Ok(())
        } else {
            Err(LedgerError::NotGroupMember(member_id.to_string()))
        }
    }

    /// Serializes writes that change balances in one group, so a member
    /// removal cannot interleave with a new expense or debt.
    async fn lock_group(&self, group_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.group_locks.lock().await;
            locks.entry(group_id.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Records the activity entry and drops the cached summary of the group.
    async fn log_and_invalidate(
        &self,
        kind: ActivityKind,
        action: &str,
        details: serde_json::Value,
        group_id: Option<&str>,
        member_id: Option<&str>,
    ) -> Result<(), LedgerError> {
        self.logging
            .log_action(kind, action, details, group_id, member_id)
            .await?;
        if let Some(gid) = group_id {
            self.cache.invalidate_group(gid).await?;
        }
        Ok(())
    }

    /// Rebuilds the group's ledger from its stored expenses and debts.
    /// Former members still referenced by a record are registered after
    /// the current members.
    async fn build_ledger(&self, group: &Group) -> Result<(LedgerEngine, Vec<Expense>), LedgerError> {
        let expenses = self.storage.get_group_expenses(&group.id).await?;
        let debts = self.storage.get_group_debts(&group.id).await?;

        let mut ledger = LedgerEngine::new(group.id.clone(), &[]);
        for member_id in &group.member_ids {
            ledger.add_member(member_id.clone());
        }

        let mut referenced: Vec<&str> = Vec::new();
        for expense in &expenses {
            referenced.push(&expense.payer_id);
            referenced.extend(expense.split.participants());
        }
        for debt in &debts {
            referenced.push(&debt.from);
            referenced.push(&debt.to);
        }
        for member_id in referenced {
            if !group.has_member(member_id) && !ledger.members().iter().any(|m| m == member_id) {
                self.load_member(member_id).await?;
                ledger.add_member(member_id);
            }
        }

        for expense in &expenses {
            let shares = SplitCalculator::compute(expense.amount, &expense.split)?;
            ledger.record_expense(expense, &shares)?;
        }
        for debt in debts {
            ledger.record_debt(debt)?;
        }
        Ok((ledger, expenses))
    }

    // MEMBERS

    pub async fn add_member(&self, name: String, email: String) -> Result<Member, LedgerError> {
        let email = email.trim().to_string();
        self.validate_email(&email)?;
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;

        let member = Member {
            id: Uuid::new_v4().to_string(),
            name,
            email,
        };
        self.storage.create_member(member.clone()).await?;
        info!("Added member {} ({})", member.id, member.email);

        self.log_and_invalidate(
            ActivityKind::Group,
            MEMBER_ADDED,
            json!({ "member_id": member.id, "name": member.name, "email": member.email }),
            None,
            Some(&member.id),
        )
        .await?;
        Ok(member)
    }

    pub async fn get_member(&self, member_id: &str) -> Result<Option<Member>, LedgerError> {
        self.storage.get_member(member_id).await
    }

    pub async fn get_member_by_email(&self, email: &str) -> Result<Option<Member>, LedgerError> {
        self.storage.get_member_by_email(email.trim()).await
    }

    /// Member directory sorted by name, optionally narrowed by a
    /// case-insensitive search on name or email.
    pub async fn list_members(&self, filter: &MemberSearch) -> Result<Vec<MemberSummary>, LedgerError> {
        let mut members: Vec<Member> = self
            .storage
            .list_members()
            .await?
            .into_iter()
            .filter(|member| filter.matches(member))
            .collect();
        members.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });

        let profiles =
            futures::future::try_join_all(members.iter().map(|member| self.member_profile(&member.id))).await?;
        debug!("Member directory lookup returned {} members", profiles.len());
        Ok(profiles
            .into_iter()
            .map(|profile| MemberSummary {
                member: profile.member,
                contributed: profile.contributed,
                owed: profile.owed,
                net: profile.net,
            })
            .collect())
    }

    // GROUPS

    pub async fn create_group(&self, name: String, created_by: &str) -> Result<Group, LedgerError> {
        self.validate_string_input("name", &name, MAX_NAME_LENGTH)?;
        let creator = self.load_member(created_by).await?;

        let group = Group {
            id: Uuid::new_v4().to_string(),
            name,
            member_ids: vec![creator.id.clone()],
            created_by: creator.id.clone(),
            created_at: Utc::now(),
        };
        self.storage.save_group(group.clone()).await?;
        info!("Created group {} '{}' for member {}", group.id, group.name, creator.id);

        self.log_and_invalidate(
            ActivityKind::Group,
            GROUP_CREATED,
            json!({ "group_id": group.id, "name": group.name }),
            Some(&group.id),
            Some(&creator.id),
        )
        .await?;
        Ok(group)
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Group, LedgerError> {
        self.load_group(group_id).await
    }

    pub async fn list_member_groups(&self, member_id: &str) -> Result<Vec<Group>, LedgerError> {
        self.load_member(member_id).await?;
        self.storage.get_member_groups(member_id).await
    }

    async fn add_to_group(&self, group_id: &str, member: &Member, action: &str) -> Result<Group, LedgerError> {
        let mut group = self.load_group(group_id).await?;
        if group.has_member(&member.id) {
            return Err(LedgerError::AlreadyGroupMember(member.id.clone()));
        }
        group.member_ids.push(member.id.clone());
        self.storage.save_group(group.clone()).await?;
        info!("Member {} added to group {} ({})", member.id, group.id, action);

        self.log_and_invalidate(
            ActivityKind::Group,
            action,
            json!({ "group_id": group.id, "member_id": member.id, "name": member.name }),
            Some(&group.id),
            Some(&member.id),
        )
        .await?;
        Ok(group)
    }

    pub async fn invite_member_by_email(&self, group_id: &str, email: &str) -> Result<Group, LedgerError> {
        let email = email.trim();
        self.validate_email(email)?;
        let member = self
            .storage
            .get_member_by_email(email)
            .await?
            .ok_or_else(|| LedgerError::UnknownMember(email.to_string()))?;
        self.add_to_group(group_id, &member, MEMBER_INVITED).await
    }

    pub async fn join_group(&self, group_id: &str, member_id: &str) -> Result<Group, LedgerError> {
        let member = self.load_member(member_id).await?;
        self.add_to_group(group_id, &member, MEMBER_JOINED).await
    }

    /// Removes a member whose balance in the group is zero. The last member
    /// cannot be removed; delete the group instead.
    pub async fn remove_member(&self, group_id: &str, member_id: &str) -> Result<Group, LedgerError> {
        let _guard = self.lock_group(group_id).await;
        let mut group = self.load_group(group_id).await?;
        self.ensure_group_member(&group, member_id)?;
        if group.member_ids.len() <= 1 {
            return Err(LedgerError::CannotRemoveLastMember);
        }

        let (ledger, _) = self.build_ledger(&group).await?;
        let net = ledger.net_balance(member_id)?;
        if !net.is_zero() {
            warn!(
                "Refused to remove member {} from group {} with balance {}",
                member_id, group_id, net
            );
            return Err(LedgerError::OutstandingBalance(member_id.to_string(), net));
        }

        group.member_ids.retain(|id| id != member_id);
        self.storage.save_group(group.clone()).await?;

        self.log_and_invalidate(
            ActivityKind::Group,
            MEMBER_REMOVED,
            json!({ "group_id": group.id, "member_id": member_id }),
            Some(&group.id),
            Some(member_id),
        )
        .await?;
        Ok(group)
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<(), LedgerError> {
        let group = self.load_group(group_id).await?;
        self.storage.delete_group(group_id).await?;
        self.group_locks.lock().await.remove(group_id);
        info!("Deleted group {} '{}'", group.id, group.name);

        self.log_and_invalidate(
            ActivityKind::Group,
            GROUP_DELETED,
            json!({ "group_id": group.id, "name": group.name }),
            Some(group_id),
            None,
        )
        .await?;
        Ok(())
    }

    // EXPENSES

    /// Validates an expense against its group and computes its shares.
    /// Returns the split rule to store: a reconciled custom split is stored
    /// with its adjusted shares so later recomputation matches.
    fn prepare_expense(
        &self,
        group: &Group,
        new_expense: &NewExpense,
    ) -> Result<(SplitRule, ShareMap, Money), LedgerError> {
        self.validate_string_input("title", &new_expense.title, MAX_TITLE_LENGTH)?;
        self.validate_string_input("category", &new_expense.category, MAX_CATEGORY_LENGTH)?;
        self.validate_amount_input("amount", new_expense.amount)?;
        self.ensure_group_member(group, &new_expense.payer_id)?;
        for participant in new_expense.split.participants() {
            self.ensure_group_member(group, participant)?;
        }
        if let SplitRule::Custom { shares } = &new_expense.split {
            if let Some((participant, _)) = shares.iter().find(|(_, share)| share.minor() > MAX_AMOUNT_MINOR) {
                warn!("Rejected oversized share for {} in group {}", participant, group.id);
                return Err(LedgerError::InvalidInput(
                    format!("shares.{}", participant),
                    FieldError::new(
                        "shares",
                        "Share Too Large",
                        format!("Share cannot exceed {}", Money::from_minor(MAX_AMOUNT_MINOR)),
                    ),
                ));
            }
        }

        match &new_expense.split {
            SplitRule::Equal { participants } => {
                let shares = SplitCalculator::compute_equal_split(new_expense.amount, participants)?;
                Ok((new_expense.split.clone(), shares, Money::ZERO))
            }
            SplitRule::Custom { shares } if self.settings.split_tolerance.is_positive() => {
                let (shares, adjustment) =
                    SplitCalculator::reconcile_custom_split(new_expense.amount, shares, self.settings.split_tolerance)?;
                Ok((SplitRule::Custom { shares: shares.clone() }, shares, adjustment))
            }
            SplitRule::Custom { shares } => {
                let shares = SplitCalculator::compute_custom_split(new_expense.amount, shares)?;
                Ok((new_expense.split.clone(), shares, Money::ZERO))
            }
        }
    }

    pub async fn add_expense(&self, group_id: &str, new_expense: NewExpense) -> Result<ExpenseDetails, LedgerError> {
        let _guard = self.lock_group(group_id).await;
        let group = self.load_group(group_id).await?;
        let (split, shares, adjustment) = self.prepare_expense(&group, &new_expense)?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            group_id: group.id.clone(),
            title: new_expense.title,
            amount: new_expense.amount,
            category: new_expense.category.trim().to_string(),
            payer_id: new_expense.payer_id,
            date: new_expense.date,
            split,
            created_at: Utc::now(),
        };
        self.storage.save_expense(expense.clone()).await?;
        info!(
            "Expense {} of {} added to group {} ({} split)",
            expense.id,
            expense.amount,
            group.id,
            expense.split.kind()
        );

        self.log_and_invalidate(
            ActivityKind::Expense,
            EXPENSE_ADDED,
            json!({
                "expense_id": expense.id,
                "title": expense.title,
                "amount": expense.amount,
                "payer_id": expense.payer_id,
                "adjustment": adjustment,
            }),
            Some(&group.id),
            Some(&expense.payer_id),
        )
        .await?;

        Ok(ExpenseDetails {
            expense,
            shares,
            adjustment,
        })
    }

    /// Replaces every user-entered field of an expense, keeping its id.
    pub async fn replace_expense(
        &self,
        expense_id: &str,
        new_expense: NewExpense,
    ) -> Result<ExpenseDetails, LedgerError> {
        let existing = self.load_expense(expense_id).await?;
        let _guard = self.lock_group(&existing.group_id).await;
        let group = self.load_group(&existing.group_id).await?;
        let (split, shares, adjustment) = self.prepare_expense(&group, &new_expense)?;

        let expense = Expense {
            title: new_expense.title,
            amount: new_expense.amount,
            category: new_expense.category.trim().to_string(),
            payer_id: new_expense.payer_id,
            date: new_expense.date,
            split,
            ..existing
        };
        self.storage.save_expense(expense.clone()).await?;
        debug!("Expense {} replaced", expense.id);

        self.log_and_invalidate(
            ActivityKind::Expense,
            EXPENSE_REPLACED,
            json!({ "expense_id": expense.id, "title": expense.title, "amount": expense.amount }),
            Some(&group.id),
            Some(&expense.payer_id),
        )
        .await?;

        Ok(ExpenseDetails {
            expense,
            shares,
            adjustment,
        })
    }

    pub async fn delete_expense(&self, expense_id: &str) -> Result<(), LedgerError> {
        let expense = self.load_expense(expense_id).await?;
        self.storage.delete_expense(expense_id).await?;

        self.log_and_invalidate(
            ActivityKind::Expense,
            EXPENSE_DELETED,
            json!({ "expense_id": expense.id, "title": expense.title }),
            Some(&expense.group_id),
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn get_expense(&self, expense_id: &str) -> Result<Expense, LedgerError> {
        self.load_expense(expense_id).await
    }

    pub async fn expense_shares(&self, expense_id: &str) -> Result<ShareMap, LedgerError> {
        let expense = self.load_expense(expense_id).await?;
        SplitCalculator::compute(expense.amount, &expense.split)
    }

    /// Matching expenses, newest date first.
    pub async fn list_expenses(&self, group_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>, LedgerError> {
        self.load_group(group_id).await?;
        let mut expenses: Vec<Expense> = self
            .storage
            .get_group_expenses(group_id)
            .await?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.created_at.cmp(&a.created_at)));
        Ok(expenses)
    }

    pub async fn categories(&self, group_id: &str) -> Result<Vec<String>, LedgerError> {
        self.load_group(group_id).await?;
        let categories: BTreeSet<String> = self
            .storage
            .get_group_expenses(group_id)
            .await?
            .into_iter()
            .map(|e| e.category)
            .collect();
        Ok(categories.into_iter().collect())
    }

    // DEBTS

    pub async fn record_debt(
        &self,
        group_id: &str,
        from: &str,
        to: &str,
        amount: Money,
        description: String,
    ) -> Result<Debt, LedgerError> {
        let _guard = self.lock_group(group_id).await;
        let group = self.load_group(group_id).await?;
        if from == to {
            return Err(LedgerError::SelfDebt);
        }
        self.validate_amount_input("amount", amount)?;
        self.validate_string_input("description", &description, MAX_TITLE_LENGTH)?;
        self.ensure_group_member(&group, from)?;
        self.ensure_group_member(&group, to)?;

        let debt = Debt {
            id: Uuid::new_v4().to_string(),
            group_id: group.id.clone(),
            from: from.to_string(),
            to: to.to_string(),
            amount,
            description,
            settled: false,
            created_at: Utc::now(),
        };
        self.storage.save_debt(debt.clone()).await?;
        info!("Debt {} recorded: {} owes {} {}", debt.id, debt.from, debt.to, debt.amount);

        self.log_and_invalidate(
            ActivityKind::Settlement,
            DEBT_RECORDED,
            json!({ "debt_id": debt.id, "from": debt.from, "to": debt.to, "amount": debt.amount }),
            Some(&group.id),
            Some(from),
        )
        .await?;
        Ok(debt)
    }

    /// Flips the settled flag. Balances are unaffected either way.
    pub async fn toggle_debt_settled(&self, debt_id: &str) -> Result<Debt, LedgerError> {
        let mut debt = self
            .storage
            .get_debt(debt_id)
            .await?
            .ok_or_else(|| LedgerError::DebtNotFound(debt_id.to_string()))?;
        debt.settled = !debt.settled;
        self.storage.save_debt(debt.clone()).await?;

        let action = if debt.settled { DEBT_SETTLED } else { DEBT_REOPENED };
        self.log_and_invalidate(
            ActivityKind::Settlement,
            action,
            json!({ "debt_id": debt.id, "amount": debt.amount }),
            Some(&debt.group_id),
            Some(&debt.from),
        )
        .await?;
        Ok(debt)
    }

    pub async fn debt_board(&self, group_id: &str) -> Result<DebtBoard, LedgerError> {
        self.load_group(group_id).await?;
        let debts = self.storage.get_group_debts(group_id).await?;
        Ok(DebtBoard::from_debts(debts))
    }

    // BALANCES

    pub async fn group_balances(&self, group_id: &str) -> Result<Vec<NetBalance>, LedgerError> {
        let group = self.load_group(group_id).await?;
        let (ledger, _) = self.build_ledger(&group).await?;
        Ok(ledger.balances())
    }

    pub async fn settlement_plan(&self, group_id: &str) -> Result<Vec<Debt>, LedgerError> {
        let group = self.load_group(group_id).await?;
        let (ledger, _) = self.build_ledger(&group).await?;
        ledger.compute_settlement_plan()
    }

    pub async fn group_summary(&self, group_id: &str) -> Result<GroupSummary, LedgerError> {
        if let Some(summary) = self.cache.get_group_summary(group_id).await? {
            debug!("Group summary cache hit for {}", group_id);
            return Ok(summary);
        }

        let group = self.load_group(group_id).await?;
        let (ledger, expenses) = self.build_ledger(&group).await?;
        let summary = GroupSummary {
            total_spent: Money::checked_sum(expenses.iter().map(|e| e.amount))?,
            balances: ledger.balances(),
            settlement_plan: ledger.compute_settlement_plan()?,
            group,
        };

        self.cache
            .save_group_summary(group_id, &summary, self.settings.summary_ttl)
            .await?;
        Ok(summary)
    }

    /// Contributed, owed and net for a member summed over all of their groups.
    pub async fn member_profile(&self, member_id: &str) -> Result<MemberProfile, LedgerError> {
        let member = self.load_member(member_id).await?;
        let groups = self.storage.get_member_groups(member_id).await?;

        let ledgers =
            futures::future::try_join_all(groups.iter().map(|group| self.build_ledger(group))).await?;

        let mut contributed = Money::ZERO;
        let mut owed = Money::ZERO;
        let mut group_balances = Vec::with_capacity(groups.len());
        for (group, (ledger, _)) in groups.iter().zip(ledgers) {
            let balance = ledger.balance_of(member_id)?;
            contributed += balance.contributed;
            owed += balance.owed;
            group_balances.push(GroupBalance {
                group_id: group.id.clone(),
                group_name: group.name.clone(),
                net: balance.net,
            });
        }

        Ok(MemberProfile {
            member,
            contributed,
            owed,
            net: contributed - owed,
            groups: group_balances,
        })
    }

    // BUDGET

    pub async fn set_budget(
        &self,
        group_id: &str,
        monthly_total: Money,
        categories: BTreeMap<String, CategoryBudget>,
    ) -> Result<Budget, LedgerError> {
        let group = self.load_group(group_id).await?;
        let budget = Budget {
            group_id: group.id.clone(),
            monthly_total,
            categories,
        };
        budget::validate_budget(&budget)?;
        self.storage.save_budget(budget.clone()).await?;
        info!("Budget for group {} set to {}", group.id, monthly_total);

        self.log_and_invalidate(
            ActivityKind::Budget,
            BUDGET_SET,
            json!({ "group_id": group.id, "monthly_total": monthly_total }),
            Some(&group.id),
            None,
        )
        .await?;
        Ok(budget)
    }

    async fn load_budget(&self, group_id: &str) -> Result<Budget, LedgerError> {
        self.load_group(group_id).await?;
        self.storage
            .get_budget(group_id)
            .await?
            .ok_or_else(|| LedgerError::BudgetNotFound(group_id.to_string()))
    }

    pub async fn budget_report(&self, group_id: &str) -> Result<BudgetReport, LedgerError> {
        let budget = self.load_budget(group_id).await?;
        budget::build_report(&budget, self.settings.near_limit_percent)
    }

    /// Overwrites each category's `spent` with the total of the group's
    /// expenses in that month. Categories seen only in expenses are added
    /// with a zero allocation.
    pub async fn refresh_budget_spending(
        &self,
        group_id: &str,
        year: i32,
        month: u32,
    ) -> Result<BudgetReport, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::InvalidInput(
                "month".to_string(),
                FieldError::new("month", "Invalid month", "Month must be between 1 and 12"),
            ));
        }
        let mut budget = self.load_budget(group_id).await?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        let spending = budget::rollup_spending(&expenses, year, month)?;

        for values in budget.categories.values_mut() {
            values.spent = Money::ZERO;
        }
        for (category, spent) in spending {
            budget.categories.entry(category).or_default().spent = spent;
        }
        self.storage.save_budget(budget.clone()).await?;

        self.log_and_invalidate(
            ActivityKind::Budget,
            BUDGET_SPENDING_REFRESHED,
            json!({ "group_id": group_id, "year": year, "month": month }),
            Some(group_id),
            None,
        )
        .await?;
        budget::build_report(&budget, self.settings.near_limit_percent)
    }

    // REPORTS

    pub async fn category_breakdown(&self, group_id: &str) -> Result<Vec<CategorySlice>, LedgerError> {
        self.load_group(group_id).await?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        Ok(reports::category_breakdown(&expenses))
    }

    pub async fn monthly_totals(&self, group_id: &str) -> Result<Vec<MonthlyTotal>, LedgerError> {
        self.load_group(group_id).await?;
        let expenses = self.storage.get_group_expenses(group_id).await?;
        Ok(reports::monthly_totals(&expenses))
    }

    pub async fn balance_chart(&self, group_id: &str) -> Result<serde_json::Value, LedgerError> {
        let group = self.load_group(group_id).await?;
        let (ledger, _) = self.build_ledger(&group).await?;
        let balances = ledger.balances();

        let mut names = HashMap::with_capacity(balances.len());
        for balance in &balances {
            if let Some(member) = self.storage.get_member(&balance.member_id).await? {
                names.insert(member.id, member.name);
            }
        }
        Ok(reports::balance_chart(&group.name, &balances, &names))
    }

    // NOTIFICATIONS

    pub async fn notifications(&self, settings: &NotificationSettings) -> Result<Vec<ActivityEntry>, LedgerError> {
        let logs = self.logging.get_logs().await?;
        Ok(logs.into_iter().filter(|e| settings.allows(e.kind)).collect())
    }

    pub async fn unread_count(&self, settings: &NotificationSettings) -> Result<usize, LedgerError> {
        Ok(self.notifications(settings).await?.iter().filter(|e| !e.read).count())
    }

    pub async fn mark_notification_read(&self, entry_id: &str) -> Result<(), LedgerError> {
        self.logging.mark_read(entry_id).await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<usize, LedgerError> {
        self.logging.mark_all_read().await
    }
}
