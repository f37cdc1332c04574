//! Net balances and settlement planning for one group.

use chrono::Utc;
use log::{debug, warn};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use uuid::Uuid;

use crate::core::errors::LedgerError;
use crate::core::models::{Debt, Expense, Member, NetBalance};
use crate::core::money::Money;
use crate::core::split::ShareMap;

pub const SETTLEMENT_DESCRIPTION: &str = "Settle up";

#[derive(Debug, Clone, Copy, Default)]
struct Account {
    contributed: Money,
    owed: Money,
}

impl Account {
    fn net(&self) -> Money {
        self.contributed - self.owed
    }
}

/// Running contributed/owed accumulators per member plus the list of
/// recorded debts.
///
/// The engine has no deduplication: recording the same expense twice
/// counts it twice. Callers feed each record exactly once, typically by
/// rebuilding the engine from stored records on every read.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    group_id: String,
    order: Vec<String>,
    accounts: HashMap<String, Account>,
    debts: Vec<Debt>,
}

impl LedgerEngine {
    pub fn new(group_id: impl Into<String>, members: &[Member]) -> Self {
        let mut engine = LedgerEngine {
            group_id: group_id.into(),
            order: Vec::with_capacity(members.len()),
            accounts: HashMap::with_capacity(members.len()),
            debts: Vec::new(),
        };
        for member in members {
            engine.add_member(member.id.as_str());
        }
        engine
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Registers a member. Returns false if the id was already known.
    pub fn add_member(&mut self, member_id: impl Into<String>) -> bool {
        let member_id = member_id.into();
        if self.accounts.contains_key(&member_id) {
            return false;
        }
        self.accounts.insert(member_id.clone(), Account::default());
        self.order.push(member_id);
        true
    }

    /// Member ids in registration order.
    pub fn members(&self) -> &[String] {
        &self.order
    }

    /// Credits the payer with the full amount and charges every
    /// participant their share. A payer who is also a participant is
    /// charged like anyone else.
    pub fn record_expense(&mut self, expense: &Expense, shares: &ShareMap) -> Result<(), LedgerError> {
        if !expense.amount.is_positive() {
            return Err(LedgerError::InvalidAmount(expense.amount));
        }
        self.ensure_known(&expense.payer_id)?;
        for participant in shares.keys() {
            self.ensure_known(participant)?;
        }
        let delta = expense.amount.checked_sub(Money::checked_sum(shares.values().copied())?)?;
        if !delta.is_zero() {
            warn!("Expense {} shares are off by {}", expense.id, delta);
            return Err(LedgerError::SplitMismatch { delta });
        }

        self.account_mut(&expense.payer_id)?.contributed += expense.amount;
        for (participant, &share) in shares {
            self.account_mut(participant)?.owed += share;
        }

        debug!(
            "Recorded expense {} of {} paid by {} over {} participants",
            expense.id,
            expense.amount,
            expense.payer_id,
            shares.len()
        );
        Ok(())
    }

    /// Records a hand-entered "from owes to" entry. The creditor counts as
    /// having contributed the amount and the debtor as owing it.
    pub fn record_debt(&mut self, debt: Debt) -> Result<(), LedgerError> {
        if debt.from == debt.to {
            return Err(LedgerError::SelfDebt);
        }
        if !debt.amount.is_positive() {
            return Err(LedgerError::InvalidAmount(debt.amount));
        }
        self.ensure_known(&debt.from)?;
        self.ensure_known(&debt.to)?;

        self.account_mut(&debt.to)?.contributed += debt.amount;
        self.account_mut(&debt.from)?.owed += debt.amount;
        debug!("Recorded debt {}: {} owes {} {}", debt.id, debt.from, debt.to, debt.amount);
        self.debts.push(debt);
        Ok(())
    }

    /// Flips the settled flag and returns its new value. Balances are not
    /// touched.
    pub fn toggle_settled(&mut self, debt_id: &str) -> Result<bool, LedgerError> {
        let debt = self
            .debts
            .iter_mut()
            .find(|d| d.id == debt_id)
            .ok_or_else(|| LedgerError::DebtNotFound(debt_id.to_string()))?;
        debt.settled = !debt.settled;
        Ok(debt.settled)
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn open_debts(&self) -> Vec<&Debt> {
        self.debts.iter().filter(|d| !d.settled).collect()
    }

    pub fn settled_debts(&self) -> Vec<&Debt> {
        self.debts.iter().filter(|d| d.settled).collect()
    }

    pub fn net_balance(&self, member_id: &str) -> Result<Money, LedgerError> {
        self.accounts
            .get(member_id)
            .map(Account::net)
            .ok_or_else(|| LedgerError::UnknownMember(member_id.to_string()))
    }

    pub fn balance_of(&self, member_id: &str) -> Result<NetBalance, LedgerError> {
        let account = self
            .accounts
            .get(member_id)
            .ok_or_else(|| LedgerError::UnknownMember(member_id.to_string()))?;
        Ok(NetBalance {
            member_id: member_id.to_string(),
            contributed: account.contributed,
            owed: account.owed,
            net: account.net(),
        })
    }

    /// Every member's balance, in registration order.
    pub fn balances(&self) -> Vec<NetBalance> {
        self.order
            .iter()
            .filter_map(|id| self.balance_of(id).ok())
            .collect()
    }

    /// Greedy debt simplification: repeatedly pair the largest creditor
    /// with the largest debtor and move the smaller of the two magnitudes.
    /// Equal magnitudes are taken in registration order. Produces at most
    /// `members - 1` transfers.
    ///
    /// Expenses and debts always post matching credits and debits, so the
    /// residual check only fails if the accumulators themselves are wrong.
    pub fn compute_settlement_plan(&self) -> Result<Vec<Debt>, LedgerError> {
        ensure_balanced(&self.group_id, self.accounts.values().map(Account::net))?;

        let mut creditors = BinaryHeap::new();
        let mut debtors = BinaryHeap::new();
        for (index, member_id) in self.order.iter().enumerate() {
            let net = self.net_balance(member_id)?;
            if net.is_positive() {
                creditors.push((net, Reverse(index)));
            } else if net.is_negative() {
                debtors.push((net.abs(), Reverse(index)));
            }
        }

        let mut plan = Vec::new();
        let now = Utc::now();
        while let (Some((credit, Reverse(creditor))), Some((debit, Reverse(debtor)))) =
            (creditors.pop(), debtors.pop())
        {
            let amount = credit.min(debit);
            plan.push(Debt {
                id: Uuid::new_v4().to_string(),
                group_id: self.group_id.clone(),
                from: self.order[debtor].clone(),
                to: self.order[creditor].clone(),
                amount,
                description: SETTLEMENT_DESCRIPTION.to_string(),
                settled: false,
                created_at: now,
            });

            let credit_left = credit - amount;
            let debit_left = debit - amount;
            if credit_left.is_positive() {
                creditors.push((credit_left, Reverse(creditor)));
            }
            if debit_left.is_positive() {
                debtors.push((debit_left, Reverse(debtor)));
            }
        }

        debug!("Settlement plan for group {}: {} transfers", self.group_id, plan.len());
        Ok(plan)
    }

    /// Net balances after each transfer in `plan` is paid: the payer's net
    /// rises by the amount and the receiver's falls by it.
    pub fn balances_after(&self, plan: &[Debt]) -> Result<Vec<(String, Money)>, LedgerError> {
        let mut nets: HashMap<&str, Money> = self
            .order
            .iter()
            .map(|id| (id.as_str(), self.accounts[id].net()))
            .collect();
        for transfer in plan {
            *nets
                .get_mut(transfer.from.as_str())
                .ok_or_else(|| LedgerError::UnknownMember(transfer.from.clone()))? += transfer.amount;
            *nets
                .get_mut(transfer.to.as_str())
                .ok_or_else(|| LedgerError::UnknownMember(transfer.to.clone()))? -= transfer.amount;
        }
        Ok(self.order.iter().map(|id| (id.clone(), nets[id.as_str()])).collect())
    }

    fn ensure_known(&self, member_id: &str) -> Result<(), LedgerError> {
        if self.accounts.contains_key(member_id) {
            Ok(())
        } else {
            warn!("Reference to unknown member {}", member_id);
            Err(LedgerError::UnknownMember(member_id.to_string()))
        }
    }

    fn account_mut(&mut self, member_id: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(member_id)
            .ok_or_else(|| LedgerError::UnknownMember(member_id.to_string()))
    }
}

/// Fails with `UnbalancedLedger` unless the nets add up to zero.
pub(crate) fn ensure_balanced<I: IntoIterator<Item = Money>>(group_id: &str, nets: I) -> Result<(), LedgerError> {
    let residual = Money::checked_sum(nets)?;
    if !residual.is_zero() {
        warn!("Group {} ledger does not balance, residual {}", group_id, residual);
        return Err(LedgerError::UnbalancedLedger { residual });
    }
    Ok(())
}
