//! Per-expense share computation.

use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};

use crate::core::errors::LedgerError;
use crate::core::models::SplitRule;
use crate::core::money::Money;

/// Participant id -> owed share for a single expense.
pub type ShareMap = BTreeMap<String, Money>;

/// Turns an amount and a split rule into a share map whose values sum to
/// the amount exactly. Pure; holds no state.
pub struct SplitCalculator;

impl SplitCalculator {
    pub fn compute(amount: Money, rule: &SplitRule) -> Result<ShareMap, LedgerError> {
        match rule {
            SplitRule::Equal { participants } => Self::compute_equal_split(amount, participants),
            SplitRule::Custom { shares } => Self::compute_custom_split(amount, shares),
        }
    }

    /// Splits `amount` evenly. The remainder of the integer division is
    /// handed out one minor unit at a time to the first participants in
    /// the given order, so no two shares differ by more than one unit.
    pub fn compute_equal_split<S: AsRef<str>>(amount: Money, participants: &[S]) -> Result<ShareMap, LedgerError> {
        if !amount.is_positive() {
            warn!("Rejected equal split of non-positive amount {}", amount);
            return Err(LedgerError::InvalidAmount(amount));
        }
        if participants.is_empty() {
            warn!("Rejected equal split of {} over no participants", amount);
            return Err(LedgerError::EmptyParticipantSet);
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for participant in participants {
            if !seen.insert(participant.as_ref()) {
                warn!("Participant {} listed twice in equal split", participant.as_ref());
                return Err(LedgerError::DuplicateParticipant(participant.as_ref().to_string()));
            }
        }

        let count = participants.len() as i64;
        let base = amount.minor() / count;
        let remainder = amount.minor() - base * count;

        let shares: ShareMap = participants
            .iter()
            .enumerate()
            .map(|(index, participant)| {
                let extra = if (index as i64) < remainder { 1 } else { 0 };
                (participant.as_ref().to_string(), Money::from_minor(base + extra))
            })
            .collect();

        debug!(
            "Equal split of {} over {} participants: base {}, remainder {}",
            amount,
            count,
            Money::from_minor(base),
            remainder
        );
        Ok(shares)
    }

    /// Accepts caller-assigned shares only when they add up to `amount`
    /// exactly. Returns the shares unchanged on success.
    pub fn compute_custom_split(amount: Money, shares: &ShareMap) -> Result<ShareMap, LedgerError> {
        let delta = Self::custom_split_delta(amount, shares)?;
        if !delta.is_zero() {
            warn!("Custom split for {} is off by {}", amount, delta);
            return Err(LedgerError::SplitMismatch { delta });
        }

        debug!("Custom split of {} over {} participants accepted", amount, shares.len());
        Ok(shares.clone())
    }

    /// Like [`compute_custom_split`](Self::compute_custom_split) but folds a
    /// mismatch of at most `tolerance` into the largest share (ties go to
    /// the smallest participant id). Returns the adjusted shares and the
    /// adjustment that was applied.
    pub fn reconcile_custom_split(
        amount: Money,
        shares: &ShareMap,
        tolerance: Money,
    ) -> Result<(ShareMap, Money), LedgerError> {
        let delta = Self::custom_split_delta(amount, shares)?;
        if delta.is_zero() {
            return Ok((shares.clone(), Money::ZERO));
        }
        if delta.abs() > tolerance.abs() {
            warn!(
                "Custom split for {} is off by {}, beyond tolerance {}",
                amount, delta, tolerance
            );
            return Err(LedgerError::SplitMismatch { delta });
        }

        let mut target: Option<(&String, Money)> = None;
        for (participant, &share) in shares {
            match target {
                Some((_, best)) if best >= share => {}
                _ => target = Some((participant, share)),
            }
        }
        let (participant, share) = target.ok_or(LedgerError::EmptyParticipantSet)?;

        let adjusted = share.checked_add(delta)?;
        if adjusted.is_negative() {
            return Err(LedgerError::NegativeShare(participant.clone()));
        }

        let participant = participant.clone();
        let mut reconciled = shares.clone();
        reconciled.insert(participant.clone(), adjusted);
        debug!("Folded split delta {} into share of {}", delta, participant);
        Ok((reconciled, delta))
    }

    /// Amount minus the sum of the shares, after validating both.
    fn custom_split_delta(amount: Money, shares: &ShareMap) -> Result<Money, LedgerError> {
        Self::validate_custom_shares(amount, shares)?;
        let total = Money::checked_sum(shares.values().copied()).inspect_err(|_| {
            warn!("Custom shares for {} overflow when summed", amount);
        })?;
        amount.checked_sub(total)
    }

    fn validate_custom_shares(amount: Money, shares: &ShareMap) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            warn!("Rejected custom split of non-positive amount {}", amount);
            return Err(LedgerError::InvalidAmount(amount));
        }
        if shares.is_empty() {
            return Err(LedgerError::EmptyParticipantSet);
        }
        if let Some((participant, _)) = shares.iter().find(|(_, share)| share.is_negative()) {
            warn!("Negative share assigned to {}", participant);
            return Err(LedgerError::NegativeShare(participant.clone()));
        }
        Ok(())
    }
}
