//! # Fee Module
//!
//! Fee rules applied on withdrawal/payment, plus the schedule that lists
//! them for every variant.

use crate::error::{CoreError, CoreResult};
use crate::limits::Limits;
use crate::variant::{FailureMode, VariantKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// How the fee on a debit is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeePolicy {
    /// total = amount
    None,
    /// total = amount * (1 + rate)
    Percentage { rate: Decimal },
    /// total = amount + fee
    Flat { fee: Decimal },
}

impl FeePolicy {
    pub fn percentage(rate: Decimal) -> Self {
        FeePolicy::Percentage { rate }
    }

    pub fn flat(fee: Decimal) -> Self {
        FeePolicy::Flat { fee }
    }

    /// Fee alone, exact (no rounding).
    pub fn fee_for(&self, amount: Decimal) -> CoreResult<Decimal> {
        match *self {
            FeePolicy::None => Ok(Decimal::ZERO),
            FeePolicy::Percentage { rate } => amount
                .checked_mul(rate)
                .ok_or_else(|| CoreError::overflow("percentage fee")),
            FeePolicy::Flat { fee } => Ok(fee),
        }
    }

    /// Fee-inclusive debit for `amount`.
    pub fn total_for(&self, amount: Decimal) -> CoreResult<Decimal> {
        match *self {
            FeePolicy::Percentage { .. } => {
                let multiplier = self
                    .multiplier()
                    .ok_or_else(|| CoreError::overflow("fee multiplier"))?;
                amount
                    .checked_mul(multiplier)
                    .ok_or_else(|| CoreError::overflow("fee-inclusive total"))
            }
            _ => {
                let fee = self.fee_for(amount)?;
                amount
                    .checked_add(fee)
                    .ok_or_else(|| CoreError::overflow("fee-inclusive total"))
            }
        }
    }

    /// Fee multiplier (1.01 for 1%). Only defined for percentage fees.
    pub fn multiplier(&self) -> Option<Decimal> {
        match *self {
            FeePolicy::Percentage { rate } => Decimal::ONE.checked_add(rate),
            _ => None,
        }
    }
}

impl fmt::Display for FeePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeePolicy::None => write!(f, "no fee"),
            FeePolicy::Percentage { rate } => {
                write!(f, "{}%", (*rate * Decimal::ONE_HUNDRED).normalize())
            }
            FeePolicy::Flat { fee } => write!(f, "${:.2} flat", fee),
        }
    }
}

/// One row of the fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeScheduleEntry {
    pub variant: VariantKind,
    pub fee: FeePolicy,
    pub limits: Limits,
    pub failure_mode: FailureMode,
}

/// Fee and limit rules for every variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub name: String,
    entries: Vec<FeeScheduleEntry>,
}

impl FeeSchedule {
    /// Schedule built from the rules each variant carries.
    pub fn standard() -> Self {
        let entries = VariantKind::all()
            .into_iter()
            .map(|variant| FeeScheduleEntry {
                variant,
                fee: variant.fee_policy(),
                limits: variant.limits(),
                failure_mode: variant.failure_mode(),
            })
            .collect();

        Self {
            name: "Standard fee schedule".to_string(),
            entries,
        }
    }

    pub fn entries(&self) -> &[FeeScheduleEntry] {
        &self.entries
    }

    pub fn find(&self, variant: VariantKind) -> Option<&FeeScheduleEntry> {
        self.entries.iter().find(|entry| entry.variant == variant)
    }

    /// Plain-text table of the schedule.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "FEE SCHEDULE: {}", self.name);
        let _ = writeln!(out, "{}", "-".repeat(72));
        let _ = writeln!(
            out,
            "{:<14} {:<12} {:<18} {:<18} {}",
            "variant", "fee", "deposit", "withdrawal", "on shortfall"
        );
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{:<14} {:<12} {:<18} {:<18} {}",
                entry.variant.label(),
                entry.fee.to_string(),
                entry.limits.deposit.to_string(),
                entry.limits.withdrawal.to_string(),
                entry.failure_mode
            );
        }
        let _ = writeln!(out, "{}", "-".repeat(72));
        out
    }
}
