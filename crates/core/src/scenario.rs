//! # Scenario Module
//!
//! Reference runs for each family of variants, recorded step by step so the
//! caller decides how to print them.

use crate::basic::BasicAccount;
use crate::error::CoreResult;
use crate::limits::Operation;
use crate::methods::{BankTransfer, CreditCard, MobileMoney, PayPal};
use crate::purse::DebitOutcome;
use crate::savings::SavingsAccount;
use crate::traits::{Account, PaymentMethod};
use crate::variant::VariantKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepOutcome {
    /// Balance changed; `total` is what moved (fee included for debits)
    Settled { fee: Decimal, total: Decimal },
    /// Decline-style shortfall, balance unchanged
    Declined { total: Decimal, available: Decimal },
    /// Error-style failure, balance unchanged
    Rejected { reason: String },
}

impl StepOutcome {
    pub fn is_settled(&self) -> bool {
        matches!(self, StepOutcome::Settled { .. })
    }
}

/// One operation applied to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub account: String,
    pub variant: VariantKind,
    pub operation: Operation,
    pub amount: Decimal,
    pub outcome: StepOutcome,
    pub balance_after: Decimal,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            StepOutcome::Settled { fee, .. } if fee.is_zero() => write!(
                f,
                "{} of ${:.2} succeeded",
                capitalize(self.operation.as_str()),
                self.amount
            ),
            StepOutcome::Settled { fee, total } => write!(
                f,
                "{} of ${:.2} succeeded (fee ${:.2}, total ${:.2})",
                capitalize(self.operation.as_str()),
                self.amount,
                fee,
                total
            ),
            StepOutcome::Declined { total, available } => write!(
                f,
                "{} of ${:.2} failed (needs ${:.2}, available ${:.2})",
                capitalize(self.operation.as_str()),
                self.amount,
                total,
                available
            ),
            StepOutcome::Rejected { reason } => write!(
                f,
                "{} of ${:.2} failed: {}",
                capitalize(self.operation.as_str()),
                self.amount,
                reason
            ),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply one operation and record the outcome.
///
/// Errors from the account become `StepOutcome::Rejected`; nothing here aborts.
pub fn apply_step<A>(account: &mut A, operation: Operation, amount: Decimal) -> StepRecord
where
    A: Account + ?Sized,
{
    let outcome = match operation {
        Operation::Deposit => match account.credit(amount) {
            Ok(_) => StepOutcome::Settled {
                fee: Decimal::ZERO,
                total: amount,
            },
            Err(err) => StepOutcome::Rejected {
                reason: err.to_string(),
            },
        },
        Operation::Withdrawal => match account.debit(amount) {
            Ok(DebitOutcome::Settled(receipt)) => StepOutcome::Settled {
                fee: receipt.fee,
                total: receipt.total,
            },
            Ok(DebitOutcome::Declined { total, available }) => {
                StepOutcome::Declined { total, available }
            }
            Err(err) => StepOutcome::Rejected {
                reason: err.to_string(),
            },
        },
    };

    StepRecord {
        account: account.id().to_string(),
        variant: account.kind(),
        operation,
        amount,
        outcome,
        balance_after: account.balance(),
    }
}

/// Final state of one account after a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account: String,
    pub variant: VariantKind,
    pub balance: Decimal,
    pub description: String,
}

impl AccountSummary {
    pub fn of<A: Account + ?Sized>(account: &A) -> Self {
        Self {
            account: account.id().to_string(),
            variant: account.kind(),
            balance: account.balance(),
            description: account.describe(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: ScenarioName,
    pub generated_at: DateTime<Utc>,
    pub steps: Vec<StepRecord>,
    pub summaries: Vec<AccountSummary>,
}

impl ScenarioReport {
    fn new(scenario: ScenarioName) -> Self {
        Self {
            scenario,
            generated_at: Utc::now(),
            steps: Vec::new(),
            summaries: Vec::new(),
        }
    }

    fn record<A>(&mut self, account: &mut A, operation: Operation, amount: Decimal)
    where
        A: Account + ?Sized,
    {
        let step = apply_step(account, operation, amount);
        self.steps.push(step);
    }

    pub fn settled_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_settled()).count()
    }

    pub fn summary_for(&self, account: &str) -> Option<&AccountSummary> {
        self.summaries.iter().find(|s| s.account == account)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioName {
    Basic,
    Savings,
    Payments,
}

impl ScenarioName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioName::Basic => "basic",
            ScenarioName::Savings => "savings",
            ScenarioName::Payments => "payments",
        }
    }

    pub fn all() -> Vec<ScenarioName> {
        vec![ScenarioName::Basic, ScenarioName::Savings, ScenarioName::Payments]
    }

    pub fn run(&self) -> CoreResult<ScenarioReport> {
        tracing::info!(scenario = self.as_str(), "Running scenario");
        match self {
            ScenarioName::Basic => basic(),
            ScenarioName::Savings => savings(),
            ScenarioName::Payments => payments(),
        }
    }
}

impl fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Basic account: 500, deposit 300, withdraw 100.
pub fn basic() -> CoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(ScenarioName::Basic);
    let mut account = BasicAccount::new("BASIC-001", dec!(500))?;

    report.record(&mut account, Operation::Deposit, dec!(300));
    report.record(&mut account, Operation::Withdrawal, dec!(100));

    report.summaries.push(AccountSummary::of(&account));
    Ok(report)
}

/// Savings account: 1000, deposit 500, withdraw 2000 (declined), withdraw 200.
pub fn savings() -> CoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(ScenarioName::Savings);
    let mut account = SavingsAccount::new("William Achuchi", "Acc001", dec!(1000))?;

    report.record(&mut account, Operation::Deposit, dec!(500));
    report.record(&mut account, Operation::Withdrawal, dec!(2000));
    report.record(&mut account, Operation::Withdrawal, dec!(200));

    report.summaries.push(AccountSummary::of(&account));
    Ok(report)
}

/// Four payment methods, each loading 200 then paying 100.
pub fn payments() -> CoreResult<ScenarioReport> {
    let mut report = ScenarioReport::new(ScenarioName::Payments);
    let mut methods: Vec<Box<dyn PaymentMethod>> = vec![
        Box::new(CreditCard::new(
            "William Achuchi",
            "1234-5675-8901",
            "Visa",
            dec!(500),
        )?),
        Box::new(MobileMoney::new("+254708966189", "M-Pesa", dec!(300))?),
        Box::new(PayPal::new("william@example.com", "PayPal", dec!(1000))?),
        Box::new(BankTransfer::new(
            "0011223344",
            "Equity Bank",
            "BankTransfer",
            dec!(2000),
        )?),
    ];

    for method in methods.iter_mut() {
        tracing::debug!(method = method.method_name(), "Using payment method");
        report.record(&mut **method, Operation::Deposit, dec!(200));
        report.record(&mut **method, Operation::Withdrawal, dec!(100));
        report.summaries.push(AccountSummary::of(&**method));
    }

    Ok(report)
}
