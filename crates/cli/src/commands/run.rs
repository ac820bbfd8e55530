//! Manual operations on a single account

use anyhow::{Context, Result};
use paybox_core::{apply_step, AccountSummary, Operation, StepRecord, VariantKind};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::OutputFormat;

/// Everything needed to open one account and drive it.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub variant: VariantKind,
    pub id: String,
    pub holder: String,
    pub balance: Decimal,
    pub deposits: Vec<Decimal>,
    pub withdrawals: Vec<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub steps: Vec<StepRecord>,
    pub summary: AccountSummary,
}

/// Apply deposits first, then withdrawals; failed steps are recorded, not fatal.
pub fn execute(request: &RunRequest) -> Result<RunReport> {
    let mut account = request
        .variant
        .open(&request.id, &request.holder, request.balance)
        .with_context(|| format!("Failed to open {} account", request.variant.label()))?;

    let operations = request
        .deposits
        .iter()
        .map(|amount| (Operation::Deposit, *amount))
        .chain(
            request
                .withdrawals
                .iter()
                .map(|amount| (Operation::Withdrawal, *amount)),
        );

    let steps = operations
        .map(|(operation, amount)| apply_step(&mut *account, operation, amount))
        .collect();

    Ok(RunReport {
        steps,
        summary: AccountSummary::of(&*account),
    })
}

pub fn handle(request: RunRequest, format: OutputFormat) -> Result<()> {
    let report = execute(&request)?;

    match format {
        OutputFormat::Text => {
            println!("--- Using {} ---", request.variant.label());
            for step in &report.steps {
                let marker = if step.outcome.is_settled() { "✅" } else { "❌" };
                println!("{} {} (balance ${:.2})", marker, step, step.balance_after);
            }
            println!("{}", report.summary.description);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
