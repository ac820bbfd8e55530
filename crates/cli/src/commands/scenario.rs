//! Reference scenario replay

use anyhow::{Context, Result};
use paybox_core::{ScenarioReport, StepRecord};

use crate::config::OutputFormat;
use crate::ScenarioArg;

pub fn handle(name: ScenarioArg, format: OutputFormat) -> Result<()> {
    let mut reports = Vec::new();
    for scenario in name.to_core_names() {
        let report = scenario
            .run()
            .with_context(|| format!("Scenario {} could not be set up", scenario))?;
        reports.push(report);
    }

    match format {
        OutputFormat::Text => {
            for report in &reports {
                print!("{}", render_report(report));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

/// Console rendering of one report; accounts appear in the order they were used.
pub fn render_report(report: &ScenarioReport) -> String {
    let mut out = format!("=== Scenario: {} ===\n", report.scenario);

    for summary in &report.summaries {
        let steps: Vec<&StepRecord> = report
            .steps
            .iter()
            .filter(|step| step.account == summary.account)
            .collect();

        out.push_str(&format!("--- Using {} ---\n", summary.variant.label()));
        for step in steps {
            out.push_str(&format!(
                "{} (balance ${:.2})\n",
                step, step.balance_after
            ));
        }
        out.push_str(&summary.description);
        out.push_str("\n\n");
    }
    out
}
