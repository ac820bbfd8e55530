//! Fee schedule listing

use anyhow::Result;
use paybox_core::FeeSchedule;

use crate::config::OutputFormat;

pub fn handle(format: OutputFormat) -> Result<()> {
    let schedule = FeeSchedule::standard();
    match format {
        OutputFormat::Text => print!("{}", schedule.render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
    }
    Ok(())
}
