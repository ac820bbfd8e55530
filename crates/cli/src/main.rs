//! Paybox CLI - replay account scenarios and drive payment methods
//!
//! Usage:
//! ```bash
//! paybox scenario savings
//! paybox scenario all --format json
//! paybox run credit-card --balance 500 --deposit 200 --withdraw 100
//! paybox fees
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{fees, run, scenario};
use config::{CliConfig, OutputFormat};

/// Paybox - account and payment variants with per-variant fee rules
#[derive(Parser)]
#[command(name = "paybox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter (overrides PAYBOX_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format (overrides PAYBOX_FORMAT)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a reference scenario
    Scenario {
        /// Which scenario to run
        #[arg(default_value = "all")]
        name: ScenarioArg,
    },

    /// Open one account and apply deposits, then withdrawals
    Run {
        /// Variant to open
        variant: VariantArg,
        /// Initial balance
        #[arg(long)]
        balance: Decimal,
        /// Identifying number (account, card, phone, email)
        #[arg(long, default_value = "CLI-001")]
        id: String,
        /// Owner, card holder or bank name
        #[arg(long, default_value = "Account Holder")]
        holder: String,
        /// Deposit/load amount (repeatable)
        #[arg(long = "deposit")]
        deposits: Vec<Decimal>,
        /// Withdrawal/payment amount (repeatable)
        #[arg(long = "withdraw")]
        withdrawals: Vec<Decimal>,
    },

    /// Show the fee schedule
    Fees,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScenarioArg {
    Basic,
    Savings,
    Payments,
    All,
}

impl ScenarioArg {
    pub fn to_core_names(&self) -> Vec<paybox_core::ScenarioName> {
        match self {
            ScenarioArg::Basic => vec![paybox_core::ScenarioName::Basic],
            ScenarioArg::Savings => vec![paybox_core::ScenarioName::Savings],
            ScenarioArg::Payments => vec![paybox_core::ScenarioName::Payments],
            ScenarioArg::All => paybox_core::ScenarioName::all(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Basic,
    Savings,
    CreditCard,
    MobileMoney,
    Paypal,
    BankTransfer,
}

impl VariantArg {
    pub fn to_core_type(&self) -> paybox_core::VariantKind {
        match self {
            VariantArg::Basic => paybox_core::VariantKind::Basic,
            VariantArg::Savings => paybox_core::VariantKind::Savings,
            VariantArg::CreditCard => paybox_core::VariantKind::CreditCard,
            VariantArg::MobileMoney => paybox_core::VariantKind::MobileMoney,
            VariantArg::Paypal => paybox_core::VariantKind::PayPal,
            VariantArg::BankTransfer => paybox_core::VariantKind::BankTransfer,
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.log_level.as_deref(), cli.format);

    init_tracing(&config.log_level);
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Scenario { name } => {
            scenario::handle(name, config.format)?;
        }

        Commands::Run {
            variant,
            balance,
            id,
            holder,
            deposits,
            withdrawals,
        } => {
            let request = run::RunRequest {
                variant: variant.to_core_type(),
                id,
                holder,
                balance,
                deposits,
                withdrawals,
            };
            run::handle(request, config.format)?;
        }

        Commands::Fees => {
            fees::handle(config.format)?;
        }
    }

    Ok(())
}
