//! # Paybox Core
//!
//! Accounts and payment methods that share one capability set
//! (deposit-or-load, withdraw-or-pay, describe-self) while each variant
//! carries its own fee and validation rules.
//!
//! ```
//! use paybox_core::{Account, BankAccount, SavingsAccount};
//! use rust_decimal_macros::dec;
//!
//! let mut account = SavingsAccount::new("William Achuchi", "Acc001", dec!(1000)).unwrap();
//! account.deposit(dec!(500)).unwrap();
//! assert!(!account.withdraw(dec!(2000)).unwrap()); // 2020 > 1500, declined
//! assert!(account.withdraw(dec!(200)).unwrap());
//! assert_eq!(account.balance(), dec!(1298));
//! ```

pub mod amount;
pub mod basic;
pub mod error;
pub mod fee;
pub mod limits;
pub mod methods;
pub mod purse;
pub mod savings;
pub mod scenario;
pub mod traits;
pub mod variant;

pub use amount::{Amount, AmountError};
pub use basic::BasicAccount;
pub use error::{CoreError, CoreResult};
pub use fee::{FeePolicy, FeeSchedule, FeeScheduleEntry};
pub use limits::{Bound, Limits, Operation};
pub use methods::{BankTransfer, CreditCard, MobileMoney, PayPal};
pub use purse::{DebitOutcome, Purse, Receipt};
pub use savings::SavingsAccount;
pub use scenario::{apply_step, AccountSummary, ScenarioName, ScenarioReport, StepOutcome, StepRecord};
pub use traits::{Account, BankAccount, PaymentMethod};
pub use variant::{FailureMode, VariantKind};
