//! # Demo 01: Basic Account
//!
//! Deposits must exceed 49, withdrawals must be at least 50, and a
//! withdrawal above the balance is an error.
//!
//! Run with: `cargo run -p paybox-demos --example 01_basic_account`

use paybox_core::{Account, BasicAccount, CoreResult};
use rust_decimal_macros::dec;

fn main() -> CoreResult<()> {
    println!("=== Demo 01: Basic Account ===\n");

    let mut account = BasicAccount::new("BASIC-001", dec!(500))?;
    println!("Initial balance: {}", account.balance());

    account.deposit(dec!(300))?;
    println!("Balance after deposit: {}", account.balance());

    account.withdraw(dec!(100))?;
    println!("Balance after withdrawal: {}", account.balance());

    println!("\nInvalid operations:");
    for (label, result) in [
        ("deposit 10", account.deposit(dec!(10)).map(|_| ())),
        ("withdraw 10", account.withdraw(dec!(10)).map(|_| ())),
        ("withdraw 5000", account.withdraw(dec!(5000)).map(|_| ())),
    ] {
        match result {
            Ok(()) => println!("  {} -> ok", label),
            Err(err) => println!("  {} -> {}", label, err),
        }
    }

    println!("\n{}", account.describe());
    Ok(())
}
