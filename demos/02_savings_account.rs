//! # Demo 02: Savings Account
//!
//! Withdrawals carry a 1% fee. A withdrawal that would overdraw the account
//! returns `false` instead of an error and leaves the balance alone.
//!
//! Run with: `cargo run -p paybox-demos --example 02_savings_account`

use paybox_core::{BankAccount, CoreResult, SavingsAccount};
use rust_decimal_macros::dec;

fn main() -> CoreResult<()> {
    println!("=== Demo 02: Savings Account ===\n");

    let mut account = SavingsAccount::new("William Achuchi", "Acc001", dec!(1000))?;

    account.deposit(dec!(500))?;
    println!("Deposited $500");

    let first = account.withdraw(dec!(2000))?;
    println!(
        "Withdrawal of $2000 {}",
        if first { "succeeded" } else { "failed" }
    );

    let second = account.withdraw(dec!(200))?;
    println!(
        "Withdrawal of $200 {}",
        if second { "succeeded" } else { "failed" }
    );

    println!("{}", account.account_info());
    Ok(())
}
