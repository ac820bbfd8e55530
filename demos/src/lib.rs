//! # Paybox Demos
//!
//! Walkthroughs of the account and payment variants.
//!
//! ## Available Demos
//!
//! 1. **01_basic_account** - 50 floor on deposits and withdrawals, errors on shortfall
//! 2. **02_savings_account** - 1% fee, a shortfall comes back as `false`
//! 3. **03_payment_methods** - four payment methods behind one trait object
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run -p paybox-demos --example 01_basic_account
//! cargo run -p paybox-demos --example 02_savings_account
//! cargo run -p paybox-demos --example 03_payment_methods
//! ```

// This crate only contains demos, no library code.
