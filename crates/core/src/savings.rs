//! Savings account: 1% withdrawal fee, reports a shortfall as `false`.

use crate::error::CoreResult;
use crate::purse::Purse;
use crate::traits::{Account, BankAccount};
use crate::variant::VariantKind;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct SavingsAccount {
    account_number: String,
    owner_name: String,
    purse: Purse,
}

impl SavingsAccount {
    pub fn new(
        owner_name: impl Into<String>,
        account_number: impl Into<String>,
        initial_balance: Decimal,
    ) -> CoreResult<Self> {
        Ok(Self {
            account_number: account_number.into(),
            owner_name: owner_name.into(),
            purse: Purse::open(VariantKind::Savings, initial_balance)?,
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }
}

impl Account for SavingsAccount {
    fn id(&self) -> &str {
        &self.account_number
    }

    fn purse(&self) -> &Purse {
        &self.purse
    }

    fn purse_mut(&mut self) -> &mut Purse {
        &mut self.purse
    }

    fn describe(&self) -> String {
        format!(
            "Savings Account {} - Owner: {}, Balance: ${:.2}",
            self.account_number,
            self.owner_name,
            self.purse.balance()
        )
    }
}

impl BankAccount for SavingsAccount {}
