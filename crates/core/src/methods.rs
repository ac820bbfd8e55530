//! Payment methods. All four use the throw-style convention and differ only
//! in identity fields and fee:
//!
//! | Method         | Fee        |
//! |----------------|------------|
//! | `CreditCard`   | 2%         |
//! | `MobileMoney`  | 1%         |
//! | `PayPal`       | none       |
//! | `BankTransfer` | $5 flat    |

use crate::error::CoreResult;
use crate::purse::Purse;
use crate::traits::{Account, PaymentMethod};
use crate::variant::VariantKind;
use rust_decimal::Decimal;

/// Wires the storage half of `Account` and `PaymentMethod::method_name`.
macro_rules! payment_method {
    ($ty:ty, $id:ident) => {
        impl Account for $ty {
            fn id(&self) -> &str {
                &self.$id
            }

            fn purse(&self) -> &Purse {
                &self.purse
            }

            fn purse_mut(&mut self) -> &mut Purse {
                &mut self.purse
            }

            fn describe(&self) -> String {
                self.info()
            }
        }

        impl PaymentMethod for $ty {
            fn method_name(&self) -> &str {
                &self.method_name
            }
        }
    };
}

// === Credit Card (2% fee) ===

#[derive(Debug, Clone)]
pub struct CreditCard {
    card_number: String,
    card_holder: String,
    method_name: String,
    purse: Purse,
}

impl CreditCard {
    pub fn new(
        card_holder: impl Into<String>,
        card_number: impl Into<String>,
        method_name: impl Into<String>,
        balance: Decimal,
    ) -> CoreResult<Self> {
        Ok(Self {
            card_number: card_number.into(),
            card_holder: card_holder.into(),
            method_name: method_name.into(),
            purse: Purse::open(VariantKind::CreditCard, balance)?,
        })
    }

    pub fn card_holder(&self) -> &str {
        &self.card_holder
    }

    fn info(&self) -> String {
        format!(
            "[CreditCard] {} - {}, Balance: ${:.2}",
            self.card_holder,
            self.card_number,
            self.purse.balance()
        )
    }
}

payment_method!(CreditCard, card_number);

// === Mobile Money (1% fee) ===

#[derive(Debug, Clone)]
pub struct MobileMoney {
    phone_number: String,
    method_name: String,
    purse: Purse,
}

impl MobileMoney {
    pub fn new(
        phone_number: impl Into<String>,
        method_name: impl Into<String>,
        balance: Decimal,
    ) -> CoreResult<Self> {
        Ok(Self {
            phone_number: phone_number.into(),
            method_name: method_name.into(),
            purse: Purse::open(VariantKind::MobileMoney, balance)?,
        })
    }

    fn info(&self) -> String {
        format!(
            "[MobileMoney] {}, Balance: ${:.2}",
            self.phone_number,
            self.purse.balance()
        )
    }
}

payment_method!(MobileMoney, phone_number);

// === PayPal (no fee) ===

#[derive(Debug, Clone)]
pub struct PayPal {
    email: String,
    method_name: String,
    purse: Purse,
}

impl PayPal {
    pub fn new(
        email: impl Into<String>,
        method_name: impl Into<String>,
        balance: Decimal,
    ) -> CoreResult<Self> {
        Ok(Self {
            email: email.into(),
            method_name: method_name.into(),
            purse: Purse::open(VariantKind::PayPal, balance)?,
        })
    }

    fn info(&self) -> String {
        format!("[PayPal] {}, Balance: ${:.2}", self.email, self.purse.balance())
    }
}

payment_method!(PayPal, email);

// === Bank Transfer (flat $5 fee) ===

#[derive(Debug, Clone)]
pub struct BankTransfer {
    account_number: String,
    bank_name: String,
    method_name: String,
    purse: Purse,
}

impl BankTransfer {
    pub fn new(
        account_number: impl Into<String>,
        bank_name: impl Into<String>,
        method_name: impl Into<String>,
        balance: Decimal,
    ) -> CoreResult<Self> {
        Ok(Self {
            account_number: account_number.into(),
            bank_name: bank_name.into(),
            method_name: method_name.into(),
            purse: Purse::open(VariantKind::BankTransfer, balance)?,
        })
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    fn info(&self) -> String {
        format!(
            "[BankTransfer] {} - {}, Balance: ${:.2}",
            self.bank_name,
            self.account_number,
            self.purse.balance()
        )
    }
}

payment_method!(BankTransfer, account_number);
