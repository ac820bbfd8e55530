//! # Variant Module
//!
//! The closed set of account/payment variants and the rules each one carries:
//! fee policy, amount limits and how a shortfall is reported.

use crate::basic::BasicAccount;
use crate::error::{CoreError, CoreResult};
use crate::fee::FeePolicy;
use crate::limits::Limits;
use crate::methods::{BankTransfer, CreditCard, MobileMoney, PayPal};
use crate::savings::SavingsAccount;
use crate::traits::Account;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a debit that exceeds the balance is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Abort with `CoreError::InsufficientFunds`
    Raise,
    /// Report `false` / `DebitOutcome::Declined` and carry on
    Decline,
}

impl FailureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureMode::Raise => "raise",
            FailureMode::Decline => "decline",
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Concrete variant of the shared capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    /// Plain account with a 50 floor on both directions
    Basic,
    /// Savings account, 1% withdrawal fee, declines on shortfall
    Savings,
    /// Credit card, 2% payment fee
    CreditCard,
    /// Mobile money wallet, 1% payment fee
    MobileMoney,
    /// PayPal, no fee
    PayPal,
    /// Bank transfer, flat $5 fee
    BankTransfer,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Basic => "basic",
            VariantKind::Savings => "savings",
            VariantKind::CreditCard => "credit_card",
            VariantKind::MobileMoney => "mobile_money",
            VariantKind::PayPal => "paypal",
            VariantKind::BankTransfer => "bank_transfer",
        }
    }

    /// Display label, also used as the default method name.
    pub fn label(&self) -> &'static str {
        match self {
            VariantKind::Basic => "Basic",
            VariantKind::Savings => "Savings",
            VariantKind::CreditCard => "CreditCard",
            VariantKind::MobileMoney => "MobileMoney",
            VariantKind::PayPal => "PayPal",
            VariantKind::BankTransfer => "BankTransfer",
        }
    }

    pub fn all() -> Vec<VariantKind> {
        vec![
            VariantKind::Basic,
            VariantKind::Savings,
            VariantKind::CreditCard,
            VariantKind::MobileMoney,
            VariantKind::PayPal,
            VariantKind::BankTransfer,
        ]
    }

    pub fn fee_policy(&self) -> FeePolicy {
        match self {
            VariantKind::Basic | VariantKind::PayPal => FeePolicy::None,
            VariantKind::Savings | VariantKind::MobileMoney => FeePolicy::percentage(dec!(0.01)),
            VariantKind::CreditCard => FeePolicy::percentage(dec!(0.02)),
            VariantKind::BankTransfer => FeePolicy::flat(dec!(5)),
        }
    }

    pub fn limits(&self) -> Limits {
        match self {
            VariantKind::Basic => Limits::fifty_floor(),
            _ => Limits::default(),
        }
    }

    pub fn failure_mode(&self) -> FailureMode {
        match self {
            VariantKind::Savings => FailureMode::Decline,
            _ => FailureMode::Raise,
        }
    }

    /// Open an account of this variant behind the shared trait.
    ///
    /// `id` becomes the variant's identifying number (card, phone, email, ...);
    /// `holder` fills the owner/holder/bank field where the variant has one.
    pub fn open(
        &self,
        id: &str,
        holder: &str,
        initial_balance: Decimal,
    ) -> CoreResult<Box<dyn Account>> {
        let account: Box<dyn Account> = match self {
            VariantKind::Basic => Box::new(BasicAccount::new(id, initial_balance)?),
            VariantKind::Savings => Box::new(SavingsAccount::new(holder, id, initial_balance)?),
            VariantKind::CreditCard => Box::new(CreditCard::new(
                holder,
                id,
                self.label(),
                initial_balance,
            )?),
            VariantKind::MobileMoney => {
                Box::new(MobileMoney::new(id, self.label(), initial_balance)?)
            }
            VariantKind::PayPal => Box::new(PayPal::new(id, self.label(), initial_balance)?),
            VariantKind::BankTransfer => Box::new(BankTransfer::new(
                id,
                holder,
                self.label(),
                initial_balance,
            )?),
        };
        Ok(account)
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VariantKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "basic" => Ok(VariantKind::Basic),
            "savings" => Ok(VariantKind::Savings),
            "credit_card" | "creditcard" => Ok(VariantKind::CreditCard),
            "mobile_money" | "mobilemoney" => Ok(VariantKind::MobileMoney),
            "paypal" | "pay_pal" => Ok(VariantKind::PayPal),
            "bank_transfer" | "banktransfer" => Ok(VariantKind::BankTransfer),
            _ => Err(CoreError::UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("credit-card".parse::<VariantKind>(), Ok(VariantKind::CreditCard));
        assert_eq!("PayPal".parse::<VariantKind>(), Ok(VariantKind::PayPal));
        assert_eq!("Bank Transfer".parse::<VariantKind>(), Ok(VariantKind::BankTransfer));
        assert!(matches!(
            "bitcoin".parse::<VariantKind>(),
            Err(CoreError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_parse_accepts_own_codes() {
        for kind in VariantKind::all() {
            assert_eq!(kind.as_str().parse::<VariantKind>(), Ok(kind));
            assert_eq!(kind.label().parse::<VariantKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_rules_per_variant() {
        assert_eq!(VariantKind::PayPal.fee_policy(), FeePolicy::None);
        assert_eq!(
            VariantKind::MobileMoney.fee_policy(),
            FeePolicy::percentage(dec!(0.01))
        );
        assert_eq!(VariantKind::BankTransfer.fee_policy(), FeePolicy::flat(dec!(5)));
        assert_eq!(VariantKind::Basic.limits(), Limits::fifty_floor());
        assert_eq!(VariantKind::CreditCard.limits(), Limits::default());

        let declining: Vec<_> = VariantKind::all()
            .into_iter()
            .filter(|kind| kind.failure_mode() == FailureMode::Decline)
            .collect();
        assert_eq!(declining, vec![VariantKind::Savings]);
    }

    #[test]
    fn test_open_behind_trait() {
        for kind in VariantKind::all() {
            let account = kind.open("ID-1", "Holder", dec!(100)).unwrap();
            assert_eq!(account.kind(), kind);
            assert_eq!(account.id(), "ID-1");
            assert_eq!(account.balance(), dec!(100));
        }
    }

    #[test]
    fn test_open_rejects_negative_balance() {
        for kind in VariantKind::all() {
            let result = kind.open("ID-1", "Holder", dec!(-1));
            assert!(matches!(result, Err(CoreError::NegativeBalance(_))));
        }
    }
}
