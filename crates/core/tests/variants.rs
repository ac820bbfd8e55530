//! Integration tests for the shared capability set across every variant

use paybox_core::{
    Account, BankAccount, BasicAccount, CoreError, DebitOutcome, FailureMode, FeePolicy,
    PaymentMethod, SavingsAccount, VariantKind,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One account of every variant, 10_000 each.
fn every_variant() -> Vec<Box<dyn Account>> {
    VariantKind::all()
        .into_iter()
        .map(|kind| kind.open("T-001", "Test Holder", dec!(10000)).unwrap())
        .collect()
}

#[test]
fn deposits_add_exact_amount() {
    for mut account in every_variant() {
        let before = account.balance();
        let after = account.credit(dec!(123.45)).unwrap();
        assert_eq!(after, before + dec!(123.45), "{}", account.kind());
        assert_eq!(account.balance(), after);
    }
}

#[test]
fn non_positive_deposits_fail_everywhere() {
    for mut account in every_variant() {
        for amount in [dec!(0), dec!(-0.01), dec!(-100)] {
            let err = account.credit(amount).unwrap_err();
            assert!(matches!(err, CoreError::InvalidAmount { .. }));
            assert!(err.is_invalid_argument());
        }
        assert_eq!(account.balance(), dec!(10000));
    }
}

#[test]
fn non_positive_withdrawals_fail_everywhere() {
    for mut account in every_variant() {
        for amount in [dec!(0), dec!(-1)] {
            assert!(matches!(
                account.debit(amount),
                Err(CoreError::InvalidAmount { .. })
            ));
        }
        assert_eq!(account.balance(), dec!(10000));
    }
}

#[test]
fn basic_variant_thresholds() {
    let mut account = BasicAccount::new("B-1", dec!(1000)).unwrap();
    assert!(account.deposit(dec!(49)).is_err());
    assert!(account.withdraw(dec!(49.99)).is_err());
    assert_eq!(account.balance(), dec!(1000));

    account.withdraw(dec!(50)).unwrap();
    assert_eq!(account.balance(), dec!(950));
}

#[test]
fn debit_reduces_balance_by_fee_inclusive_total() {
    let amount = dec!(250);
    for mut account in every_variant() {
        let expected_total = match account.fee_policy() {
            FeePolicy::None => amount,
            FeePolicy::Percentage { rate } => amount * (Decimal::ONE + rate),
            FeePolicy::Flat { fee } => amount + fee,
        };

        let outcome = account.debit(amount).unwrap();
        let receipt = outcome.receipt().unwrap();
        assert_eq!(receipt.total, expected_total, "{}", account.kind());
        assert_eq!(receipt.amount + receipt.fee, receipt.total);
        assert_eq!(account.balance(), dec!(10000) - expected_total);
    }
}

#[test]
fn percentage_fee_totals() {
    let mut card = VariantKind::CreditCard.open("C", "H", dec!(1000)).unwrap();
    card.debit(dec!(500)).unwrap();
    assert_eq!(card.balance(), dec!(490)); // 500 * 1.02 = 510

    let mut mobile = VariantKind::MobileMoney.open("M", "H", dec!(1000)).unwrap();
    mobile.debit(dec!(500)).unwrap();
    assert_eq!(mobile.balance(), dec!(495)); // 500 * 1.01 = 505
}

#[test]
fn flat_fee_boundary() {
    let mut transfer = VariantKind::BankTransfer.open("X", "Bank", dec!(105)).unwrap();
    assert!(transfer.debit(dec!(100.01)).unwrap_err().is_insufficient_funds());
    assert_eq!(transfer.balance(), dec!(105));

    transfer.debit(dec!(100)).unwrap();
    assert_eq!(transfer.balance(), dec!(0));
}

#[test]
fn shortfall_follows_failure_mode() {
    for mut account in every_variant() {
        let result = account.debit(dec!(10000));
        match account.failure_mode() {
            FailureMode::Decline => {
                assert!(matches!(result, Ok(DebitOutcome::Declined { .. })));
            }
            FailureMode::Raise if account.fee_policy() == FeePolicy::None => {
                // No fee: exactly the balance settles
                assert!(result.unwrap().is_settled());
                continue;
            }
            FailureMode::Raise => {
                assert!(result.unwrap_err().is_insufficient_funds());
            }
        }
        assert_eq!(account.balance(), dec!(10000), "{}", account.kind());
    }
}

#[test]
fn savings_reference_scenario() {
    let mut account = SavingsAccount::new("William Achuchi", "Acc001", dec!(1000)).unwrap();
    account.deposit(dec!(500)).unwrap();
    assert_eq!(account.balance(), dec!(1500));

    assert!(!account.withdraw(dec!(2000)).unwrap());
    assert_eq!(account.balance(), dec!(1500));

    assert!(account.withdraw(dec!(200)).unwrap());
    assert_eq!(account.balance(), dec!(1298));
}

#[test]
fn credit_card_reference_scenario() {
    let mut card =
        paybox_core::CreditCard::new("William Achuchi", "1234-5675-8901", "Visa", dec!(500))
            .unwrap();
    card.load(dec!(200)).unwrap();
    assert_eq!(card.balance(), dec!(700));

    card.pay(dec!(100)).unwrap();
    assert_eq!(card.balance(), dec!(598));
}

#[test]
fn negative_initial_balance_rejected() {
    for kind in VariantKind::all() {
        assert!(matches!(
            kind.open("N", "H", dec!(-0.01)),
            Err(CoreError::NegativeBalance(_))
        ));
    }
}

#[test]
fn balance_never_negative_after_many_operations() {
    for mut account in every_variant() {
        for step in 0..200u32 {
            let amount = Decimal::from(step % 17 + 1) * dec!(37.5);
            if step % 3 == 0 {
                let _ = account.credit(amount);
            } else {
                let _ = account.debit(amount);
            }
            assert!(account.balance() >= Decimal::ZERO);
        }
    }
}

#[test]
fn withdrawing_decimal_max_is_a_shortfall_everywhere() {
    for mut account in every_variant() {
        let result = account.debit(Decimal::MAX);
        match account.failure_mode() {
            FailureMode::Decline => assert_eq!(
                result,
                Ok(DebitOutcome::Declined {
                    total: Decimal::MAX,
                    available: dec!(10000)
                })
            ),
            FailureMode::Raise => assert_eq!(
                result,
                Err(CoreError::insufficient_funds(Decimal::MAX, dec!(10000))),
                "{}",
                account.kind()
            ),
        }
        assert_eq!(account.balance(), dec!(10000), "{}", account.kind());
    }

    let mut savings = SavingsAccount::new("O", "A", dec!(1000)).unwrap();
    assert!(!savings.withdraw(Decimal::MAX).unwrap());
    assert_eq!(savings.balance(), dec!(1000));

    let mut card = paybox_core::CreditCard::new("H", "4000", "Visa", dec!(1000)).unwrap();
    assert!(card.pay(Decimal::MAX).unwrap_err().is_insufficient_funds());
    assert_eq!(card.balance(), dec!(1000));
}
