//! # Demo 03: Payment Methods
//!
//! Four payment methods used interchangeably through `dyn PaymentMethod`.
//! Each loads $200 and pays $100 with its own fee.
//!
//! Run with: `cargo run -p paybox-demos --example 03_payment_methods`

use paybox_core::{
    BankTransfer, CoreResult, CreditCard, FeeSchedule, MobileMoney, PayPal, PaymentMethod,
};
use rust_decimal_macros::dec;

fn main() -> CoreResult<()> {
    println!("=== Demo 03: Payment Methods ===\n");
    print!("{}", FeeSchedule::standard().render());
    println!();

    let mut payments: Vec<Box<dyn PaymentMethod>> = vec![
        Box::new(CreditCard::new("William Achuchi", "1234-5675-8901", "Visa", dec!(500))?),
        Box::new(MobileMoney::new("+254708966189", "M-Pesa", dec!(300))?),
        Box::new(PayPal::new("william@example.com", "PayPal", dec!(1000))?),
        Box::new(BankTransfer::new("0011223344", "Equity Bank", "BankTransfer", dec!(2000))?),
    ];

    for method in payments.iter_mut() {
        println!("--- Using {} ---", method.method_name());

        method.load(dec!(200))?;
        println!("Loaded $200");

        match method.pay(dec!(100)) {
            Ok(receipt) => println!(
                "Payment of $100 succeeded (fee ${:.2}, receipt {})",
                receipt.fee, receipt.id
            ),
            Err(err) => println!("Payment failed: {}", err),
        }

        println!("{}\n", method.payment_info());
    }

    Ok(())
}
