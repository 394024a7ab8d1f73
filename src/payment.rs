//! Medios de pago intercambiables. Ninguno mueve dinero real, solo simulan la transaccion.
use rand::{thread_rng, Rng};

use crate::{
    constants::PAYMENT_STEP_WAIT_IN_MS,
    money::Money,
    pacing::Pacer,
    trace::Trace,
};

pub trait PaymentMethod {
    /// Ejecuta el pago. Devuelve `false` si el pago fue rechazado.
    fn pay(&self, amount: Money, trace: &dyn Trace, pacer: &dyn Pacer) -> bool;
    fn name(&self) -> &'static str;
}

fn transaction_id(prefix: &str) -> String {
    let number: u64 = thread_rng().gen_range(100_000_000u64, 1_000_000_000u64);
    format!("{}-{}", prefix, number)
}

pub struct CreditCardPayment {
    card_number: String,
    card_holder: String,
    // El codigo de seguridad nunca se escribe en las trazas
    #[allow(dead_code)]
    cvv: String,
    expiry_date: String,
}

impl CreditCardPayment {
    pub fn new(card_number: &str, card_holder: &str, cvv: &str, expiry_date: &str) -> CreditCardPayment {
        CreditCardPayment {
            card_number: card_number.to_string(),
            card_holder: card_holder.to_string(),
            cvv: cvv.to_string(),
            expiry_date: expiry_date.to_string(),
        }
    }

    /// Ultimos cuatro digitos de la tarjeta, el resto enmascarado
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().collect();
        let last_four: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** **** **** {}", last_four)
    }
}

impl PaymentMethod for CreditCardPayment {
    fn pay(&self, amount: Money, trace: &dyn Trace, pacer: &dyn Pacer) -> bool {
        trace.record("Processing Credit Card Payment...");
        trace.record(&format!("Card Holder: {}", self.card_holder));
        trace.record(&format!("Card Number: {}", self.masked_number()));
        trace.record(&format!("Expiry: {}", self.expiry_date));
        trace.record(&format!("Amount: ${:.2}", amount));

        trace.record("Connecting to payment gateway...");
        pacer.pause(PAYMENT_STEP_WAIT_IN_MS);
        trace.record("Verifying card details...");
        pacer.pause(PAYMENT_STEP_WAIT_IN_MS);
        trace.record("Payment authorized!");
        trace.record(&format!("Transaction ID: {}", transaction_id("CC")));
        true
    }

    fn name(&self) -> &'static str {
        "Credit Card"
    }
}

pub struct CashPayment {
    cash_received: Money,
}

impl CashPayment {
    pub fn new(cash_received: Money) -> CashPayment {
        CashPayment { cash_received }
    }

    /// Vuelto a entregar, si el efectivo alcanza
    pub fn change_due(&self, amount: Money) -> Option<Money> {
        if self.cash_received < amount {
            return None;
        }
        Some(self.cash_received - amount)
    }

    /// Cuanto falta para cubrir el monto, si el efectivo no alcanza
    pub fn shortfall(&self, amount: Money) -> Option<Money> {
        if self.cash_received < amount {
            return Some(amount - self.cash_received);
        }
        None
    }
}

impl PaymentMethod for CashPayment {
    fn pay(&self, amount: Money, trace: &dyn Trace, _pacer: &dyn Pacer) -> bool {
        trace.record("Processing Cash Payment...");
        trace.record(&format!("Amount Due: ${:.2}", amount));
        trace.record(&format!("Cash Received: ${:.2}", self.cash_received));

        let change = match self.change_due(amount) {
            Some(change) => change,
            None => {
                trace.record(&format!(
                    "Insufficient cash! Need ${:.2} more.",
                    self.shortfall(amount).unwrap_or_default()
                ));
                return false;
            }
        };

        trace.record("Payment accepted!");
        if change > Money::ZERO {
            trace.record(&format!("Change to return: ${:.2}", change));
        } else {
            trace.record("Exact amount received. No change needed.");
        }
        trace.record(&format!("Transaction ID: {}", transaction_id("CASH")));
        true
    }

    fn name(&self) -> &'static str {
        "Cash"
    }
}

pub struct PayPalPayment {
    email: String,
    // Solo se guarda; nunca se escribe en las trazas
    #[allow(dead_code)]
    password: String,
}

impl PayPalPayment {
    pub fn new(email: &str, password: &str) -> PayPalPayment {
        PayPalPayment {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl PaymentMethod for PayPalPayment {
    fn pay(&self, amount: Money, trace: &dyn Trace, pacer: &dyn Pacer) -> bool {
        trace.record("Processing PayPal Payment...");
        trace.record(&format!("PayPal Account: {}", self.email));
        trace.record(&format!("Amount: ${:.2}", amount));

        trace.record("Logging into PayPal...");
        pacer.pause(PAYMENT_STEP_WAIT_IN_MS);
        trace.record("Verifying account credentials...");
        pacer.pause(PAYMENT_STEP_WAIT_IN_MS);
        trace.record("Processing payment through PayPal...");
        pacer.pause(PAYMENT_STEP_WAIT_IN_MS);
        trace.record("Payment successful!");
        trace.record(&format!("Transaction ID: {}", transaction_id("PP")));
        trace.record(&format!("Receipt sent to: {}", self.email));
        true
    }

    fn name(&self) -> &'static str {
        "PayPal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{money::from_cents, pacing::NoPacing, trace::RecordingTrace};

    #[test]
    fn should_mask_all_but_last_four_digits() {
        let card = CreditCardPayment::new("4532123456789012", "Alice Johnson", "123", "12/25");
        assert_eq!("**** **** **** 9012", card.masked_number());
    }

    #[test]
    fn should_always_accept_credit_card() {
        let trace = RecordingTrace::new();
        let card = CreditCardPayment::new("4532123456789012", "Alice Johnson", "123", "12/25");
        assert_eq!(true, card.pay(from_cents(1149), &trace, &NoPacing));
        assert_eq!(true, trace.contains("Card Number: **** **** **** 9012"));
        assert_eq!(true, trace.contains("Amount: $11.49"));
        assert_eq!(false, trace.contains("4532123456789012"));
        assert_eq!(true, trace.contains("Transaction ID: CC-"));
        assert_eq!("Credit Card", card.name());
    }

    #[test]
    fn should_reject_insufficient_cash() {
        let trace = RecordingTrace::new();
        let cash = CashPayment::new(from_cents(3000));
        assert_eq!(false, cash.pay(from_cents(4599), &trace, &NoPacing));
        assert_eq!(true, trace.contains("Insufficient cash! Need $15.99 more."));
        assert_eq!(false, trace.contains("Transaction ID"));
        assert_eq!(Some(from_cents(1599)), cash.shortfall(from_cents(4599)));
        assert_eq!(None, cash.change_due(from_cents(4599)));
    }

    #[test]
    fn should_return_change_for_cash() {
        let trace = RecordingTrace::new();
        let cash = CashPayment::new(from_cents(5000));
        assert_eq!(true, cash.pay(from_cents(4599), &trace, &NoPacing));
        assert_eq!(true, trace.contains("Change to return: $4.01"));
        assert_eq!(true, trace.contains("Transaction ID: CASH-"));
        assert_eq!(Some(from_cents(401)), cash.change_due(from_cents(4599)));
        assert_eq!(None, cash.shortfall(from_cents(4599)));
    }

    #[test]
    fn should_accept_exact_cash() {
        let trace = RecordingTrace::new();
        let cash = CashPayment::new(from_cents(2000));
        assert_eq!(true, cash.pay(from_cents(2000), &trace, &NoPacing));
        assert_eq!(true, trace.contains("Exact amount received. No change needed."));
    }

    #[test]
    fn should_accept_exact_cash_for_a_sum_of_prices() {
        let trace = RecordingTrace::new();
        let amount = from_cents(1299) + from_cents(150) + from_cents(250);
        let cash = CashPayment::new(from_cents(1699));
        assert_eq!(true, cash.pay(amount, &trace, &NoPacing));
        assert_eq!(Some(Money::ZERO), cash.change_due(amount));
        assert_eq!(true, trace.contains("Amount Due: $16.99"));
        assert_eq!(true, trace.contains("Exact amount received. No change needed."));
        assert_eq!(false, trace.contains("Insufficient cash!"));
    }

    #[test]
    fn should_show_the_expiry_but_never_the_cvv() {
        let trace = RecordingTrace::new();
        let card = CreditCardPayment::new("4532123456789012", "Alice Johnson", "987", "12/25");
        card.pay(from_cents(1000), &trace, &NoPacing);
        assert_eq!(true, trace.contains("Expiry: 12/25"));
        let leaked = trace
            .lines()
            .iter()
            .filter(|line| !line.starts_with("Transaction ID"))
            .any(|line| line.contains("987"));
        assert_eq!(false, leaked);
    }

    #[test]
    fn should_never_show_the_paypal_password() {
        let trace = RecordingTrace::new();
        let paypal = PayPalPayment::new("alice@email.com", "hunter2");
        paypal.pay(from_cents(1000), &trace, &NoPacing);
        assert_eq!(false, trace.contains("hunter2"));
    }

    #[test]
    fn should_always_accept_paypal() {
        let trace = RecordingTrace::new();
        let paypal = PayPalPayment::new("alice@email.com", "secret");
        assert_eq!(true, paypal.pay(from_cents(2500), &trace, &NoPacing));
        assert_eq!(true, trace.contains("PayPal Account: alice@email.com"));
        assert_eq!(true, trace.contains("Transaction ID: PP-"));
        assert_eq!(true, trace.contains("Receipt sent to: alice@email.com"));
        assert_eq!("PayPal", paypal.name());
    }

    #[test]
    fn should_generate_prefixed_transaction_ids() {
        let id = transaction_id("CC");
        assert_eq!(true, id.starts_with("CC-"));
        assert_eq!(12, id.len());
    }
}
