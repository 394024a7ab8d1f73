//! Contexto que ejecuta los pagos con el medio seleccionado.
use std::rc::Rc;

use log::debug;

use crate::{
    errors::RestaurantError, money::Money, pacing::Pacer, payment::PaymentMethod, trace::Trace,
};

/// Guarda a lo sumo un medio de pago. Seleccionar otro reemplaza al anterior.
pub struct PaymentContext {
    method: Option<Box<dyn PaymentMethod>>,
    trace: Rc<dyn Trace>,
    pacer: Rc<dyn Pacer>,
}

impl PaymentContext {
    pub fn new(trace: Rc<dyn Trace>, pacer: Rc<dyn Pacer>) -> PaymentContext {
        PaymentContext {
            method: None,
            trace,
            pacer,
        }
    }

    pub fn select_method(&mut self, method: Box<dyn PaymentMethod>) {
        self.trace
            .record(&format!("Payment method set to: {}", method.name()));
        self.method = Some(method);
    }

    pub fn current_method(&self) -> &'static str {
        match &self.method {
            Some(method) => method.name(),
            None => "No payment method set",
        }
    }

    pub fn execute_payment(&self, amount: Money) -> Result<bool, RestaurantError> {
        let method = self.method.as_ref().ok_or_else(|| {
            RestaurantError::InvalidState(
                "Payment method not set. Please set a payment method first.".to_string(),
            )
        })?;
        if amount <= Money::ZERO {
            return Err(RestaurantError::InvalidArgument(
                "Payment amount must be greater than zero".to_string(),
            ));
        }

        debug!("[PAYMENT] Charging {:.2} with {}", amount, method.name());
        self.trace
            .record(&format!("Executing payment using: {}", method.name()));
        let success = method.pay(amount, self.trace.as_ref(), self.pacer.as_ref());
        if success {
            self.trace.record("Payment completed successfully!");
        } else {
            self.trace.warn("Payment failed!");
        }
        Ok(success)
    }
}
