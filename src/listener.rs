//! Interesados en los cambios de estado de una orden.
use crate::{errors::RestaurantError, trace::Trace};

/// Recibe cada cambio de estado de las ordenes a las que esta suscripto.
/// Solo describe la novedad; no modifica la orden ni puede desuscribirse desde `update`.
pub trait Listener {
    fn update(&self, status: &str, order_id: u32, trace: &dyn Trace)
        -> Result<(), RestaurantError>;
    fn name(&self) -> String;
}

pub struct KitchenListener {
    kitchen_name: String,
}

impl KitchenListener {
    pub fn new(kitchen_name: &str) -> KitchenListener {
        KitchenListener {
            kitchen_name: kitchen_name.to_string(),
        }
    }
}

impl Listener for KitchenListener {
    fn update(
        &self,
        status: &str,
        order_id: u32,
        trace: &dyn Trace,
    ) -> Result<(), RestaurantError> {
        trace.record(&format!(
            "[KITCHEN - {}] Received notification:",
            self.kitchen_name
        ));
        let lines = match status {
            "Confirmed" => vec![
                format!("Order #{} confirmed. Adding to cooking queue...", order_id),
                format!("Preparing ingredients for order #{}", order_id),
            ],
            "Preparing" => vec![
                format!("Order #{} is now being prepared", order_id),
                "Chefs are cooking the meals...".to_string(),
            ],
            "Ready" => vec![
                format!("Order #{} is ready for pickup!", order_id),
                "Moving order to pickup counter...".to_string(),
            ],
            "Delivered" => vec![
                format!("Order #{} has been delivered", order_id),
                "Kitchen can clear this order from queue".to_string(),
            ],
            other => vec![format!("Order #{} status: {}", order_id, other)],
        };
        record_all(trace, &lines);
        Ok(())
    }

    fn name(&self) -> String {
        format!("Kitchen ({})", self.kitchen_name)
    }
}

pub struct CustomerListener {
    customer_name: String,
    phone_number: String,
}

impl CustomerListener {
    pub fn new(customer_name: &str, phone_number: &str) -> CustomerListener {
        CustomerListener {
            customer_name: customer_name.to_string(),
            phone_number: phone_number.to_string(),
        }
    }
}

impl Listener for CustomerListener {
    fn update(
        &self,
        status: &str,
        order_id: u32,
        trace: &dyn Trace,
    ) -> Result<(), RestaurantError> {
        trace.record(&format!(
            "[CUSTOMER - {}] Notification received:",
            self.customer_name
        ));
        let lines = match status {
            "Confirmed" => vec![
                format!("Your order #{} has been confirmed!", order_id),
                "We'll notify you when it's ready".to_string(),
                format!("SMS sent to: {}", self.phone_number),
            ],
            "Preparing" => vec![
                format!("Your order #{} is being prepared", order_id),
                "Estimated time: 15-20 minutes".to_string(),
            ],
            "Ready" => vec![
                format!("Great news! Your order #{} is ready!", order_id),
                "Please come to pickup counter".to_string(),
                format!("SMS sent to: {}", self.phone_number),
            ],
            "Delivered" => vec![
                format!("Order #{} delivered. Enjoy your meal!", order_id),
                "Thank you for choosing our restaurant!".to_string(),
                "Please rate your experience".to_string(),
            ],
            other => vec![format!("Order #{} update: {}", order_id, other)],
        };
        record_all(trace, &lines);
        Ok(())
    }

    fn name(&self) -> String {
        format!("Customer ({})", self.customer_name)
    }
}

pub struct WaiterListener {
    waiter_name: String,
    table_number: u32,
}

impl WaiterListener {
    pub fn new(waiter_name: &str, table_number: u32) -> WaiterListener {
        WaiterListener {
            waiter_name: waiter_name.to_string(),
            table_number,
        }
    }
}

impl Listener for WaiterListener {
    fn update(
        &self,
        status: &str,
        order_id: u32,
        trace: &dyn Trace,
    ) -> Result<(), RestaurantError> {
        trace.record(&format!(
            "[WAITER - {} | Table {}] Alert:",
            self.waiter_name, self.table_number
        ));
        let table = self.table_number;
        let lines = match status {
            "Confirmed" => vec![
                format!("Order #{} confirmed for Table {}", order_id, table),
                "Informing customer about wait time...".to_string(),
            ],
            "Preparing" => vec![
                format!("Order #{} is being prepared in kitchen", order_id),
                "Will check on progress shortly...".to_string(),
            ],
            "Ready" => vec![
                format!("Order #{} is ready at pickup counter!", order_id),
                format!("Picking up order to serve at Table {}", table),
            ],
            "Delivered" => vec![
                format!("Order #{} delivered to Table {}", order_id, table),
                "Checking if customer needs anything else...".to_string(),
            ],
            other => vec![format!("Order #{} status: {}", order_id, other)],
        };
        record_all(trace, &lines);
        Ok(())
    }

    fn name(&self) -> String {
        format!("Waiter ({} - Table {})", self.waiter_name, self.table_number)
    }
}

fn record_all(trace: &dyn Trace, lines: &[String]) {
    for line in lines {
        trace.record(&format!("  → {}", line));
    }
}
