//! Orden de un cliente. Avisa a sus interesados de cada cambio de estado.
use std::rc::Rc;

use log::debug;
use serde::Serialize;

use crate::{
    constants::INITIAL_ORDER_STATUS, errors::RestaurantError, listener::Listener, trace::Trace,
};

/// Foto de una orden para mostrarla o serializarla
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: u32,
    pub customer_name: String,
    pub items: Vec<String>,
    pub status: String,
    pub listeners: Vec<String>,
}

/// El estado es texto libre: no hay transiciones prohibidas y repetir un estado vuelve a notificar.
pub struct Order {
    id: u32,
    customer_name: String,
    items: Vec<String>,
    status: String,
    listeners: Vec<Rc<dyn Listener>>,
    trace: Rc<dyn Trace>,
}

impl Order {
    pub fn new(id: u32, customer_name: &str, trace: Rc<dyn Trace>) -> Order {
        trace.record(&format!("Order #{} created for {}", id, customer_name));
        Order {
            id,
            customer_name: customer_name.to_string(),
            items: Vec::new(),
            status: INITIAL_ORDER_STATUS.to_string(),
            listeners: Vec::new(),
            trace,
        }
    }

    pub fn add_item(&mut self, item: &str) {
        self.items.push(item.to_string());
        self.trace.record(&format!("Item added to order: {}", item));
    }

    /// Suscribe al interesado. Si la misma instancia ya estaba suscripta no hace nada.
    pub fn attach(&mut self, listener: Rc<dyn Listener>) {
        if self.is_attached(&listener) {
            debug!(
                "[ORDER {}] {} already attached, ignoring",
                self.id,
                listener.name()
            );
            return;
        }
        self.trace
            .record(&format!("Observer attached: {}", listener.name()));
        self.listeners.push(listener);
    }

    pub fn detach(&mut self, listener: &Rc<dyn Listener>) {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|attached| Rc::ptr_eq(attached, listener))
        {
            let removed = self.listeners.remove(position);
            self.trace
                .record(&format!("Observer detached: {}", removed.name()));
        }
    }

    /// Reemplaza el estado y notifica a cada interesado en orden de suscripcion.
    /// Si alguno falla, los siguientes no se enteran y se devuelve el error.
    pub fn set_status(&mut self, new_status: &str) -> Result<(), RestaurantError> {
        self.trace.record(&format!(
            "Order #{} status changing: {} → {}",
            self.id, self.status, new_status
        ));
        self.status = new_status.to_string();
        self.notify_listeners()
    }

    fn notify_listeners(&self) -> Result<(), RestaurantError> {
        self.trace.record(&format!(
            "NOTIFYING ALL OBSERVERS - Order #{} status: {}",
            self.id, self.status
        ));
        debug!(
            "[ORDER {}] Notifying {} listeners",
            self.id,
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener.update(&self.status, self.id, self.trace.as_ref())?;
        }
        Ok(())
    }

    fn is_attached(&self, listener: &Rc<dyn Listener>) -> bool {
        self.listeners
            .iter()
            .any(|attached| Rc::ptr_eq(attached, listener))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            customer_name: self.customer_name.clone(),
            items: self.items.clone(),
            status: self.status.clone(),
            listeners: self.listeners.iter().map(|listener| listener.name()).collect(),
        }
    }

    pub fn display(&self) {
        self.trace.record(&format!("Order #{} Details:", self.id));
        self.trace
            .record(&format!("Customer: {}", self.customer_name));
        self.trace
            .record(&format!("Items: {}", self.items.join(", ")));
        self.trace.record(&format!("Status: {}", self.status));
    }
}
