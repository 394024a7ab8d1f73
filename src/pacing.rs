//! Pausas cosmeticas entre las trazas. No afectan el resultado de ninguna operacion.
use std::{thread, time::Duration};

use log::debug;

pub trait Pacer {
    fn pause(&self, millis: u64);
}

/// No espera. Es la opcion por defecto fuera del binario de demostracion.
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self, _millis: u64) {}
}

/// Duerme el hilo actual el tiempo pedido
pub struct ThreadPacing;

impl Pacer for ThreadPacing {
    fn pause(&self, millis: u64) {
        debug!("[PACING] Sleeping {} ms", millis);
        thread::sleep(Duration::from_millis(millis));
    }
}
