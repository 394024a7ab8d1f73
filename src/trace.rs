//! Salida de trazas legibles de cada operacion.
use log::{info, warn};

/// Destino de las trazas que emiten los componentes del restaurante.
pub trait Trace {
    fn record(&self, line: &str);

    fn warn(&self, line: &str) {
        self.record(line);
    }
}

/// Envia las trazas al logger configurado en el binario
pub struct LogTrace;

impl Trace for LogTrace {
    fn record(&self, line: &str) {
        info!("{}", line);
    }

    fn warn(&self, line: &str) {
        warn!("{}", line);
    }
}

#[cfg(test)]
pub use recording::RecordingTrace;
