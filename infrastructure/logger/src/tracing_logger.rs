use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log messages to `tracing`, tagged with the emitting component.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("scanner")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "scanner", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "scanner", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "scanner", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "scanner", component = self.component, "{}", message);
    }
}
