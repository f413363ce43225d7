use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every use-case log line is emitted under, so `RUST_LOG` can
/// select application events apart from sqlx and poem output.
pub const LOG_TARGET: &str = "fashionpulse";

/// Forwards domain log calls to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_be_usable_as_domain_logger() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        logger.info("info without subscriber");
        logger.warn("warn without subscriber");
        logger.error("error without subscriber");
        logger.debug("debug without subscriber");
    }
}
