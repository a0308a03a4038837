use std::sync::Arc;

/// A logger called with progress and result messages of a solver run.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

pub fn stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{}", msg))
}

pub fn silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
