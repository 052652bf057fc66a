//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system
///
/// Honours `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Calling this more
/// than once is harmless; later calls leave the first logger in place.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::trace!("Logger already initialized");
    }
}

/// Initialize the logging system at a fixed level, ignoring `RUST_LOG`
pub fn init_with_level(level: LevelFilter) {
    if env_logger::Builder::new().filter_level(level).try_init().is_err() {
        log::trace!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_with_level(LevelFilter::Debug);
        init();
        init_with_level(LevelFilter::Warn);
        info!("logging initialized");
    }
}
