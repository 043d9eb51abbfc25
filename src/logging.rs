//! Integration with the `log` crate
//!
//! This module installs a [`Logger`] as the process-wide `log` backend and
//! re-exports the `log` macros so applications can log through either API.

use crate::{Logger, Result};

/// Highest `log` level a logger will render
pub fn max_level(logger: &Logger) -> log::LevelFilter {
    if logger.config().show_debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Install `logger` as the global `log` backend.
///
/// Fails if a global logger has already been set.
pub fn init(logger: Logger) -> Result<()> {
    let level = max_level(&logger);
    log::set_logger(Box::leak(Box::new(logger)))?;
    log::set_max_level(level);
    Ok(())
}

// Re-export the log crate and its macros
pub use log::{LevelFilter, debug, error, info, trace, warn};
