//! Leveled, color-coded console logging.
//!
//! This library renders info, warning, debug, error, fatal and progress
//! messages as single styled lines on stdout or stderr, with optional module
//! tags, timestamps, caller identity and stack traces.

use std::error::Error as StdError;
use std::fmt;

pub mod config;
pub mod inspect;
pub mod level;
pub mod logger;
pub mod logging;
pub mod schema;
pub mod sink;
pub mod style;

// Re-export key types
pub use config::LoggerConfig;
pub use inspect::{Frame, NativeInspector, NoopInspector, StackInspector, StaticInspector};
pub use level::Level;
pub use logger::Logger;
pub use sink::{ConsoleSink, MemorySink, Sink, Stream};
pub use style::{Palette, Style};

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// JSON serialization/deserialization error
    Json(serde_json::Error),
    /// Configuration rejected by validation
    InvalidConfig(String),
    /// A global logger was already installed
    Install(log::SetLoggerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Install(err) => write!(f, "Logger installation failed: {}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::InvalidConfig(_) => None,
            Error::Install(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::Install(err)
    }
}

/// Type alias for library results
pub type Result<T> = std::result::Result<T, Error>;

/// Create a console logger from JSON configuration
pub fn logger_from_json(json: &str) -> Result<Logger> {
    let config = LoggerConfig::from_json(json)?;
    Ok(Logger::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_from_json() {
        let logger = logger_from_json(r#"{"module_name": "net", "show_trace": true}"#).unwrap();
        let config = logger.config();
        assert_eq!(config.module_name.as_deref(), Some("net"));
        assert!(config.show_trace);
    }

    #[test]
    fn test_error_display_and_source() {
        let err = logger_from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("JSON error: "));
        assert!(err.source().is_some());

        let err = Error::InvalidConfig("bad".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: bad");
        assert!(err.source().is_none());
    }
}
