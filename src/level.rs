//! Severity levels and their markers

use crate::sink::Stream;
use crate::style::Style;

/// Level of a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Debug,
    Error,
    Fatal,
    /// Start of a progress step
    Init,
    /// Completion of a progress step
    Ok,
}

impl Level {
    /// Symbol and word shown in front of the message
    pub fn marker(self) -> &'static str {
        match self {
            Level::Info => "ℹ INFO: ",
            Level::Warn => "⚠ WARNING: ",
            Level::Debug => "⚙ DEBUG: ",
            Level::Error => "✘ ERROR: ",
            Level::Fatal => "💥 FATAL: ",
            Level::Init => "∴ INIT: ",
            Level::Ok => "  ↳ ✔ OK!",
        }
    }

    /// Color of the marker
    pub fn style(self) -> Style {
        match self {
            Level::Info | Level::Ok => Style::Green,
            Level::Warn => Style::Yellow,
            Level::Debug => Style::Blue,
            Level::Error | Level::Fatal => Style::Red,
            Level::Init => Style::Gray,
        }
    }

    /// Stream messages of this level are written to
    pub fn stream(self) -> Stream {
        match self {
            Level::Error | Level::Fatal => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}
