//! Call-stack introspection used for caller identity and trace blocks
//!
//! The logger never walks the stack itself. It asks a [`StackInspector`] for
//! the frames above the public log method, so the formatting code stays the
//! same whether frames come from the real backtrace, from nowhere, or from a
//! fixed list in tests.

use std::fmt;
use std::path::PathBuf;

/// One resolved stack frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Fully qualified function name
    pub function: String,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

impl Frame {
    /// Frame with a known file and line
    pub fn new(function: impl Into<String>, file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}", file.display())?,
            None => write!(f, "<unknown>")?,
        }
        write!(f, ":{} {}", self.line.unwrap_or(0), self.function)
    }
}

/// Source of stack frames for the logger
pub trait StackInspector: Send + Sync {
    /// Frames innermost first, starting at the caller of the public log method
    fn frames(&self) -> Vec<Frame>;

    /// Name of the function that called the public log method
    fn caller(&self) -> Option<String> {
        self.frames().into_iter().next().map(|frame| frame.function)
    }
}

/// Inspector for platforms or builds without stack introspection
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInspector;

impl StackInspector for NoopInspector {
    fn frames(&self) -> Vec<Frame> {
        Vec::new()
    }

    fn caller(&self) -> Option<String> {
        None
    }
}

/// Leading frames with these prefixes belong to the logging machinery
const INTERNAL_PREFIXES: &[&str] = &[
    "backtrace::",
    "log::",
    concat!(env!("CARGO_CRATE_NAME"), "::inspect::NativeInspector"),
    concat!(env!("CARGO_CRATE_NAME"), "::inspect::StackInspector"),
    concat!(env!("CARGO_CRATE_NAME"), "::logger::Logger"),
];

fn is_internal(function: &str) -> bool {
    let function = function.trim_start_matches('<');
    INTERNAL_PREFIXES
        .iter()
        .any(|prefix| function.starts_with(prefix))
}

/// Inspector backed by the process's real call stack
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeInspector;

impl StackInspector for NativeInspector {
    fn frames(&self) -> Vec<Frame> {
        let trace = backtrace::Backtrace::new();
        let mut frames = Vec::new();

        for frame in trace.frames() {
            let symbols = frame.symbols();
            if symbols.is_empty() {
                frames.push(Frame {
                    function: "<unknown>".to_string(),
                    file: None,
                    line: None,
                });
                continue;
            }

            // Inlined calls show up as several symbols on one frame, innermost first
            for symbol in symbols {
                frames.push(Frame {
                    function: symbol
                        .name()
                        .map(|name| format!("{:#}", name))
                        .unwrap_or_else(|| "<unknown>".to_string()),
                    file: symbol.filename().map(|path| path.to_path_buf()),
                    line: symbol.lineno(),
                });
            }
        }

        // Everything up to the outermost logging frame is machinery
        let skip = frames
            .iter()
            .rposition(|frame| is_internal(&frame.function))
            .map_or(0, |i| i + 1);
        frames.split_off(skip)
    }
}

/// Inspector that always reports the same frames
#[derive(Debug, Clone, Default)]
pub struct StaticInspector {
    frames: Vec<Frame>,
}

impl StaticInspector {
    /// Inspector reporting `frames`, innermost first
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl StackInspector for StaticInspector {
    fn frames(&self) -> Vec<Frame> {
        self.frames.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_display() {
        let frame = Frame::new("app::server::run", "src/server.rs", 42);
        assert_eq!(frame.to_string(), "src/server.rs:42 app::server::run");

        let bare = Frame {
            function: "main".to_string(),
            file: None,
            line: None,
        };
        assert_eq!(bare.to_string(), "<unknown>:0 main");
    }

    #[test]
    fn test_noop_inspector() {
        let inspector = NoopInspector;
        assert!(inspector.frames().is_empty());
        assert_eq!(inspector.caller(), None);
    }

    #[test]
    fn test_static_inspector_caller() {
        let inspector = StaticInspector::new(vec![
            Frame::new("app::handler", "src/handler.rs", 10),
            Frame::new("app::main", "src/main.rs", 3),
        ]);
        assert_eq!(inspector.frames().len(), 2);
        assert_eq!(inspector.caller().as_deref(), Some("app::handler"));
    }

    #[test]
    fn test_internal_prefixes() {
        assert!(is_internal("backtrace::capture::Backtrace::new"));
        assert!(is_internal("log::__private_api::log_impl"));
        assert!(is_internal(&format!(
            "<{}::inspect::NativeInspector as {}::inspect::StackInspector>::frames",
            env!("CARGO_CRATE_NAME"),
            env!("CARGO_CRATE_NAME")
        )));
        assert!(is_internal(&format!(
            "{}::logger::Logger::fatal",
            env!("CARGO_CRATE_NAME")
        )));
        assert!(!is_internal(&format!(
            "{}::inspect::tests::capture_from_here",
            env!("CARGO_CRATE_NAME")
        )));
        assert!(!is_internal(&format!(
            "{}::logger::tests::test_fatal",
            env!("CARGO_CRATE_NAME")
        )));
        assert!(!is_internal("app::main"));
    }

    #[inline(never)]
    fn capture_from_here() -> Vec<Frame> {
        NativeInspector.frames()
    }

    #[test]
    fn test_native_inspector_skips_machinery() {
        let frames = capture_from_here();
        assert!(!frames.is_empty());
        assert!(!is_internal(&frames[0].function));
        assert!(
            frames
                .iter()
                .any(|frame| frame.function.contains("capture_from_here")),
            "frames: {:?}",
            frames
        );
    }
}
