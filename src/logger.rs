//! The console logger
//!
//! A [`Logger`] renders one styled line per call and writes it to stdout or
//! stderr depending on the level. Rendering is stateless: the configuration is
//! fixed at construction and every call formats from scratch.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use chrono::Local;

use crate::config::LoggerConfig;
use crate::inspect::{NativeInspector, StackInspector};
use crate::level::Level;
use crate::sink::{ConsoleSink, Sink, Stream};
use crate::style::{Palette, Style};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TRACE_MARKER: &str = "  ↳ ⚙ TRACE: ";
const ERROR_DETAIL_MARKER: &str = "  ↳ ⚙ DETAIL: ";
const FATAL_DETAIL_MARKER: &str = "   ↳ ⚙ DETAIL: ";

/// Leveled console logger
#[derive(Clone)]
pub struct Logger {
    module_name: Option<String>,
    show_debug: bool,
    show_caller: bool,
    show_trace: bool,
    show_time: bool,
    palette: Palette,
    inspector: Arc<dyn StackInspector>,
    sink: Arc<dyn Sink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("module_name", &self.module_name)
            .field("show_debug", &self.show_debug)
            .field("show_caller", &self.show_caller)
            .field("show_trace", &self.show_trace)
            .field("show_time", &self.show_time)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

/// Join text fragments with single spaces, preserving order
fn join<I, S>(text: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    text.into_iter()
        .map(|fragment| fragment.as_ref().to_owned())
        .collect::<Vec<String>>()
        .join(" ")
}

impl Logger {
    /// Create a logger writing to the console with native stack introspection
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            module_name: config.module_name.filter(|name| !name.is_empty()),
            show_debug: config.show_debug,
            show_caller: config.show_caller,
            show_trace: config.show_trace,
            show_time: config.show_time,
            palette: config.palette,
            inspector: Arc::new(NativeInspector),
            sink: Arc::new(ConsoleSink),
        }
    }

    /// Replace the stack inspector used for caller identity and traces
    pub fn with_inspector(mut self, inspector: Arc<dyn StackInspector>) -> Self {
        self.inspector = inspector;
        self
    }

    /// Replace the destination of rendered lines
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the palette styles are rendered with
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The configuration this logger renders with
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            module_name: self.module_name.clone(),
            show_debug: self.show_debug,
            show_caller: self.show_caller,
            show_trace: self.show_trace,
            show_time: self.show_time,
            palette: self.palette,
        }
    }

    /// Informational message on stdout
    pub fn info<I, S>(&self, text: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = self.render(Level::Info, &join(text));
        self.emit(Level::Info.stream(), &line);
    }

    /// Announce the start of a step
    pub fn progress_info<I, S>(&self, text: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = self.marker(Level::Init);
        line.push_str(&join(text));
        self.emit(Level::Init.stream(), &line);
    }

    /// Report that the step announced by [`progress_info`](Self::progress_info) succeeded
    pub fn progress_ok(&self) {
        let line = self.marker(Level::Ok);
        self.emit(Level::Ok.stream(), &line);
    }

    /// Warning on stdout
    pub fn warn<I, S>(&self, text: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = self.render(Level::Warn, &join(text));
        self.emit(Level::Warn.stream(), &line);
    }

    /// Writes nothing unless debug output is enabled
    pub fn debug<I, S>(&self, text: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.show_debug {
            return;
        }

        let line = self.render(Level::Debug, &join(text));
        self.emit(Level::Debug.stream(), &line);
    }

    /// Error on stderr, with the caller when enabled
    pub fn error<I, S>(&self, text: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = self.render(Level::Error, &join(text));
        self.emit(Level::Error.stream(), &line);
    }

    /// Render a fatal message. The process keeps running; exiting is up to the caller.
    pub fn fatal<I, S>(&self, text: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = self.render(Level::Fatal, &join(text));
        if self.show_trace {
            line.push_str(&self.render_trace());
        }
        self.emit(Level::Fatal.stream(), &line);
    }

    /// Error line followed by a detail line carrying `err`'s message.
    ///
    /// Module tag, time and caller settings do not apply.
    pub fn error_with_detail(&self, text: &str, err: &dyn StdError) {
        let line = format!(
            "{}{}\n{}",
            self.marker(Level::Error),
            text,
            self.palette
                .paint(Style::Gray, &format!("{}{}", ERROR_DETAIL_MARKER, err))
        );
        self.emit(Stream::Stderr, &line);
    }

    /// Fatal line, marker and text both in red, followed by a detail line
    /// carrying `err`'s message.
    ///
    /// Module tag, time and caller settings do not apply.
    pub fn fatal_with_detail(&self, text: &str, err: &dyn StdError) {
        let line = format!(
            "{}\n{}",
            self.palette
                .paint(Level::Fatal.style(), &format!("{}{}", Level::Fatal.marker(), text)),
            self.palette
                .paint(Style::Gray, &format!("{}{}", FATAL_DETAIL_MARKER, err))
        );
        self.emit(Stream::Stderr, &line);
    }

    fn marker(&self, level: Level) -> String {
        self.palette.paint(level.style(), level.marker())
    }

    /// Module tag, marker, timestamp, caller and text, in that order
    fn render(&self, level: Level, text: &str) -> String {
        let mut out = String::new();

        if let Some(name) = &self.module_name {
            out.push_str(&self.palette.paint(Style::Inverse, &format!(" {} ", name)));
            out.push(' ');
        }

        out.push_str(&self.marker(level));

        if self.show_time {
            out.push_str(&Local::now().format(TIME_FORMAT).to_string());
            out.push(' ');
        }

        if self.show_caller && matches!(level, Level::Error | Level::Fatal) {
            let caller = self.inspector.caller().unwrap_or_default();
            out.push_str(&self.palette.paint(Style::Gray, &format!("[{}] ", caller)));
        }

        out.push_str(text);
        out
    }

    /// Empty when the inspector reports no frames
    fn render_trace(&self) -> String {
        let frames = self.inspector.frames();
        if frames.is_empty() {
            return String::new();
        }

        let indent = " ".repeat(TRACE_MARKER.chars().count());
        let mut out = String::from("\n");
        out.push_str(&self.palette.paint(Style::Gray, TRACE_MARKER));

        for (i, frame) in frames.iter().enumerate() {
            if i > 0 {
                out.push('\n');
                out.push_str(&indent);
            }
            out.push_str(&frame.to_string());
        }

        out
    }

    fn emit(&self, stream: Stream, line: &str) {
        // Failed writes are not reported
        let _ = self.sink.write_line(stream, line);
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        match metadata.level() {
            log::Level::Debug | log::Level::Trace => self.show_debug,
            _ => true,
        }
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let text = record.args().to_string();
        match Level::from(record.level()) {
            Level::Error => self.error([text]),
            Level::Warn => self.warn([text]),
            Level::Debug => self.debug([text]),
            _ => self.info([text]),
        }
    }

    fn flush(&self) {}
}
