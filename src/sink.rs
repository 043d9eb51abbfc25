//! Output destinations for rendered log lines

use std::io::{self, Write};
use std::sync::Mutex;

/// Process stream a line is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Destination for rendered log lines
pub trait Sink: Send + Sync {
    /// Write `line` followed by a newline to `stream` in a single write
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()>;
}

/// Writes to the process's standard output and standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        match stream {
            Stream::Stdout => io::stdout().lock().write_all(buf.as_bytes()),
            Stream::Stderr => io::stderr().lock().write_all(buf.as_bytes()),
        }
    }
}

/// Records every line in memory, useful for capturing output in tests
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Stream, String)>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in write order
    pub fn entries(&self) -> Vec<(Stream, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Everything written to stdout, newline terminated
    pub fn stdout(&self) -> String {
        self.collect(Stream::Stdout)
    }

    /// Everything written to stderr, newline terminated
    pub fn stderr(&self) -> String {
        self.collect(Stream::Stderr)
    }

    /// Forget every recorded line
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn collect(&self, stream: Stream) -> String {
        self.entries()
            .into_iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line + "\n")
            .collect()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        entries.push((stream, line.to_string()));
        Ok(())
    }
}
