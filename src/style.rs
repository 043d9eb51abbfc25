//! Named terminal styles and the palettes that render them

use std::io::IsTerminal;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sink::Stream;

const RESET: &str = "\x1b[0m";

/// Styles used by the logger. Every styled segment is followed by a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Red,
    Green,
    Yellow,
    Blue,
    Gray,
    /// Bold black on a gray background, used for the module tag
    Inverse,
}

impl Style {
    /// ANSI escape sequence that opens this style
    pub fn ansi(self) -> &'static str {
        match self {
            Style::Red => "\x1b[31m",
            Style::Green => "\x1b[32m",
            Style::Yellow => "\x1b[33m",
            Style::Blue => "\x1b[34m",
            Style::Gray => "\x1b[37m",
            Style::Inverse => "\x1b[47m\x1b[1;30m",
        }
    }
}

/// How styles are turned into bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Literal ANSI escape codes, whatever the destination
    #[default]
    Ansi,
    /// No escape codes at all
    Plain,
}

impl Palette {
    /// Pick `Ansi` when the stream is attached to a terminal, `Plain` otherwise
    pub fn detect(stream: Stream) -> Self {
        let tty = match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        };

        if tty { Palette::Ansi } else { Palette::Plain }
    }

    /// Code that opens `style`
    pub fn open(self, style: Style) -> &'static str {
        match self {
            Palette::Ansi => style.ansi(),
            Palette::Plain => "",
        }
    }

    /// Code that clears any open style
    pub fn reset(self) -> &'static str {
        match self {
            Palette::Ansi => RESET,
            Palette::Plain => "",
        }
    }

    /// Wrap `text` in `style` and reset right after it
    pub fn paint(self, style: Style, text: &str) -> String {
        format!("{}{}{}", self.open(style), text, self.reset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_paint_resets() {
        let painted = Palette::Ansi.paint(Style::Red, "boom");
        assert_eq!(painted, "\x1b[31mboom\x1b[0m");

        let tag = Palette::Ansi.paint(Style::Inverse, " db ");
        assert_eq!(tag, "\x1b[47m\x1b[1;30m db \x1b[0m");
    }

    #[test]
    fn test_plain_paint_has_no_escapes() {
        for style in [
            Style::Red,
            Style::Green,
            Style::Yellow,
            Style::Blue,
            Style::Gray,
            Style::Inverse,
        ] {
            assert_eq!(Palette::Plain.paint(style, "text"), "text");
        }
    }

    #[test]
    fn test_palette_serde_names() {
        let palette: Palette = serde_json::from_str("\"plain\"").unwrap();
        assert_eq!(palette, Palette::Plain);
        assert_eq!(serde_json::to_string(&Palette::Ansi).unwrap(), "\"ansi\"");
    }
}
