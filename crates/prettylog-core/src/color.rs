//! ANSI color table
//!
//! Escape sequences for the eight basic terminal colors plus reset/bold, and
//! the `ColorPair` that a [`LogCategory`](crate::LogCategory) carries.

use std::borrow::Cow;

/// ANSI escape sequences
#[derive(Debug, Clone, Copy)]
pub struct AnsiColor;

impl AnsiColor {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BLACK: &'static str = "\x1b[30m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const CYAN: &'static str = "\x1b[36m";
    pub const WHITE: &'static str = "\x1b[37m";
    pub const BOLD: &'static str = "\x1b[1m";

    /// Look up an escape sequence by its semantic name (case-insensitive)
    ///
    /// ```
    /// use prettylog_core::AnsiColor;
    ///
    /// assert_eq!(AnsiColor::lookup("red"), Some(AnsiColor::RED));
    /// assert_eq!(AnsiColor::lookup("chartreuse"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<&'static str> {
        COLOR_TABLE
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, code)| *code)
    }
}

/// Semantic name to escape sequence
pub const COLOR_TABLE: &[(&str, &str)] = &[
    ("reset", AnsiColor::RESET),
    ("black", AnsiColor::BLACK),
    ("red", AnsiColor::RED),
    ("green", AnsiColor::GREEN),
    ("yellow", AnsiColor::YELLOW),
    ("blue", AnsiColor::BLUE),
    ("magenta", AnsiColor::MAGENTA),
    ("cyan", AnsiColor::CYAN),
    ("white", AnsiColor::WHITE),
    ("bold", AnsiColor::BOLD),
];

/// Background/foreground color tokens
///
/// Only the foreground is used when rendering console lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub background: Cow<'static, str>,
    pub foreground: Cow<'static, str>,
}

impl ColorPair {
    /// Create a color pair from two static escape sequences
    pub const fn new(background: &'static str, foreground: &'static str) -> Self {
        Self {
            background: Cow::Borrowed(background),
            foreground: Cow::Borrowed(foreground),
        }
    }

    /// Create a color pair from arbitrary escape sequences (e.g. 256-color codes)
    pub fn custom(background: impl Into<String>, foreground: impl Into<String>) -> Self {
        Self {
            background: Cow::Owned(background.into()),
            foreground: Cow::Owned(foreground.into()),
        }
    }

    /// Foreground color on a black background
    pub const fn on_black(foreground: &'static str) -> Self {
        Self::new(AnsiColor::BLACK, foreground)
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::on_black(AnsiColor::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(AnsiColor::lookup("YELLOW"), Some(AnsiColor::YELLOW));
        assert_eq!(AnsiColor::lookup("reset"), Some("\x1b[0m"));
        assert_eq!(AnsiColor::lookup(""), None);
    }

    #[test]
    fn test_color_pair() {
        let pair = ColorPair::on_black(AnsiColor::RED);
        assert_eq!(pair.background, AnsiColor::BLACK);
        assert_eq!(pair.foreground, AnsiColor::RED);

        // Borrowed and owned tokens compare structurally
        assert_eq!(ColorPair::custom("\x1b[30m", "\x1b[31m"), pair);
    }
}
