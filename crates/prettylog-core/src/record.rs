//! The two renderings of a single log event

use chrono::{DateTime, Local};

use crate::category::LogCategory;
use crate::color::AnsiColor;

/// Timestamp format of `log.txt` lines
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A (timestamp, category, message) triple captured at one instant
///
/// The console line carries no timestamp; the file line does. Message text is
/// passed through verbatim in both, embedded newlines and brackets included.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub category: &'a LogCategory,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Capture a record stamped with the current local time
    pub fn now(message: &'a str, category: &'a LogCategory) -> Self {
        Self::at(Local::now(), message, category)
    }

    pub fn at(timestamp: DateTime<Local>, message: &'a str, category: &'a LogCategory) -> Self {
        Self {
            timestamp,
            category,
            message,
        }
    }

    /// `<fg><name>: <message><reset>`, without a trailing newline
    pub fn console_line(&self) -> String {
        format!(
            "{}{}: {}{}",
            self.category.colors.foreground,
            self.category.name,
            self.message,
            AnsiColor::RESET
        )
    }

    /// `[YYYY-MM-DD HH:MM:SS] [<name>] <message>`, without a trailing newline
    pub fn file_line(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.format(FILE_TIMESTAMP_FORMAT),
            self.category.name,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorPair;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).single().unwrap()
    }

    #[test]
    fn test_console_line() {
        let category = LogCategory::new("Warning", ColorPair::on_black(AnsiColor::YELLOW));
        let record = LogRecord::at(fixed_time(), "disk full", &category);
        assert_eq!(record.console_line(), "\x1b[33mWarning: disk full\x1b[0m");
    }

    #[test]
    fn test_file_line() {
        let category = LogCategory::new("Info", ColorPair::default());
        let record = LogRecord::at(fixed_time(), "started [pid 42]\nsecond line", &category);
        assert_eq!(
            record.file_line(),
            "[2024-03-09 07:05:02] [Info] started [pid 42]\nsecond line"
        );
    }

    #[test]
    fn test_empty_name_passes_through() {
        let category = LogCategory::new("", ColorPair::default());
        let record = LogRecord::at(fixed_time(), "", &category);
        assert_eq!(record.file_line(), "[2024-03-09 07:05:02] [] ");
        assert_eq!(record.console_line(), "\x1b[37m: \x1b[0m");
    }
}
