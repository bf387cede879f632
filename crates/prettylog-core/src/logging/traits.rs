//! Log trait definition

use std::fmt;
use std::sync::Arc;

use crate::category::LogCategory;

/// Logging abstraction
///
/// Implementations:
/// - `Logger`: colorized console line plus an appended `log.txt` record
/// - `NoOpLogger`: Silent logger for testing
///
/// Neither operation returns an error. Sink failures are reported as a
/// console warning and logging carries on.
pub trait Log: Send + Sync {
    /// Log a message under a category
    fn log(&self, message: &str, category: &LogCategory);

    /// Log an error's message, then one line per captured stack frame
    fn log_exception(&self, error: &dyn fmt::Display);
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Log>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Log>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Log {
    /// Log a message built from format arguments
    fn log_fmt(&self, category: &LogCategory, args: fmt::Arguments<'_>) {
        self.log(&args.to_string(), category);
    }
}

// Implement LoggerExt for all Log implementations
impl<T: Log + ?Sized> LoggerExt for T {}

/// Log a formatted message under a category
///
/// ```
/// use prettylog_core::{log_fmt, AnsiColor, ColorPair, LogCategory, NoOpLogger};
///
/// let logger = NoOpLogger::new();
/// let net = LogCategory::new("Net", ColorPair::on_black(AnsiColor::CYAN));
/// log_fmt!(logger, net, "connected to {}:{}", "localhost", 8080);
/// ```
#[macro_export]
macro_rules! log_fmt {
    ($logger:expr, $category:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.log_fmt(&$category, format_args!($($arg)*))
    }};
}
