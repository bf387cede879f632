//! PrettyLog Core
//!
//! Process-local logging: tagged, color-coded console lines plus plain-text
//! records appended to `<log directory>/log.txt`, and exception reporting
//! that logs an error message followed by the captured call stack.
//!
//! ```rust,no_run
//! use prettylog_core::{AnsiColor, ColorPair, Log, LogCategory, Logger, Settings};
//!
//! let logger = Logger::new(Settings::default());
//! logger.load_settings();
//!
//! let db = LogCategory::new("Database", ColorPair::on_black(AnsiColor::CYAN));
//! logger.log("connection pool ready", &db);
//!
//! if let Err(e) = std::fs::read("missing.cfg") {
//!     logger.log_exception(&e);
//! }
//! ```

pub mod color;
pub mod category;
pub mod record;
pub mod settings;
pub mod stack;
pub mod logging;

// Re-export commonly used types
pub use color::{AnsiColor, ColorPair, COLOR_TABLE};
pub use category::{LogCategory, EXCEPTION, STACK_TRACE, PANIC};
pub use record::LogRecord;
pub use settings::{Settings, SettingsError, SettingsResult};
pub use stack::{
    StackCapturer, SymbolStackCapturer, RawStackCapturer, NoOpStackCapturer,
    capture_stack, default_capturer, MAX_FRAMES,
};
pub use logging::{
    Log, LoggerExt, Logger, NoOpLogger, MemoryConsole, SharedLogger,
    install_panic_hook,
};
