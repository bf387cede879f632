//! Console + file logger

use std::cell::Cell;
use std::fmt;
use std::io::Write;

use parking_lot::Mutex;

use super::console::{self, ConsoleWriter};
use super::file;
use super::traits::Log;
use crate::category::{LogCategory, EXCEPTION, STACK_TRACE};
use crate::record::LogRecord;
use crate::settings::Settings;
use crate::stack::{default_capturer, BoxedStackCapturer, StackCapturer};

thread_local! {
    static HOLDS_LOCK: Cell<bool> = Cell::new(false);
}

/// Set while this thread holds a logger lock, cleared on drop (unwinding too)
struct LockHeld;

impl LockHeld {
    fn enter() -> Self {
        HOLDS_LOCK.with(|held| held.set(true));
        Self
    }
}

impl Drop for LockHeld {
    fn drop(&mut self) {
        HOLDS_LOCK.with(|held| held.set(false));
    }
}

/// Whether the current thread is inside a logger's critical section
///
/// The lock is not re-entrant; a panic hook firing here must not log.
pub(crate) fn lock_held_by_current_thread() -> bool {
    HOLDS_LOCK.with(Cell::get)
}

/// Writes each record to the console and, if enabled, appends it to `log.txt`
///
/// One lock guards both sinks for the duration of a single `log` call, so
/// concurrent calls never interleave within a line. `log_exception` is a
/// sequence of such calls, and other threads' lines may land between them.
///
/// The log file is opened and closed on every call; no handle is held.
///
/// # Example
///
/// ```no_run
/// use prettylog_core::{AnsiColor, ColorPair, Log, LogCategory, Logger, Settings};
///
/// let logger = Logger::new(Settings::default());
/// logger.load_settings();
///
/// let info = LogCategory::new("Info", ColorPair::on_black(AnsiColor::GREEN));
/// logger.log("service started", &info);
/// ```
pub struct Logger {
    settings: Settings,
    capturer: BoxedStackCapturer,
    console: Mutex<ConsoleWriter>,
}

impl Logger {
    /// Create a logger writing to standard output
    pub fn new(settings: Settings) -> Self {
        Self::with_console(settings, console::stdout())
    }

    /// Create a logger writing console lines to `console`
    pub fn with_console(settings: Settings, console: impl Write + Send + 'static) -> Self {
        let console: ConsoleWriter = Box::new(console);
        Self {
            settings,
            capturer: default_capturer(),
            console: Mutex::new(console),
        }
    }

    /// Replace the stack capturer used by `log_exception`
    pub fn with_capturer(mut self, capturer: impl StackCapturer + 'static) -> Self {
        self.capturer = Box::new(capturer);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn capturer(&self) -> &dyn StackCapturer {
        self.capturer.as_ref()
    }

    /// Prepare the log directory, reporting failure on this logger's console
    ///
    /// Returns whether the directory and probe file could be created.
    pub fn load_settings(&self) -> bool {
        match self.settings.try_load() {
            Ok(_) => true,
            Err(e) => {
                let mut console = self.console.lock();
                let _held = LockHeld::enter();
                let _ = writeln!(console, "{}", e);
                let _ = console.flush();
                false
            }
        }
    }

    /// `log_exception` for a `std::error::Error`
    pub fn log_error(&self, error: &dyn std::error::Error) {
        self.report(&error.to_string(), &EXCEPTION);
    }

    /// Log `message` under `category`, then each captured frame as a stack trace line
    pub(crate) fn report(&self, message: &str, category: &LogCategory) {
        self.write_record(message, category);
        for frame in self.capturer.capture() {
            self.write_record(&frame, &STACK_TRACE);
        }
    }

    fn write_record(&self, message: &str, category: &LogCategory) {
        let mut console = self.console.lock();
        let _held = LockHeld::enter();
        let record = LogRecord::now(message, category);

        let _ = writeln!(console, "{}", record.console_line());

        if self.settings.file_logging_enabled {
            let path = self.settings.log_file_path();
            match file::open_append(&path) {
                Ok(mut log_file) => {
                    if file::append_line(&mut log_file, &record.file_line()).is_err() {
                        let _ = writeln!(console, "Failed to write log file: {}", path.display());
                    }
                }
                Err(_) => {
                    let _ = writeln!(console, "Failed to open log file: {}", path.display());
                }
            }
        }

        let _ = console.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Log for Logger {
    fn log(&self, message: &str, category: &LogCategory) {
        self.write_record(message, category);
    }

    fn log_exception(&self, error: &dyn fmt::Display) {
        self.report(&error.to_string(), &EXCEPTION);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings)
            .field("capturer", &self.capturer.name())
            .finish()
    }
}
