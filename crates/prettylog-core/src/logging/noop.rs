//! No-op logger implementation

use std::fmt;

use super::traits::Log;
use crate::category::LogCategory;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Log for NoOpLogger {
    fn log(&self, _message: &str, _category: &LogCategory) {}
    fn log_exception(&self, _error: &dyn fmt::Display) {}
}
