//! Log categories

use std::borrow::Cow;

use crate::color::{AnsiColor, ColorPair};

/// A named, colorized classification attached to a single message
///
/// Categories are built at the call site and are not registered anywhere;
/// two categories are the same if their name and colors match.
///
/// # Example
///
/// ```
/// use prettylog_core::{AnsiColor, ColorPair, LogCategory};
///
/// let warning = LogCategory::new("Warning", ColorPair::on_black(AnsiColor::YELLOW));
/// assert_eq!(warning.name, "Warning");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogCategory {
    pub name: Cow<'static, str>,
    pub colors: ColorPair,
}

/// Category of the first line written by `log_exception`
pub const EXCEPTION: LogCategory = LogCategory::fixed("Exception", ColorPair::on_black(AnsiColor::RED));

/// Category of each captured frame written by `log_exception`
pub const STACK_TRACE: LogCategory =
    LogCategory::fixed("Stack Trace", ColorPair::on_black(AnsiColor::YELLOW));

/// Category of the first line written by the panic hook
pub const PANIC: LogCategory = LogCategory::fixed("Panic", ColorPair::on_black(AnsiColor::RED));

impl LogCategory {
    /// Create a category with any name
    pub fn new(name: impl Into<String>, colors: ColorPair) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            colors,
        }
    }

    /// Create a category from a static name, usable in `const` items
    pub const fn fixed(name: &'static str, colors: ColorPair) -> Self {
        Self {
            name: Cow::Borrowed(name),
            colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories() {
        assert_eq!(EXCEPTION.name, "Exception");
        assert_eq!(EXCEPTION.colors.foreground, AnsiColor::RED);
        assert_eq!(STACK_TRACE.name, "Stack Trace");
        assert_eq!(STACK_TRACE.colors.foreground, AnsiColor::YELLOW);
        assert_eq!(PANIC.colors.background, AnsiColor::BLACK);
    }

    #[test]
    fn test_structural_equality() {
        let a = LogCategory::new("Exception", ColorPair::on_black(AnsiColor::RED));
        assert_eq!(a, EXCEPTION);
        assert_ne!(a, STACK_TRACE);

        // Empty names are not validated
        let empty = LogCategory::new("", ColorPair::default());
        assert!(empty.name.is_empty());
    }
}
