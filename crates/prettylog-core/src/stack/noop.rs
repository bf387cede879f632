//! No-op stack capturer

use super::traits::StackCapturer;

/// A capturer that returns no frames
///
/// Useful when stack traces are unwanted, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpStackCapturer;

impl NoOpStackCapturer {
    pub fn new() -> Self {
        Self
    }
}

impl StackCapturer for NoOpStackCapturer {
    fn name(&self) -> &str {
        "noop"
    }

    fn capture(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_capturer() {
        assert!(NoOpStackCapturer::new().capture().is_empty());
    }
}
