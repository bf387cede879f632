//! Call stack capture
//!
//! The [`StackCapturer`] trait hides how frames are collected. The default
//! capturer is picked once per process: [`SymbolStackCapturer`] when symbol
//! names resolve, otherwise [`RawStackCapturer`].

mod traits;
mod noop;
mod raw;
mod symbol;

use once_cell::sync::Lazy;

pub use traits::{StackCapturer, BoxedStackCapturer, SharedStackCapturer, MAX_FRAMES};
pub use noop::NoOpStackCapturer;
pub use raw::RawStackCapturer;
pub use symbol::SymbolStackCapturer;

static SYMBOLS_AVAILABLE: Lazy<bool> = Lazy::new(symbol::symbols_resolve);

/// The best capturer available in this process
pub fn default_capturer() -> BoxedStackCapturer {
    if *SYMBOLS_AVAILABLE {
        Box::new(SymbolStackCapturer::new())
    } else {
        Box::new(RawStackCapturer::new())
    }
}

/// Capture the current stack with the default capturer
pub fn capture_stack() -> Vec<String> {
    default_capturer().capture()
}
