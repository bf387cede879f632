//! Symbol-resolving stack capturer

use std::panic::{self, AssertUnwindSafe};

use super::traits::{trim_capture_frames, StackCapturer, COLLECT_LIMIT};

/// Walks the stack and resolves every return address to a symbol
///
/// Each frame renders as `<symbol> [0x<address>]`. Frames whose address does
/// not resolve render as `<unknown> [0x<ip>]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolStackCapturer;

impl SymbolStackCapturer {
    pub fn new() -> Self {
        Self
    }
}

impl StackCapturer for SymbolStackCapturer {
    fn name(&self) -> &str {
        "symbol"
    }

    fn capture(&self) -> Vec<String> {
        let mut frames = Vec::with_capacity(COLLECT_LIMIT);

        // A panic inside the unwinder keeps whatever was already collected
        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            backtrace::trace(|frame| {
                frames.push(describe_frame(frame));
                frames.len() < COLLECT_LIMIT
            });
        }));

        trim_capture_frames(frames, "SymbolStackCapturer as")
    }
}

/// `<symbol> [0x<function start>]`, addresses as loaded in this process
fn describe_frame(frame: &backtrace::Frame) -> String {
    let ip = frame.ip() as usize;
    let address = match frame.symbol_address() as usize {
        0 => ip,
        start => start,
    };
    let mut name = None;

    backtrace::resolve_frame(frame, |symbol| {
        if name.is_none() {
            name = symbol.name().map(|n| n.to_string());
        }
    });

    match name {
        Some(name) => format!("{} [{:#x}]", name, address),
        None => format!("<unknown> [{:#x}]", ip),
    }
}

/// Whether symbol names resolve in this process
pub(crate) fn symbols_resolve() -> bool {
    let mut resolved = false;
    let mut walked = 0;

    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                resolved |= symbol.name().is_some();
            });
            walked += 1;
            !resolved && walked < 8
        });
    }));

    resolved
}
