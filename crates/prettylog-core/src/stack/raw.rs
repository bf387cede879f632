//! Stack capturer backed by `std::backtrace`

use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic::{self, AssertUnwindSafe};

use super::traits::{trim_capture_frames, StackCapturer, COLLECT_LIMIT};

/// Returns the standard library's rendering of each frame verbatim
///
/// Used where symbol resolution through the unwinder is unavailable. The
/// frame index prefix is dropped and a frame's `at <file>:<line>` line is
/// appended to it, so each entry is one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawStackCapturer;

impl RawStackCapturer {
    pub fn new() -> Self {
        Self
    }
}

impl StackCapturer for RawStackCapturer {
    fn name(&self) -> &str {
        "raw"
    }

    fn capture(&self) -> Vec<String> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            let backtrace = Backtrace::force_capture();
            if backtrace.status() != BacktraceStatus::Captured {
                return Vec::new();
            }
            trim_capture_frames(split_frames(&backtrace.to_string()), "RawStackCapturer as")
        }))
        .unwrap_or_default()
    }
}

/// Split a rendered backtrace into one string per frame
fn split_frames(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();

    for line in rendered.lines() {
        let line = line.trim();
        if let Some(description) = frame_description(line) {
            if frames.len() == COLLECT_LIMIT {
                break;
            }
            frames.push(description.to_string());
        } else if let Some(current) = frames.last_mut() {
            if line.starts_with("at ") {
                current.push(' ');
                current.push_str(line);
            }
        }
    }

    frames
}

/// `"12: some::symbol"` -> `Some("some::symbol")`
fn frame_description(line: &str) -> Option<&str> {
    let (index, rest) = line.split_once(": ")?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::MAX_FRAMES;

    const RENDERED: &str = "   0: app::worker::run
             at ./src/worker.rs:42:9
   1: app::main
             at ./src/main.rs:7:5
   2: core::ops::function::FnOnce::call_once
   3: <unknown>
note: Some details are omitted, run with `RUST_BACKTRACE=full` for a verbose backtrace.
";

    #[test]
    fn test_split_frames() {
        let frames = split_frames(RENDERED);
        assert_eq!(
            frames,
            vec![
                "app::worker::run at ./src/worker.rs:42:9",
                "app::main at ./src/main.rs:7:5",
                "core::ops::function::FnOnce::call_once",
                "<unknown>",
            ]
        );
    }

    #[test]
    fn test_split_frames_truncates() {
        let rendered: String = (0..100).map(|i| format!("  {}: frame_{}\n", i, i)).collect();
        let frames = split_frames(&rendered);
        assert_eq!(frames.len(), COLLECT_LIMIT);
        assert_eq!(frames[0], "frame_0");

        let frames = trim_capture_frames(frames, "RawStackCapturer as");
        assert_eq!(frames.len(), MAX_FRAMES);
        assert_eq!(frames[MAX_FRAMES - 1], "frame_63");
    }

    #[test]
    fn test_split_frames_ignores_noise() {
        assert!(split_frames("").is_empty());
        assert!(split_frames("disabled backtrace").is_empty());
        assert!(split_frames("note: at nothing").is_empty());
    }

    #[test]
    fn test_capture_is_bounded() {
        let frames = RawStackCapturer::new().capture();
        assert!(frames.len() <= MAX_FRAMES);
    }

    #[test]
    fn test_capture_skips_own_frames() {
        let frames = RawStackCapturer::new().capture();
        assert!(frames.iter().all(|f| !f.contains("RawStackCapturer as")));
    }
}
