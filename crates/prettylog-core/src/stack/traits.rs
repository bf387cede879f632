//! Stack capturer trait definition

use std::sync::Arc;

/// Maximum number of frames any capturer returns
pub const MAX_FRAMES: usize = 64;

/// Captures the current call stack as human-readable frame descriptions
///
/// Implementations:
/// - `SymbolStackCapturer`: resolves symbol names and addresses
/// - `RawStackCapturer`: the standard library's rendered backtrace, verbatim
/// - `NoOpStackCapturer`: captures nothing
///
/// Frames are ordered innermost (most recent call) first and never number
/// more than [`MAX_FRAMES`]. The first frame is the caller of `capture`.
/// Capturing must not fail or panic; resolution problems degrade to less
/// informative frame text.
pub trait StackCapturer: Send + Sync {
    /// Human-readable name of this capturer
    fn name(&self) -> &str;

    /// Capture the calling thread's stack
    fn capture(&self) -> Vec<String>;
}

/// Type alias for a boxed capturer
pub type BoxedStackCapturer = Box<dyn StackCapturer>;

/// Type alias for an Arc-wrapped capturer
pub type SharedStackCapturer = Arc<dyn StackCapturer>;

/// Frames collected before the capturer's own frames are trimmed
pub(crate) const COLLECT_LIMIT: usize = MAX_FRAMES + 32;

/// Drop the frames belonging to the capture call itself
///
/// Everything up to and including the first frame naming `capturer` (outside
/// a closure) is removed. If no such frame is found, for example when symbols
/// are stripped, the frames are kept as they are. The result is capped at
/// [`MAX_FRAMES`].
pub(crate) fn trim_capture_frames(mut frames: Vec<String>, capturer: &str) -> Vec<String> {
    let own_frame = frames
        .iter()
        .position(|frame| frame.contains(capturer) && !frame.contains("{{closure}}"));
    if let Some(index) = own_frame {
        frames.drain(..=index);
    }
    frames.truncate(MAX_FRAMES);
    frames
}
