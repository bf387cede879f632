//! Console writers

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination of console lines
pub type ConsoleWriter = Box<dyn Write + Send>;

/// Standard output, the default console
pub fn stdout() -> ConsoleWriter {
    Box::new(io::stdout())
}

/// An in-memory console that can be cloned and read back
///
/// Clones share one buffer, so a clone handed to a `Logger` can be inspected
/// through the original.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_shares_buffer() {
        let console = MemoryConsole::new();
        let mut writer = console.clone();
        writeln!(writer, "first").unwrap();
        writeln!(writer, "second").unwrap();

        assert_eq!(console.contents(), "first\nsecond\n");
        assert_eq!(console.lines(), vec!["first", "second"]);

        console.clear();
        assert!(console.contents().is_empty());
    }
}
