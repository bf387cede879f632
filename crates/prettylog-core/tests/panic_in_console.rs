use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use prettylog_core::{
    install_panic_hook, ColorPair, Log, LogCategory, Logger, MemoryConsole, NoOpStackCapturer,
    Settings,
};

/// Panics on its first write, then behaves
struct FlakyConsole {
    inner: MemoryConsole,
    failed: Arc<AtomicBool>,
}

impl Write for FlakyConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            panic!("console unavailable");
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_panic_inside_console_write_does_not_hang() {
    let console = MemoryConsole::new();
    let flaky = FlakyConsole {
        inner: console.clone(),
        failed: Arc::new(AtomicBool::new(false)),
    };
    let logger = Arc::new(
        Logger::with_console(Settings::new().with_file_logging(false), flaky)
            .with_capturer(NoOpStackCapturer::new()),
    );
    install_panic_hook(Arc::clone(&logger));

    let (tx, rx) = mpsc::channel();
    let worker = Arc::clone(&logger);
    thread::spawn(move || {
        let info = LogCategory::new("Info", ColorPair::default());
        let first = panic::catch_unwind(AssertUnwindSafe(|| worker.log("first", &info)));
        worker.log("second", &info);
        let _ = tx.send(first.is_err());
    });

    let outcome = rx.recv_timeout(Duration::from_secs(10));
    let _ = panic::take_hook();

    assert_eq!(outcome, Ok(true), "log call did not return");
    assert_eq!(console.lines(), vec!["\x1b[37mInfo: second\x1b[0m"]);
}
