//! Logging: the `Log` trait and its console + file implementation

mod traits;
mod noop;
mod console;
mod file;
mod logger;
mod panic;

pub use traits::{Log, LoggerExt, BoxedLogger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::{ConsoleWriter, MemoryConsole};
pub use logger::Logger;
pub use panic::install_panic_hook;
