//! Panic reporting

use std::any::Any;
use std::panic::{self, Location};
use std::sync::Arc;

use super::logger::{lock_held_by_current_thread, Logger};
use crate::category::PANIC;

/// Route panics through `logger`
///
/// Replaces the current panic hook. Each panic is logged as a `Panic` line
/// (payload and source location) followed by one `Stack Trace` line per frame.
///
/// A panic raised while this thread is writing a record (for example by the
/// console writer) goes to standard error instead, since the logger lock is
/// still held.
pub fn install_panic_hook(logger: Arc<Logger>) {
    panic::set_hook(Box::new(move |info| {
        let message = panic_message(info.payload(), info.location());
        if lock_held_by_current_thread() {
            eprintln!("{}: {}", PANIC.name, message);
            return;
        }
        logger.report(&message, &PANIC);
    }));
}

fn panic_message(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let text = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("Box<dyn Any>");

    match location {
        Some(location) => format!(
            "{} ({}:{}:{})",
            text,
            location.file(),
            location.line(),
            location.column()
        ),
        None => text.to_string(),
    }
}
