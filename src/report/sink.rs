//! Informational side channel of the table builder.
//!
//! The builder never logs directly; it reports through an [`InfoSink`] so
//! callers can route the messages (or record them in tests).

#[cfg(test)]
use std::cell::RefCell;

/// Receiver for informational messages emitted while building tables.
pub trait InfoSink {
    fn info(&self, message: &str);
}

/// Forwards messages to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl InfoSink for LogSink {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// Keeps every message in memory, in emission order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

#[cfg(test)]
impl InfoSink for RecordingSink {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
