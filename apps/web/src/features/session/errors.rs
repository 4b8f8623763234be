//! Dismissible user-facing error messages.

use crate::app_lib::interceptor::{ErrorLevel, ErrorMessages};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorEntry {
    pub message: String,
    pub level: ErrorLevel,
}

/// Ordered list of pending messages. Entries are trimmed and never blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorList {
    entries: Vec<ErrorEntry>,
}

impl ErrorList {
    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends one message; blank messages are ignored.
    pub fn push(&mut self, level: ErrorLevel, message: &str) {
        let message = message.trim();
        if message.is_empty() {
            return;
        }
        self.entries.push(ErrorEntry {
            message: message.to_string(),
            level,
        });
    }

    pub fn extend(&mut self, level: ErrorLevel, messages: &ErrorMessages) {
        for message in messages.iter() {
            self.push(level, message);
        }
    }

    /// Removes the entry at `index`; out-of-range indexes are ignored.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }
}
