//! Error types
//!
//! Almost every operation in the catalog is total: lookups return `Option`
//! and empty result sets are normal values. The errors below cover the few
//! places that can actually fail.

use std::io;
use thiserror::Error;

use crate::models::BookId;

/// Message shown when a clipboard write fails
pub const CLIPBOARD_FAILED_MESSAGE: &str = "Unable to copy ISBN. Browser blocked clipboard.";

/// Errors raised by catalog mutations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// A record with this id is already in the catalog
    #[error("A book with id '{id}' already exists")]
    DuplicateId { id: BookId },
}

/// Errors raised while writing to the system clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard tool could be found on this system
    #[error("No clipboard tool available")]
    Unavailable,

    /// The clipboard tool could not be started or written to
    #[error("Clipboard tool '{tool}' failed: {source}")]
    Io {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The clipboard tool exited unsuccessfully
    #[error("Clipboard tool '{tool}' exited with status {status}")]
    ExitStatus { tool: String, status: String },
}

impl ClipboardError {
    /// Classify an I/O error from spawning a clipboard tool
    ///
    /// A missing executable means the tool is simply not installed.
    pub fn from_io(error: io::Error, tool: impl Into<String>) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => ClipboardError::Unavailable,
            _ => ClipboardError::Io {
                tool: tool.into(),
                source: error,
            },
        }
    }

    /// The notice shown to the user for any clipboard failure
    pub fn user_message(&self) -> &'static str {
        CLIPBOARD_FAILED_MESSAGE
    }
}
