//! Error types for taskpad.
//!
//! This module provides error handling following the thiserror pattern.
//! Validation failures (bad keystrokes, malformed numbers) never surface
//! here; they are handled locally by the session's re-prompt loops. What
//! remains is the fatal path: storage and terminal failures that propagate
//! to `main` and terminate the process.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for taskpad operations.
#[derive(Error, Debug)]
pub enum TaskpadError {
    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization of the todo file failed.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// The backing todo file is not a valid todo array.
    #[error("Invalid todo file: {path}: {reason}")]
    InvalidTodoFile {
        /// Path to the invalid file.
        path: PathBuf,
        /// Reason why the file is invalid.
        reason: String,
    },

    /// A mutation addressed an id that is not in the store.
    #[error("Todo not found: {id}")]
    TodoNotFound {
        /// The id that was not found.
        id: u64,
    },

    /// Terminal setup or input capture failed.
    #[error("Terminal error: {message}")]
    TerminalError {
        /// Human-readable error message.
        message: String,
    },

    /// Input stream closed before a full read completed.
    #[error("Input stream closed")]
    InputClosed,
}

impl TaskpadError {
    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new terminal error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::TerminalError {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SerializationError { .. } | Self::InvalidTodoFile { .. } => 65,
            Self::IoError { .. } => 74,
            _ => 1,
        }
    }
}

/// Result type alias for taskpad operations.
pub type Result<T> = std::result::Result<T, TaskpadError>;

impl From<std::io::Error> for TaskpadError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TaskpadError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}
