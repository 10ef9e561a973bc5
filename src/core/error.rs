// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for clustercodec.
//!
//! Every failure in this crate falls into one of a few buckets:
//! - Address tokens that do not match the `host:port` grammar
//! - Hosts that cannot be resolved to a network address
//! - Documents whose fields violate a codec's validation rules
//! - Generic JSON or configuration failures from the underlying libraries

use std::cell::RefCell;

use thiserror::Error;

/// Errors that can occur while encoding or decoding cluster documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input text does not match the expected address-token grammar
    #[error("Malformed address '{input}': {reason}")]
    Format {
        /// The offending token
        input: String,
        /// What is wrong with it
        reason: String,
    },

    /// A host or address string could not be resolved
    #[error("Cannot resolve '{host}': {reason}")]
    Resolution {
        /// Host or address that failed to resolve
        host: String,
        /// Resolver error message
        reason: String,
    },

    /// A document violates a codec's field rules
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the violated rule
        message: String,
    },

    /// JSON parse or conversion error
    #[error("JSON error in {context}: {message}")]
    Json {
        /// What was being processed
        context: String,
        /// Error message
        message: String,
    },

    /// Invalid mapper configuration
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl CodecError {
    /// Create a format error.
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a resolution error.
    pub fn resolution(host: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::Resolution {
            host: host.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CodecError::Validation {
            message: message.into(),
        }
    }

    /// Create a JSON error.
    pub fn json(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Json {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CodecError::Config {
            message: message.into(),
        }
    }

    /// Check if this is a format error.
    pub fn is_format(&self) -> bool {
        matches!(self, CodecError::Format { .. })
    }

    /// Check if this is a resolution error.
    pub fn is_resolution(&self) -> bool {
        matches!(self, CodecError::Resolution { .. })
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, CodecError::Validation { .. })
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Format { input, reason } => {
                vec![("input", input.clone()), ("reason", reason.clone())]
            }
            CodecError::Resolution { host, reason } => {
                vec![("host", host.clone()), ("reason", reason.clone())]
            }
            CodecError::Validation { message } => vec![("message", message.clone())],
            CodecError::Json { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::Config { message } => vec![("message", message.clone())],
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::json("document", err.to_string())
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        CodecError::config(err.to_string())
    }
}

/// Result type for clustercodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

thread_local! {
    /// Last codec error raised from inside a serde `Deserialize` impl.
    static LAST_DE_ERROR: RefCell<Option<CodecError>> = const { RefCell::new(None) };
}

/// Convert a codec error into a serde error, remembering the typed error
/// so [`take_recorded_error`] can recover it once serde unwinds.
pub fn de_error<E: serde::de::Error>(err: CodecError) -> E {
    let custom = E::custom(&err);
    LAST_DE_ERROR.with(|slot| *slot.borrow_mut() = Some(err));
    custom
}

/// Forget any error recorded on this thread.
pub(crate) fn clear_recorded_error() {
    LAST_DE_ERROR.with(|slot| slot.borrow_mut().take());
}

/// Take the recorded error if it is the one `serde_message` reports.
///
/// serde may swallow a codec error and fail later for an unrelated reason,
/// so the recorded error is only returned when its text appears in the
/// final message.
pub(crate) fn take_recorded_error(serde_message: &str) -> Option<CodecError> {
    LAST_DE_ERROR
        .with(|slot| slot.borrow_mut().take())
        .filter(|err| serde_message.contains(&err.to_string()))
}
