// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for directory operations, plus the coarse `ErrorKind`
//! a front end matches on to pick a user-facing message.

use thiserror::Error;

use crate::field::ValidationError;
use crate::vcard::VCardError;

/// Result alias for addrbook operations.
pub type BookResult<T> = Result<T, BookError>;

/// Unified error type for addrbook operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field rejected its input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A command was invoked without a required positional input.
    #[error("missing argument: {0}")]
    MissingArgument(String),

    /// No record exists under the given name.
    #[error("contact not found: {0}")]
    NotFound(String),

    /// An input had the wrong shape, e.g. text where a count was expected.
    #[error("expected {expected}, got '{found}'")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// Snapshot file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot contents could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Snapshot was written by an incompatible version.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    /// vCard import failed.
    #[error("vCard error: {0}")]
    VCard(#[from] VCardError),
}

/// The error categories a front end distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Birthday or email input did not match its pattern.
    Format,
    /// Not enough positional inputs.
    MissingArgument,
    /// Referenced name does not exist.
    Lookup,
    /// Input of the wrong shape.
    TypeMismatch,
    /// Persistence failed.
    Storage,
}

impl From<&ValidationError> for ErrorKind {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => ErrorKind::MissingArgument,
            ValidationError::InvalidBirthday(_) | ValidationError::InvalidEmail(_) => {
                ErrorKind::Format
            }
        }
    }
}

impl BookError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::Validation(err) => err.into(),
            BookError::MissingArgument(_) => ErrorKind::MissingArgument,
            BookError::NotFound(_) => ErrorKind::Lookup,
            BookError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            BookError::Io(_) | BookError::Serialization(_) | BookError::UnsupportedVersion(_) => {
                ErrorKind::Storage
            }
            BookError::VCard(VCardError::MissingName) => ErrorKind::MissingArgument,
            BookError::VCard(VCardError::Validation(err)) => err.into(),
            BookError::VCard(VCardError::InvalidFormat(_)) => ErrorKind::Format,
        }
    }

    /// Shorthand for a missing positional input.
    pub fn missing(what: &str) -> Self {
        BookError::MissingArgument(what.to_string())
    }
}
