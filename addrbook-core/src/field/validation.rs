// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Validation
//!
//! Input patterns and the error type raised when a field rejects a value.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Text format for birthdays, both on input and on display.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// Strict `DD-MM-YYYY` shape checked before calendar parsing.
pub(crate) static BIRTHDAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("birthday pattern compiles")
});

/// Local part starting with a letter, a word-character domain and a 2-3 letter suffix.
pub(crate) static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][\w+.]+@\w+\.[a-z]{2,3}$").expect("email pattern compiles")
});

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Birthday must be in 'DD-MM-YYYY' format, got '{0}'")]
    InvalidBirthday(String),
    #[error("Invalid email format: '{0}'")]
    InvalidEmail(String),
}
