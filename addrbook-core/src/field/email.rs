// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::EMAIL_PATTERN;
use super::{Field, ValidationError};

/// An email address matching `local@domain.tld`, with a 2-3 letter lowercase suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates an email address, rejecting input that does not match the pattern.
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        Ok(Email(Self::parse(input)?))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Email {
    type Value = String;

    fn parse(input: &str) -> Result<String, ValidationError> {
        if !EMAIL_PATTERN.is_match(input) {
            return Err(ValidationError::InvalidEmail(input.to_string()));
        }
        Ok(input.to_string())
    }

    fn value(&self) -> &String {
        &self.0
    }

    fn set_value(&mut self, input: &str) -> Result<(), ValidationError> {
        self.0 = Self::parse(input)?;
        Ok(())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
