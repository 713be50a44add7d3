// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Field, ValidationError};

/// A phone number. No format is enforced; the value is stored as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Creates a phone number from raw input.
    pub fn new(input: &str) -> Self {
        Phone(input.to_string())
    }

    /// Returns the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    type Value = String;

    fn parse(input: &str) -> Result<String, ValidationError> {
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

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Phone {
    fn from(value: &str) -> Self {
        Phone::new(value)
    }
}
