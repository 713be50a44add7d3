// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Field, ValidationError};

/// The required display name of a record; also its directory key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Creates a name. Any non-empty string is accepted as given.
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        Ok(Name(Self::parse(input)?))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    type Value = String;

    fn parse(input: &str) -> Result<String, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptyName);
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

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
