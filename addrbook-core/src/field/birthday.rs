// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::validation::{BIRTHDAY_FORMAT, BIRTHDAY_PATTERN};
use super::{Field, ValidationError};

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// A birthday, parsed from and displayed as `DD-MM-YYYY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a `DD-MM-YYYY` birthday.
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        Ok(Birthday(Self::parse(input)?))
    }

    /// Wraps an already-constructed calendar date.
    ///
    /// The year must fit the four-digit `DD-MM-YYYY` form, 0000 through 9999.
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        if !YEAR_RANGE.contains(&date.year()) {
            return Err(ValidationError::InvalidBirthday(date.to_string()));
        }
        Ok(Birthday(date))
    }

    /// Returns the date this birthday falls on in `year`.
    ///
    /// 29 February maps to 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn parse(input: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(input) {
            return Err(ValidationError::InvalidBirthday(input.to_string()));
        }
        NaiveDate::parse_from_str(input, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(input.to_string()))
    }

    fn value(&self) -> &NaiveDate {
        &self.0
    }

    fn set_value(&mut self, input: &str) -> Result<(), ValidationError> {
        self.0 = Self::parse(input)?;
        Ok(())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Birthday::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
