// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared helpers and strategies used across test modules.

#![allow(dead_code)]

pub mod strategies;

use addrbook_core::{Birthday, Email, Name, Phone, Record};
use chrono::NaiveDate;

/// Builds a record from plain strings, panicking on invalid input.
pub fn record(name: &str, phones: &[&str], birthday: Option<&str>, email: Option<&str>) -> Record {
    let mut record = Record::new(Name::new(name).expect("valid name"));
    for phone in phones {
        record.add_phone(Phone::new(phone));
    }
    if let Some(birthday) = birthday {
        record.add_birthday(Birthday::new(birthday).expect("valid birthday"));
    }
    if let Some(email) = email {
        record.add_email(Email::new(email).expect("valid email"));
    }
    record
}

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
