// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record Module
//!
//! One contact: a required name, any number of phones, and an optional
//! birthday and email.

mod countdown;

pub use countdown::BirthdayCountdown;

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::{Birthday, Email, Name, Phone};

/// Placeholder used when a formatted line has no birthday or email.
pub(crate) const UNKNOWN: &str = "unknown";

/// Outcome of a phone mutation, carrying the confirmation text via `Display`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhoneUpdate {
    Added(Phone),
    Changed { old: Phone, new: Phone },
    Removed { phone: Phone, name: Name },
    NotFound(Phone),
}

impl PhoneUpdate {
    /// Returns true if the record was modified.
    pub fn is_applied(&self) -> bool {
        !matches!(self, PhoneUpdate::NotFound(_))
    }
}

impl fmt::Display for PhoneUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneUpdate::Added(phone) => write!(f, "Phone {} was added successfully", phone),
            PhoneUpdate::Changed { old, new } => {
                write!(f, "Phone {} was successfully changed to {}", old, new)
            }
            PhoneUpdate::Removed { phone, name } => {
                write!(f, "Phone {} was successfully removed from {}", phone, name)
            }
            PhoneUpdate::NotFound(phone) => {
                write!(f, "Phone number '{}' was not found in the record", phone)
            }
        }
    }
}

/// Read-only view of a record for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub name: String,
    /// Phone values joined with `", "`.
    pub phones: String,
    pub birthday: Option<Birthday>,
    pub email: Option<Email>,
}

/// A single contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
}

impl Record {
    /// Creates a record with only a name.
    pub fn new(name: Name) -> Self {
        Record {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
        }
    }

    /// Adds an initial phone.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    /// Sets an initial birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Sets an initial email.
    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) -> PhoneUpdate {
        debug!(name = %self.name, phone = %phone, "adding phone");
        self.phones.push(phone.clone());
        PhoneUpdate::Added(phone)
    }

    /// Replaces the first phone equal to `old`.
    ///
    /// The matching phone is removed and `new` is appended at the end.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> PhoneUpdate {
        match self.phones.iter().position(|phone| phone == old) {
            Some(index) => {
                let old = self.phones.remove(index);
                debug!(name = %self.name, old = %old, new = %new, "changing phone");
                self.phones.push(new.clone());
                PhoneUpdate::Changed { old, new }
            }
            None => PhoneUpdate::NotFound(old.clone()),
        }
    }

    /// Removes the first phone whose value equals `value`.
    pub fn remove_phone(&mut self, value: &str) -> PhoneUpdate {
        let target = Phone::new(value);
        match self.phones.iter().position(|phone| *phone == target) {
            Some(index) => {
                let phone = self.phones.remove(index);
                debug!(name = %self.name, phone = %phone, "removed phone");
                PhoneUpdate::Removed {
                    phone,
                    name: self.name.clone(),
                }
            }
            None => PhoneUpdate::NotFound(target),
        }
    }

    /// Sets or overwrites the birthday.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Sets or overwrites the email.
    pub fn add_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> BirthdayCountdown {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> BirthdayCountdown {
        BirthdayCountdown::compute(self.birthday.as_ref(), today)
    }

    pub fn contact_info(&self) -> ContactInfo {
        ContactInfo {
            name: self.name.to_string(),
            phones: self.joined_phones(", "),
            birthday: self.birthday,
            email: self.email.clone(),
        }
    }

    pub(crate) fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub(crate) fn birthday_text(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub(crate) fn email_text(&self) -> &str {
        self.email.as_ref().map(Email::as_str).unwrap_or(UNKNOWN)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} Phone: {}", self.name, self.joined_phones(", "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, " Birthday: {}", birthday)?;
        }
        write!(
            f,
            " Email: {}",
            self.email.as_ref().map(Email::as_str).unwrap_or("")
        )
    }
}
