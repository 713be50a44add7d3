// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Birthday countdown.

use chrono::{Datelike, NaiveDate};

use crate::field::Birthday;

/// Days remaining until a record's next birthday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BirthdayCountdown {
    /// The record has no birthday set.
    Unknown,
    /// The next birthday is this many days away (always at least 1).
    InDays(i64),
}

impl BirthdayCountdown {
    /// Computes the countdown relative to `today`.
    ///
    /// A birthday falling on `today` counts towards next year's occurrence,
    /// so the result is 365 or 366 rather than 0.
    pub fn compute(birthday: Option<&Birthday>, today: NaiveDate) -> Self {
        let Some(birthday) = birthday else {
            return BirthdayCountdown::Unknown;
        };
        let Some(this_year) = birthday.occurrence_in(today.year()) else {
            return BirthdayCountdown::Unknown;
        };

        let delta = (this_year - today).num_days();
        if delta > 0 {
            return BirthdayCountdown::InDays(delta);
        }

        match birthday.occurrence_in(today.year() + 1) {
            Some(next_year) => BirthdayCountdown::InDays((next_year - today).num_days()),
            None => BirthdayCountdown::Unknown,
        }
    }

    /// Returns the number of days, if known.
    pub fn days(&self) -> Option<i64> {
        match self {
            BirthdayCountdown::Unknown => None,
            BirthdayCountdown::InDays(days) => Some(*days),
        }
    }

    /// Renders the countdown as a sentence about `name`.
    pub fn describe(&self, name: &str) -> String {
        match self {
            BirthdayCountdown::Unknown => format!("{}'s birthday is unknown", name),
            BirthdayCountdown::InDays(days) => {
                format!("{}'s birthday will be in {} days", name, days)
            }
        }
    }
}
