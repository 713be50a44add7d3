// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;

/// Strategy for generating contact names (one or two capitalized words).
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}( [A-Z][a-z]{1,10})?"
}

/// Strategy for generating phone numbers.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10,12}"
}

/// Strategy for generating addresses that match the email pattern.
pub fn valid_email_strategy() -> impl Strategy<Value = String> {
    ("[A-Za-z]", "[a-z0-9_.+]{1,12}", "[a-z0-9_]{1,10}", "[a-z]{2,3}")
        .prop_map(|(first, rest, domain, tld)| format!("{}{}@{}.{}", first, rest, domain, tld))
}

/// Strategy for generating strings with no `@`, which can never be an email.
pub fn no_at_sign_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._ -]{0,30}"
}

/// Strategy for generating valid `DD-MM-YYYY` birthdays.
pub fn birthday_strategy() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, 1900i32..=2100)
        .prop_map(|(day, month, year)| format!("{:02}-{:02}-{:04}", day, month, year))
}
