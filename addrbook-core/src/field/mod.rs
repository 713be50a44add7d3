// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Field Types
//!
//! A field holds exactly one typed value. Construction and reassignment both
//! go through the type's `parse` step, so a stored value is always valid and
//! a rejected assignment leaves the previous value in place.

mod birthday;
mod email;
mod name;
mod phone;
mod validation;

use std::fmt;

pub use birthday::Birthday;
pub use email::Email;
pub use name::Name;
pub use phone::Phone;
pub use validation::{ValidationError, BIRTHDAY_FORMAT};

/// A single validated, typed, displayable value slot.
pub trait Field: fmt::Display {
    /// The stored representation.
    type Value;

    /// Validates raw input and produces the value to store.
    fn parse(input: &str) -> Result<Self::Value, ValidationError>;

    /// Returns the current value.
    fn value(&self) -> &Self::Value;

    /// Replaces the value if `input` passes validation.
    fn set_value(&mut self, input: &str) -> Result<(), ValidationError>;
}
