// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Addrbook Core Library
//!
//! A personal contact directory: validated fields, records built from them,
//! and a name-keyed directory with search, paging and snapshot persistence.

pub mod directory;
pub mod error;
pub mod field;
pub mod record;
pub mod vcard;

pub use directory::{Directory, Pages, Snapshot, SNAPSHOT_VERSION};
pub use error::{BookError, BookResult, ErrorKind};
pub use field::{Birthday, Email, Field, Name, Phone, ValidationError, BIRTHDAY_FORMAT};
pub use record::{BirthdayCountdown, ContactInfo, PhoneUpdate, Record};
pub use vcard::VCardError;
