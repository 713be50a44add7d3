// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Paginated listing.

use indexmap::map::Values;

use crate::record::Record;

/// Lazily yields formatted blocks of at most `size` records each.
///
/// Created by [`Directory::pages`](super::Directory::pages).
pub struct Pages<'a> {
    records: Values<'a, String, Record>,
    size: usize,
}

impl<'a> Pages<'a> {
    pub(super) fn new(records: Values<'a, String, Record>, size: usize) -> Self {
        Pages { records, size }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.size == 0 {
            return None;
        }

        let block: String = self
            .records
            .by_ref()
            .take(self.size)
            .map(page_line)
            .collect();

        if block.is_empty() {
            None
        } else {
            Some(block)
        }
    }
}

/// `<name> (B-day: <birthday>): <phone, phone>`
fn page_line(record: &Record) -> String {
    format!(
        "{} (B-day: {}): {}\n",
        record.name(),
        record.birthday_text(),
        record.joined_phones(", ")
    )
}
