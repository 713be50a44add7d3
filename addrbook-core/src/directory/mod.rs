// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory Module
//!
//! The name-keyed collection of all records. Keys always equal the name of
//! the record stored under them; the mapping is only mutated through the
//! operations below, and a record's name has no setter.

mod pages;
pub mod snapshot;

pub use pages::Pages;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{BookError, BookResult};
use crate::field::Phone;
use crate::record::{PhoneUpdate, Record};

/// All records, keyed by name, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, Record>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the snapshot at `path`, or starts empty if there is none yet.
    pub fn open(path: &Path) -> BookResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no snapshot found, starting with an empty directory");
            return Ok(Self::new());
        }
        let mut directory = Self::new();
        directory.load_snapshot(path)?;
        Ok(directory)
    }

    /// Inserts a record, replacing any record with the same name.
    ///
    /// A replaced record keeps its position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "adding record");
        self.records.insert(key, record);
    }

    /// Removes the record stored under `record`'s name, if any.
    pub fn remove_record(&mut self, record: &Record) {
        self.remove(record.name().as_str());
    }

    /// Removes and returns the record stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!(name, "removed record");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to a record. The name cannot be changed through it.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Like [`get_mut`](Self::get_mut) but failing with a lookup error.
    pub fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// `Name: <n>; Birthday: <b>; Phone: <p, p>` for one record.
    pub fn show_one(&self, name: &str) -> BookResult<String> {
        let record = self
            .get(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        Ok(format!(
            "Name: {}; Birthday: {}; Phone: {}",
            record.name(),
            record.birthday_text(),
            record.joined_phones(", ")
        ))
    }

    /// One line per record, including email. Empty when there are no records.
    pub fn show_all(&self) -> String {
        self.records
            .values()
            .map(|record| {
                format!(
                    "Name: {}; Birthday: {}; Phone: {} Email: {}",
                    record.name(),
                    record.birthday_text(),
                    record.joined_phones(", "),
                    record.email_text()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Changes a phone on the named record. Does nothing if the name is absent.
    pub fn change_record(&mut self, name: &str, old: &Phone, new: Phone) -> Option<PhoneUpdate> {
        self.records
            .get_mut(name)
            .map(|record| record.change_phone(old, new))
    }

    /// Case-insensitive substring search over names, then phone values.
    ///
    /// Each matching record contributes one line; no match yields an empty string.
    pub fn search(&self, query: &str) -> String {
        let needle = query.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&needle)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().to_lowercase().contains(&needle))
            })
            .map(|record| {
                format!(
                    "Name: {} Birthday: {} Phone: {}\n",
                    record.name(),
                    record.birthday_text(),
                    record.joined_phones(",")
                )
            })
            .collect()
    }

    /// A single block listing the first `n` records (clamped to the record count).
    pub fn iterate(&self, n: usize) -> String {
        self.pages(n).next().unwrap_or_default()
    }

    /// Lazily pages through all records, `size` per block.
    pub fn pages(&self, size: usize) -> Pages<'_> {
        Pages::new(self.records.values(), size)
    }

    /// Replaces the whole directory with the snapshot at `path`.
    ///
    /// Returns the number of records loaded. On error the directory is unchanged.
    pub fn load_snapshot(&mut self, path: &Path) -> BookResult<usize> {
        let loaded = Snapshot::read(path)?.into_directory()?;
        *self = loaded;
        info!(path = %path.display(), records = self.len(), "loaded snapshot");
        Ok(self.len())
    }

    /// Writes the whole directory to `path`.
    pub fn save_snapshot(&self, path: &Path) -> BookResult<()> {
        Snapshot::capture(self).write(path)
    }
}
