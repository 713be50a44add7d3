// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Snapshot persistence.
//!
//! The whole directory is written as one JSON document and read back in
//! full; there is no incremental update.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Directory;
use crate::error::{BookError, BookResult};
use crate::record::Record;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// Records in directory iteration order.
    pub records: Vec<Record>,
}

impl Snapshot {
    /// Captures the full contents of a directory.
    pub fn capture(directory: &Directory) -> Self {
        Snapshot {
            version: SNAPSHOT_VERSION,
            records: directory.records().cloned().collect(),
        }
    }

    /// Rebuilds a directory. Later records win over earlier ones with the same name.
    pub fn into_directory(self) -> BookResult<Directory> {
        if self.version != SNAPSHOT_VERSION {
            return Err(BookError::UnsupportedVersion(self.version));
        }
        let mut directory = Directory::new();
        for record in self.records {
            directory.add_record(record);
        }
        Ok(directory)
    }

    /// Reads a snapshot file. Every field is revalidated while decoding.
    pub fn read(path: &Path) -> BookResult<Self> {
        let bytes = fs::read(path)?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Serialization(e.to_string()))?;
        debug!(path = %path.display(), records = snapshot.records.len(), "read snapshot");
        Ok(snapshot)
    }

    /// Writes a snapshot file.
    ///
    /// Content goes to a sibling temporary file which is then renamed over
    /// `path`, so readers see either the old or the new snapshot. The
    /// temporary file is removed if either step fails.
    pub fn write(&self, path: &Path) -> BookResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(self)
            .map_err(|e| BookError::Serialization(e.to_string()))?;

        let temp_path = temp_path_for(path);
        if let Err(err) = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        info!(path = %path.display(), records = self.records.len(), "saved snapshot");
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}
