//! CLI Configuration

use std::path::PathBuf;

use addrbook_core::Directory;
use anyhow::Result;

/// Default snapshot file name inside the data directory.
pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory holding the snapshot.
    pub data_dir: PathBuf,
    /// Snapshot file name within `data_dir`.
    pub file_name: String,
}

impl CliConfig {
    /// Returns the path of the directory snapshot.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Loads the directory, or an empty one if nothing has been saved yet.
    pub fn open_directory(&self) -> Result<Directory> {
        Ok(Directory::open(&self.snapshot_path())?)
    }

    /// Saves the whole directory back to the snapshot file.
    pub fn save_directory(&self, directory: &Directory) -> Result<()> {
        directory.save_snapshot(&self.snapshot_path())?;
        Ok(())
    }
}
