//! vCard Import/Export Commands

use std::fs;
use std::path::Path;

use addrbook_core::vcard;
use addrbook_core::BookError;
use anyhow::{Context, Result};

use crate::config::CliConfig;
use crate::display;

/// Writes every contact to a vCard file.
pub fn export(config: &CliConfig, output: &Path) -> Result<()> {
    let directory = config.open_directory()?;
    let text = vcard::export_directory(&directory);

    fs::write(output, text).with_context(|| format!("Failed to write {}", output.display()))?;

    display::success(&format!(
        "Exported {} contact(s) to {}",
        directory.len(),
        output.display()
    ));
    Ok(())
}

/// Reads contacts from a vCard file. Existing contacts with the same name are replaced.
pub fn import(config: &CliConfig, input: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let records = vcard::import_vcards(&text).map_err(BookError::from)?;

    let mut directory = config.open_directory()?;
    let count = records.len();
    for record in records {
        directory.add_record(record);
    }
    config.save_directory(&directory)?;

    display::success(&format!("Imported {} contact(s)", count));
    Ok(())
}
