//! Contacts Command
//!
//! One-shot operations: each loads the snapshot, applies a single change or
//! query, and saves again if anything changed.

use addrbook_core::{Birthday, BookError, Email, Name, Phone, Record};
use anyhow::Result;

use crate::config::CliConfig;
use crate::display;

/// Creates a contact, or extends an existing one with the given values.
pub fn add(
    config: &CliConfig,
    name: &str,
    phone: Option<&str>,
    birthday: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    // Validate everything before touching the directory
    let name = Name::new(name)?;
    let birthday = birthday.map(Birthday::new).transpose()?;
    let email = email.map(Email::new).transpose()?;
    let phone = phone.map(Phone::new);

    let mut directory = config.open_directory()?;

    let created = !directory.contains(name.as_str());
    if created {
        directory.add_record(Record::new(name.clone()));
    }
    let record = directory.record_mut(name.as_str())?;
    if let Some(phone) = phone {
        record.add_phone(phone);
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday);
    }
    if let Some(email) = email {
        record.add_email(email);
    }

    config.save_directory(&directory)?;

    if created {
        display::success(&format!("Added contact: {}", name));
    } else {
        display::success(&format!("Updated contact: {}", name));
    }
    Ok(())
}

/// Appends a phone to an existing contact.
pub fn add_phone(config: &CliConfig, name: &str, phone: &str) -> Result<()> {
    let mut directory = config.open_directory()?;
    let update = directory.record_mut(name)?.add_phone(Phone::new(phone));
    config.save_directory(&directory)?;

    display::success(&update.to_string());
    Ok(())
}

/// Replaces one phone of a contact with another.
pub fn change(config: &CliConfig, name: &str, old: &str, new: &str) -> Result<()> {
    let mut directory = config.open_directory()?;

    match directory.change_record(name, &Phone::new(old), Phone::new(new)) {
        Some(update) if update.is_applied() => {
            config.save_directory(&directory)?;
            display::success(&update.to_string());
        }
        Some(update) => display::warning(&update.to_string()),
        None => display::warning(&format!("Contact '{}' not found", name)),
    }

    Ok(())
}

/// Removes one phone from a contact.
pub fn remove_phone(config: &CliConfig, name: &str, phone: &str) -> Result<()> {
    let mut directory = config.open_directory()?;
    let update = directory.record_mut(name)?.remove_phone(phone);

    if update.is_applied() {
        config.save_directory(&directory)?;
        display::success(&update.to_string());
    } else {
        display::warning(&update.to_string());
    }

    Ok(())
}

/// Sets or overwrites a contact's birthday.
pub fn set_birthday(config: &CliConfig, name: &str, date: &str) -> Result<()> {
    let birthday = Birthday::new(date)?;
    let mut directory = config.open_directory()?;
    directory.record_mut(name)?.add_birthday(birthday);
    config.save_directory(&directory)?;

    display::success(&format!("Birthday of {} set to {}", name, birthday));
    Ok(())
}

/// Sets or overwrites a contact's email.
pub fn set_email(config: &CliConfig, name: &str, email: &str) -> Result<()> {
    let email = Email::new(email)?;
    let mut directory = config.open_directory()?;
    directory.record_mut(name)?.add_email(email.clone());
    config.save_directory(&directory)?;

    display::success(&format!("Email of {} set to {}", name, email));
    Ok(())
}

/// Removes a contact.
pub fn remove(config: &CliConfig, name: &str) -> Result<()> {
    let mut directory = config.open_directory()?;

    match directory.remove(name) {
        Some(record) => {
            config.save_directory(&directory)?;
            display::success(&format!("Removed contact: {}", record.name()));
        }
        None => display::warning(&format!("Contact '{}' not found", name)),
    }

    Ok(())
}

/// Shows details for a specific contact.
pub fn show(config: &CliConfig, name: &str) -> Result<()> {
    let directory = config.open_directory()?;
    let record = directory
        .get(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;

    display::display_contact(&record.contact_info());
    Ok(())
}

/// Lists all contacts.
pub fn list(config: &CliConfig) -> Result<()> {
    let directory = config.open_directory()?;

    if directory.is_empty() {
        display::info("No contacts yet. Add one with:");
        println!("  addrbook add <name> [phone]");
        return Ok(());
    }

    println!("{}", directory.show_all());
    Ok(())
}

/// Searches names and phone numbers.
pub fn search(config: &CliConfig, query: &str) -> Result<()> {
    let directory = config.open_directory()?;
    let results = directory.search(query);

    if results.is_empty() {
        display::info(&format!("No contacts matching '{}'", query));
        return Ok(());
    }

    print!("{}", results);
    Ok(())
}

/// Prints the first page of `size` contacts, or every page with `all`.
pub fn page(config: &CliConfig, size: usize, all: bool) -> Result<()> {
    let directory = config.open_directory()?;

    if !all {
        print!("{}", directory.iterate(size));
        return Ok(());
    }

    for (index, block) in directory.pages(size).enumerate() {
        if index > 0 {
            println!();
        }
        println!("Page {}:", index + 1);
        print!("{}", block);
    }
    Ok(())
}

/// Prints how many days remain until a contact's birthday.
pub fn birthday(config: &CliConfig, name: &str) -> Result<()> {
    let directory = config.open_directory()?;
    let record = directory
        .get(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))?;

    println!("{}", record.days_to_birthday().describe(record.name().as_str()));
    Ok(())
}
