//! Display Helpers
//!
//! Terminal output formatting, styling, and error translation.

use addrbook_core::{BookError, ContactInfo, ErrorKind, ValidationError};
use console::{style, Style};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Fixed user-facing text for each error kind.
pub fn error_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::MissingArgument => "You didn't provide contact name or phone number",
        ErrorKind::Format => {
            "Birthday must be in 'DD-MM-YYYY' format and email must look like name@domain.com"
        }
        ErrorKind::Lookup => "User is not in contact list",
        ErrorKind::TypeMismatch => "You didn't provide valid parameters",
        ErrorKind::Storage => "Could not read or write the address book file",
    }
}

/// Reports a failed command on stderr.
///
/// Directory and field errors are shown with the fixed message for their
/// kind; the underlying detail follows on a dimmed line.
pub fn report(err: &anyhow::Error) {
    let kind = match err.downcast_ref::<BookError>() {
        Some(book_error) => Some(book_error.kind()),
        None => err.downcast_ref::<ValidationError>().map(ErrorKind::from),
    };

    match kind {
        Some(kind) => {
            error(error_message(kind));
            eprintln!("  {}", style(format!("{:#}", err)).dim());
        }
        None => error(&format!("{:#}", err)),
    }
}

/// Displays a contact in a formatted box.
pub fn display_contact(info: &ContactInfo) {
    let width = 40;
    let label = Style::new().dim();

    println!("{}", "─".repeat(width));
    println!("  {}", style(&info.name).bold().cyan());
    println!("{}", "─".repeat(width));

    let phones = if info.phones.is_empty() {
        style("(none)").dim().to_string()
    } else {
        info.phones.clone()
    };
    println!("  {:10} {}", label.apply_to("phones"), phones);

    match &info.birthday {
        Some(birthday) => println!("  {:10} {}", label.apply_to("birthday"), birthday),
        None => println!("  {:10} {}", label.apply_to("birthday"), style("(unknown)").dim()),
    }
    match &info.email {
        Some(email) => println!("  {:10} {}", label.apply_to("email"), email),
        None => println!("  {:10} {}", label.apply_to("email"), style("(unknown)").dim()),
    }

    println!("{}", "─".repeat(width));
}
