//! Shell Command
//!
//! Line-oriented command interpreter over stdin. Each line is one command;
//! errors are translated per kind and the session continues. The directory
//! is saved once the session ends.

use std::io::{self, BufRead, Write};

use addrbook_core::{Birthday, BookError, BookResult, Directory, Email, Name, Phone, Record};
use anyhow::Result;
use tracing::debug;

use crate::config::CliConfig;
use crate::display;

const HELP: &str = "\
Commands:
  hello                          greet
  add <name> [phone]             add a contact or a phone to it
  change <name> <old> <new>      replace a phone
  phone <name>                   show a contact
  show all                       list every contact
  search <text>                  search names and phones
  page <n>                       list the first n contacts
  birthday <name> [DD-MM-YYYY]   show or set a birthday
  email <name> <email>           set an email
  remove <name> [phone]          remove a phone, or the whole contact
  good bye | close | exit        save and quit";

/// What the interpreter wants printed after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Exit(String),
    Silent,
}

/// Runs the interactive session until end of input or an exit command.
pub fn run(config: &CliConfig) -> Result<()> {
    let mut directory = config.open_directory()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        match execute(&mut directory, &line) {
            Ok(Reply::Text(text)) => writeln!(stdout, "{}", text)?,
            Ok(Reply::Exit(text)) => {
                writeln!(stdout, "{}", text)?;
                break;
            }
            Ok(Reply::Silent) => {}
            Err(err) => {
                debug!(error = %err, "command failed");
                writeln!(stdout, "{}", display::error_message(err.kind()))?;
            }
        }
    }

    config.save_directory(&directory)?;
    Ok(())
}

/// Interprets a single command line against `directory`.
pub fn execute(directory: &mut Directory, line: &str) -> BookResult<Reply> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = words.first() else {
        return Ok(Reply::Silent);
    };
    let command = first.to_lowercase();
    let args = &words[1..];

    match command.as_str() {
        "hello" => Ok(Reply::Text("How can I help you?".to_string())),
        "help" => Ok(Reply::Text(HELP.to_string())),
        "close" | "exit" => Ok(Reply::Exit("Good bye!".to_string())),
        "good" if is_second(args, "bye") => Ok(Reply::Exit("Good bye!".to_string())),
        "show" if is_second(args, "all") => Ok(Reply::Text(show_all(directory))),
        "add" => add(directory, args),
        "change" => change(directory, args),
        "phone" => directory.show_one(arg(args, 0, "contact name")?).map(Reply::Text),
        "search" => search(directory, args),
        "page" => page(directory, args),
        "birthday" => birthday(directory, args),
        "email" => email(directory, args),
        "remove" => remove(directory, args),
        _ => Ok(Reply::Text(
            "Unknown command, type 'help' to list commands".to_string(),
        )),
    }
}

fn is_second(args: &[&str], word: &str) -> bool {
    args.first().is_some_and(|w| w.eq_ignore_ascii_case(word))
}

fn arg<'a>(args: &[&'a str], index: usize, what: &str) -> BookResult<&'a str> {
    args.get(index).copied().ok_or_else(|| BookError::missing(what))
}

fn add(directory: &mut Directory, args: &[&str]) -> BookResult<Reply> {
    let name = Name::new(arg(args, 0, "contact name")?)?;
    let phone = args.get(1).map(|p| Phone::new(p));

    if let Some(record) = directory.get_mut(name.as_str()) {
        let phone = phone.ok_or_else(|| BookError::missing("phone number"))?;
        return Ok(Reply::Text(record.add_phone(phone).to_string()));
    }

    let mut record = Record::new(name.clone());
    if let Some(phone) = phone {
        record.add_phone(phone);
    }
    directory.add_record(record);
    Ok(Reply::Text(format!("Contact {} was added", name)))
}

fn change(directory: &mut Directory, args: &[&str]) -> BookResult<Reply> {
    let name = arg(args, 0, "contact name")?;
    let old = Phone::new(arg(args, 1, "old phone number")?);
    let new = Phone::new(arg(args, 2, "new phone number")?);

    directory
        .change_record(name, &old, new)
        .map(|update| Reply::Text(update.to_string()))
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

fn show_all(directory: &Directory) -> String {
    if directory.is_empty() {
        return "Contact list is empty".to_string();
    }
    directory.show_all()
}

fn search(directory: &Directory, args: &[&str]) -> BookResult<Reply> {
    let query = arg(args, 0, "search text")?;
    let results = directory.search(query);
    if results.is_empty() {
        return Ok(Reply::Text(format!("Nothing found for '{}'", query)));
    }
    Ok(Reply::Text(results.trim_end().to_string()))
}

fn page(directory: &Directory, args: &[&str]) -> BookResult<Reply> {
    let raw = arg(args, 0, "page size")?;
    let size = raw.parse::<usize>().map_err(|_| BookError::TypeMismatch {
        expected: "a number of contacts",
        found: raw.to_string(),
    })?;
    Ok(Reply::Text(directory.iterate(size).trim_end().to_string()))
}

fn birthday(directory: &mut Directory, args: &[&str]) -> BookResult<Reply> {
    let name = arg(args, 0, "contact name")?;
    let record = directory.record_mut(name)?;

    match args.get(1) {
        Some(date) => {
            let birthday = Birthday::new(date)?;
            record.add_birthday(birthday);
            Ok(Reply::Text(format!("Birthday of {} set to {}", name, birthday)))
        }
        None => Ok(Reply::Text(record.days_to_birthday().describe(name))),
    }
}

fn email(directory: &mut Directory, args: &[&str]) -> BookResult<Reply> {
    let name = arg(args, 0, "contact name")?;
    let email = Email::new(arg(args, 1, "email")?)?;
    directory.record_mut(name)?.add_email(email.clone());
    Ok(Reply::Text(format!("Email of {} set to {}", name, email)))
}

fn remove(directory: &mut Directory, args: &[&str]) -> BookResult<Reply> {
    let name = arg(args, 0, "contact name")?;

    match args.get(1) {
        Some(phone) => Ok(Reply::Text(directory.record_mut(name)?.remove_phone(phone).to_string())),
        None => {
            let record = directory
                .remove(name)
                .ok_or_else(|| BookError::NotFound(name.to_string()))?;
            Ok(Reply::Text(format!("Contact {} was removed", record.name())))
        }
    }
}
