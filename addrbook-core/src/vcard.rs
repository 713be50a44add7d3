// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! vCard 4.0 Export/Import (RFC 6350)

use chrono::NaiveDate;

use crate::directory::Directory;
use crate::field::{Birthday, Email, Field, Name, Phone, ValidationError};
use crate::record::Record;

/// Exports a record to vCard 4.0 format.
pub fn export_record(record: &Record) -> String {
    let mut lines = Vec::new();
    lines.push("BEGIN:VCARD".to_string());
    lines.push("VERSION:4.0".to_string());
    lines.push(format!("FN:{}", escape_vcard(record.name().as_str())));

    for phone in record.phones() {
        lines.push(format!("TEL:{}", escape_vcard(phone.as_str())));
    }
    if let Some(birthday) = record.birthday() {
        lines.push(format!("BDAY:{}", birthday.value().format("%Y%m%d")));
    }
    if let Some(email) = record.email() {
        lines.push(format!("EMAIL:{}", escape_vcard(email.as_str())));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\r\n")
}

/// Exports every record, one card after another.
pub fn export_directory(directory: &Directory) -> String {
    directory
        .records()
        .map(|record| export_record(record) + "\r\n")
        .collect()
}

/// Imports all cards found in `text`.
///
/// Properties other than FN, TEL, BDAY and EMAIL are ignored.
pub fn import_vcards(text: &str) -> Result<Vec<Record>, VCardError> {
    let mut records = Vec::new();
    let mut current: Option<CardBuilder> = None;

    for line in unfold(text) {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("BEGIN:VCARD") {
            if current.is_some() {
                return Err(VCardError::InvalidFormat("nested BEGIN:VCARD".into()));
            }
            current = Some(CardBuilder::default());
            continue;
        }

        if line.eq_ignore_ascii_case("END:VCARD") {
            let builder = current
                .take()
                .ok_or_else(|| VCardError::InvalidFormat("END:VCARD without BEGIN".into()))?;
            records.push(builder.build()?);
            continue;
        }

        let Some(builder) = current.as_mut() else {
            return Err(VCardError::InvalidFormat("Missing BEGIN:VCARD".into()));
        };

        let Some((property, value)) = line.split_once(':') else {
            return Err(VCardError::InvalidFormat(format!("no value in line '{}'", line)));
        };
        let property = property
            .split(';')
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();
        let value = unescape_vcard(value);

        match property.as_str() {
            "FN" => builder.name = Some(value),
            "TEL" => builder.phones.push(Phone::new(&value)),
            "BDAY" => builder.birthday = Some(parse_bday(&value)?),
            "EMAIL" => builder.email = Some(Email::new(&value)?),
            _ => {}
        }
    }

    if current.is_some() {
        return Err(VCardError::InvalidFormat("Missing END:VCARD".into()));
    }
    Ok(records)
}

#[derive(Default)]
struct CardBuilder {
    name: Option<String>,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    email: Option<Email>,
}

impl CardBuilder {
    fn build(self) -> Result<Record, VCardError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => Name::new(&name)?,
            _ => return Err(VCardError::MissingName),
        };
        let mut record = Record::new(name);
        for phone in self.phones {
            record.add_phone(phone);
        }
        if let Some(birthday) = self.birthday {
            record.add_birthday(birthday);
        }
        if let Some(email) = self.email {
            record.add_email(email);
        }
        Ok(record)
    }
}

/// Accepts the basic (`YYYYMMDD`) and extended (`YYYY-MM-DD`) date forms.
fn parse_bday(value: &str) -> Result<Birthday, VCardError> {
    let date = NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;
    Ok(Birthday::from_date(date)?)
}

/// Joins folded continuation lines (those starting with a space or tab).
fn unfold(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.lines() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(rest) = raw.strip_prefix([' ', '\t']) {
            if let Some(previous) = lines.last_mut() {
                previous.push_str(rest);
                continue;
            }
        }
        lines.push(raw.to_string());
    }
    lines
}

fn escape_vcard(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

fn unescape_vcard(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// vCard parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum VCardError {
    #[error("Invalid vCard format: {0}")]
    InvalidFormat(String),
    #[error("Missing required field: FN (name)")]
    MissingName,
    #[error("Invalid field value: {0}")]
    Validation(#[from] ValidationError),
}
