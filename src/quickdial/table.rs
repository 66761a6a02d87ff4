//! # Tabular Format
//!
//! The backing file and the import/export blobs share one format:
//!
//! ```text
//! name,phone,category
//! John Doe,+1234567890,Family
//! "Doe, Jane",+1987654321,Work
//! ```
//!
//! UTF-8, comma separated, standard quoting for embedded separators and quotes,
//! `\n` line endings on write. On read the header must name `name`, `phone` and
//! `category` (case-sensitive, any order). Extra columns are ignored and short
//! rows fill the missing cells with empty strings.

use crate::model::{Contact, COLUMNS};
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub fn write_contacts<W: Write>(writer: W, contacts: &[Contact]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(COLUMNS)?;
    for contact in contacts {
        wtr.write_record([&contact.name, &contact.phone, &contact.category])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serializes contacts to the canonical text form.
pub fn to_string(contacts: &[Contact]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_contacts(&mut buf, contacts)?;
    // Every field came from a String, so the bytes are valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn read_contacts<R: Read>(reader: R) -> Result<Vec<Contact>, TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let position = |column: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == column)
    };

    let mut at = [0usize; 3];
    let mut missing = Vec::new();
    for (slot, column) in at.iter_mut().zip(COLUMNS) {
        match position(column) {
            Some(i) => *slot = i,
            None => missing.push(column.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(TableError::MissingColumns(missing));
    }
    let [name_at, phone_at, category_at] = at;

    let mut contacts = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let cell = |i: usize| record.get(i).unwrap_or_default().to_string();
        contacts.push(Contact {
            name: cell(name_at),
            phone: cell(phone_at),
            category: cell(category_at),
        });
    }
    Ok(contacts)
}

pub fn from_str(text: &str) -> Result<Vec<Contact>, TableError> {
    read_contacts(text.as_bytes())
}
