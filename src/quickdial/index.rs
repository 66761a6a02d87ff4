//! # Indexes
//!
//! Two lookups sit on top of the ordered contact list. Neither is stored; both
//! are rebuilt from the list whenever they are needed.
//!
//! ## Display Indexes
//!
//! Listings number contacts from 1 in store order, and the CLI accepts those
//! numbers back (`quickdial delete 2`). [`DisplayIndex`] converts between the
//! 1-based number a person sees and the 0-based position the book uses.
//!
//! ## Quick-Dial Index
//!
//! [`QuickDialIndex`] maps the last three digits of each contact's number to
//! that contact. Building it is a single pass in store order. When two contacts
//! share a suffix the **later** one wins: each insert overwrites whatever an
//! earlier contact put under the same key.
//!
//! ```text
//! 1. John Doe   +1234567890  ─┐
//! 2. Jane Smith +1987654321   │  "890" → Ann Lee  (row 3 overwrote row 1)
//! 3. Ann Lee    555-0890     ─┘  "321" → Jane Smith
//! ```
//!
//! Contacts with fewer than three digits are keyed by whatever digits they
//! have, so "12" is a key only for a number with exactly those digits.

use crate::error::QuickDialError;
use crate::model::Contact;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// A user-facing, 1-based contact number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    /// 0-based store position, `None` for the invalid index 0.
    pub fn position(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = QuickDialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(DisplayIndex)
            .ok_or_else(|| QuickDialError::Api(format!("Invalid index: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub contact: Contact,
    pub index: DisplayIndex,
}

/// Pairs every contact with its display index.
pub fn index_contacts(contacts: &[Contact]) -> Vec<DisplayContact> {
    contacts
        .iter()
        .enumerate()
        .map(|(pos, c)| DisplayContact {
            contact: c.clone(),
            index: DisplayIndex::from_position(pos),
        })
        .collect()
}

/// What a quick-dial hit resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickDialEntry {
    pub name: String,
    /// Digits only, ready to dial.
    pub full_number: String,
    pub category: String,
    pub index: DisplayIndex,
}

#[derive(Debug, Default)]
pub struct QuickDialIndex {
    entries: HashMap<String, QuickDialEntry>,
}

impl QuickDialIndex {
    pub fn build(contacts: &[Contact]) -> Self {
        let mut entries = HashMap::with_capacity(contacts.len());
        for (pos, contact) in contacts.iter().enumerate() {
            let full_number = contact.phone_digits();
            let key = crate::phone::suffix(&full_number);
            entries.insert(
                key,
                QuickDialEntry {
                    name: contact.name.clone(),
                    full_number,
                    category: contact.category.clone(),
                    index: DisplayIndex::from_position(pos),
                },
            );
        }
        Self { entries }
    }

    /// Exact-key lookup. The query is used as typed, not normalized.
    pub fn lookup(&self, query: &str) -> Option<&QuickDialEntry> {
        self.entries.get(query)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
