use crate::phone;
use serde::{Deserialize, Serialize};

/// Column order of the backing table, also used for import and export.
pub const COLUMNS: [&str; 3] = ["name", "phone", "category"];

/// Categories offered when adding a contact. Storage accepts any label.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Family", "Friends", "Work", "Other"];

pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    /// The number as entered, punctuation and country prefix included.
    pub phone: String,
    pub category: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            category: category.into(),
        }
    }

    /// Digits-only form of `phone`. Never stored, always recomputed.
    pub fn phone_digits(&self) -> String {
        phone::normalize(&self.phone)
    }

    /// The quick-dial key for this contact.
    pub fn suffix_key(&self) -> String {
        phone::suffix(&self.phone_digits())
    }
}

/// Contacts written when no backing file exists yet.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("John Doe", "+1234567890", "Family"),
        Contact::new("Jane Smith", "+1987654321", "Work"),
        Contact::new("Bob Johnson", "+1122334455", "Friends"),
    ]
}
