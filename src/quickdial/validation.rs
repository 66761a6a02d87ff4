//! Syntactic phone number validation.
//!
//! The actual rules live in the `phonenumber` crate (a port of libphonenumber).
//! Parse failures are folded into [`PhoneCheck::Unparsable`]; nothing here
//! returns an error or panics on bad input.

use phonenumber::country;

/// Region assumed for numbers typed without a country prefix.
pub const DEFAULT_REGION: &str = "US";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneCheck {
    Valid,
    /// Parsed, but not a number that can exist in its region.
    Invalid,
    /// Could not be parsed at all. Carries the parser's explanation.
    Unparsable(String),
}

impl PhoneCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, PhoneCheck::Valid)
    }

    /// Human readable reason for a failed check.
    pub fn message(&self) -> Option<String> {
        match self {
            PhoneCheck::Valid => None,
            PhoneCheck::Invalid => Some("Invalid phone number format".to_string()),
            PhoneCheck::Unparsable(reason) => Some(format!("Could not parse number: {}", reason)),
        }
    }
}

/// Parses a region code such as "US" or "gb".
pub fn parse_region(region: &str) -> Option<country::Id> {
    region.trim().to_ascii_uppercase().parse::<country::Id>().ok()
}

pub fn is_known_region(region: &str) -> bool {
    parse_region(region).is_some()
}

pub fn check_phone(raw: &str, default_region: &str) -> PhoneCheck {
    let Some(region) = parse_region(default_region) else {
        return PhoneCheck::Unparsable(format!("unknown region '{}'", default_region));
    };

    match phonenumber::parse(Some(region), raw) {
        Ok(number) if phonenumber::is_valid(&number) => PhoneCheck::Valid,
        Ok(_) => PhoneCheck::Invalid,
        Err(e) => PhoneCheck::Unparsable(e.to_string()),
    }
}

pub fn is_valid_phone(raw: &str, default_region: &str) -> bool {
    check_phone(raw, default_region).is_valid()
}
