//! # Rendering
//!
//! Turns command results into terminal text through the templates in
//! `templates/` and the theme in `styles.rs`.
//!
//! Layout stays in Rust because it needs Unicode-aware widths: the renderers
//! compute padding and truncation, then hand plain strings to the templates.
//! Every renderer takes `use_color` explicitly so `--no-color` and tests get
//! the same code path as a color terminal.

use super::styles::{names, QUICKDIAL_THEME};
use super::templates::{
    CONFIG_TEMPLATE, CONTACT_LIST_TEMPLATE, MESSAGES_TEMPLATE, QUICK_DIAL_TEMPLATE,
};
use super::theme::render_with_color;
use quickdial::api::{CmdMessage, MessageLevel};
use quickdial::config::QuickDialConfig;
use quickdial::index::{DisplayContact, QuickDialEntry};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest name shown in a listing before it is cut with an ellipsis.
pub const NAME_WIDTH: usize = 32;
pub const EMPTY_LIST_MESSAGE: &str = "No contacts found.";

#[derive(Serialize)]
struct ContactLine {
    index_pad: String,
    index: String,
    name: String,
    name_pad: String,
    phone: String,
    phone_pad: String,
    category: String,
}

#[derive(Serialize)]
struct ContactListData {
    contacts: Vec<ContactLine>,
    empty_message: String,
}

#[derive(Serialize)]
struct QuickDialData {
    index: String,
    name: String,
    indent: String,
    number: String,
    category: String,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    pad: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders contacts as aligned columns: index, name, phone, category.
pub fn render_contact_list(contacts: &[DisplayContact], use_color: bool) -> String {
    let index_width = contacts
        .iter()
        .map(|dc| format!("{}.", dc.index).width())
        .max()
        .unwrap_or(0);
    let name_width = contacts
        .iter()
        .map(|dc| dc.contact.name.width())
        .max()
        .unwrap_or(0)
        .min(NAME_WIDTH);
    let phone_width = contacts
        .iter()
        .map(|dc| dc.contact.phone.width())
        .max()
        .unwrap_or(0);

    let lines = contacts
        .iter()
        .map(|dc| {
            let index = format!("{}.", dc.index);
            let name = truncate_to_width(&dc.contact.name, name_width);
            ContactLine {
                index_pad: pad_to(&index, index_width),
                name_pad: pad_to(&name, name_width),
                phone_pad: pad_to(&dc.contact.phone, phone_width),
                index,
                name,
                phone: dc.contact.phone.clone(),
                category: dc.contact.category.clone(),
            }
        })
        .collect();

    let data = ContactListData {
        contacts: lines,
        empty_message: EMPTY_LIST_MESSAGE.to_string(),
    };

    render_with_color(CONTACT_LIST_TEMPLATE, &data, &QUICKDIAL_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders a quick-dial hit: the contact, then the number that would be dialed.
pub fn render_quick_dial(entry: &QuickDialEntry, use_color: bool) -> String {
    let index = format!("{}.", entry.index);
    let data = QuickDialData {
        indent: " ".repeat(index.width() + 1),
        index,
        name: entry.name.clone(),
        number: entry.full_number.clone(),
        category: entry.category.clone(),
    };

    render_with_color(QUICK_DIAL_TEMPLATE, &data, &QUICKDIAL_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders `key = value` lines for every config key.
pub fn render_config(config: &QuickDialConfig, use_color: bool) -> String {
    let pairs = config.list_all();
    let key_width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let entries = pairs
        .into_iter()
        .map(|(key, value)| ConfigEntry {
            pad: pad_to(&key, key_width),
            value: if value.is_empty() {
                "(system default)".to_string()
            } else {
                value
            },
            key,
        })
        .collect();

    render_with_color(
        CONFIG_TEMPLATE,
        &ConfigData { entries },
        &QUICKDIAL_THEME,
        use_color,
    )
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages, one per line, styled by level.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let messages = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    render_with_color(
        MESSAGES_TEMPLATE,
        &MessagesData { messages },
        &QUICKDIAL_THEME,
        use_color,
    )
    .unwrap_or_else(|_| String::new())
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn pad_to(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(s.width()))
}

/// Cuts `s` to at most `max_width` columns, ending in `…` when anything was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
