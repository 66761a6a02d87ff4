use crate::config::QuickDialConfig;
use crate::index::{DisplayContact, QuickDialEntry};
use crate::model::Contact;

pub mod add;
pub mod config;
pub mod delete;
pub mod dial;
pub mod export;
pub mod import;
pub mod list;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<DisplayContact>,
    pub quick_dial: Option<QuickDialEntry>,
    pub exported: Option<String>,
    pub config: Option<QuickDialConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<DisplayContact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_quick_dial(mut self, entry: QuickDialEntry) -> Self {
        self.quick_dial = Some(entry);
        self
    }

    pub fn with_exported(mut self, blob: String) -> Self {
        self.exported = Some(blob);
        self
    }

    pub fn with_config(mut self, config: QuickDialConfig) -> Self {
        self.config = Some(config);
        self
    }
}
