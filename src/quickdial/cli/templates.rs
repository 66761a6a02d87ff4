//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files under `templates/` and embedded here at compile time.
//!
//! Templates emit their own line breaks: each loop body is one line ending in
//! a newline, and block tags trim the whitespace around them (`-%}`). Column
//! widths and truncation are computed in `render.rs`; the templates only place
//! values and pick styles.

pub const CONTACT_LIST_TEMPLATE: &str = include_str!("templates/contact_list.jinja");
pub const QUICK_DIAL_TEMPLATE: &str = include_str!("templates/quick_dial.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
