//! Styles for the quickdial CLI.
//!
//! Templates refer to styles by the semantic names in [`names`]; the colors
//! behind them are set once here.

use super::theme::Theme;
use console::Style;
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    // Contact fields
    pub const LIST_INDEX: &str = "list-index";
    pub const NAME: &str = "name";
    pub const PHONE: &str = "phone";
    pub const CATEGORY: &str = "category";
    // Config listing
    pub const CONFIG_KEY: &str = "config-key";
    pub const CONFIG_VALUE: &str = "config-value";
}

pub static QUICKDIAL_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::LIST_INDEX, Style::new().yellow())
        .add(names::NAME, Style::new())
        .add(names::PHONE, Style::new().cyan())
        .add(names::CATEGORY, muted.italic())
        .add(names::CONFIG_KEY, Style::new().bold())
        .add(names::CONFIG_VALUE, Style::new().cyan())
});
