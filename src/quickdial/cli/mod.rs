//! # CLI Behavior
//!
//! The command-line client for quickdial. It parses arguments, opens the
//! contact book through [`quickdial::init`], calls the API and renders results.
//! For the overall architecture see the library docs.
//!
//! ## Quick Dial First
//!
//! `quickdial dial 890` (or `quickdial d 890`) is the main path: it shows the
//! contact whose number ends in 890. Add `--call` to hand the number to the
//! system dialer (a `tel:` URL, or the command set with
//! `quickdial config dialer <cmd>`).
//!
//! Running `quickdial` with no arguments lists all contacts.
//!
//! ## Data Location
//!
//! Contacts live in `contacts.csv` inside `$QUICKDIAL_HOME`, or the platform
//! data directory when it is unset. `--file` points at any other CSV file.
//! A missing file is created with three sample contacts.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `render`: output formatting through templates
//! - `setup`: argument parsing via clap, grouped help
//! - `styles`: the named styles templates refer to
//! - `templates`: embedded template sources
//! - `theme`: style registry and the template `style` filter

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
