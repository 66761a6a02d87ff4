//! # CLI Layer
//!
//! One possible UI client for quickdial, not the application itself. This is
//! the only code that touches stdout, stdin, or the terminal.
//!
//! ## Structure
//!
//! - `run()`: help handling, context setup and dispatch (called by `main.rs`)
//! - `init_context()`: builds `AppContext` from the data directory and flags
//! - `handle_*()`: per-command handlers that call the API and print results
//!
//! Handlers never decide business outcomes. A quick-dial miss or an empty
//! search is a warning message inside an `Ok` result, so the process exits 0;
//! only an `Err` from the API becomes exit code 1 (in `main.rs`).

use super::render::{print_messages, render_config, render_contact_list, render_quick_dial};
use super::setup::{
    command_name, print_grouped_help, print_help_for_command, Cli, Commands, ContactCommands,
    CoreCommands, DataCommands, MiscCommands,
};
use super::theme::stdout_supports_color;
use chrono::Local;
use quickdial::api::{ConfigAction, QuickDialApi, SearchField};
use quickdial::commands::export::default_filename;
use quickdial::dialer::{Dialer, SystemDialer};
use quickdial::error::{QuickDialError, Result};
use quickdial::init::initialize;
use quickdial::store::fs::FileStore;
use std::io::Read;
use std::path::PathBuf;

struct AppContext {
    api: QuickDialApi<FileStore>,
    dialer_command: Option<String>,
    use_color: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(command_name(command)),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    // Help needs no contacts file, so it runs before the store is opened.
    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        handle_help(command.as_deref());
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Dial { digits, call } => handle_dial(&ctx, &digits, call),
            CoreCommands::List => handle_list(&ctx),
            CoreCommands::Search { term, by } => handle_search(&ctx, &term, by.into()),
        },
        Some(Commands::Contact(cmd)) => match cmd {
            ContactCommands::Add {
                name,
                phone,
                category,
            } => handle_add(&mut ctx, &name, &phone, &category),
            ContactCommands::Delete { index } => handle_delete(&mut ctx, &index),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { path, save } => handle_export(&ctx, path, save),
            DataCommands::Import { path } => handle_import(&mut ctx, &path),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Help { command } => {
                handle_help(command.as_deref());
                Ok(())
            }
        },
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.file.as_deref())?;

    Ok(AppContext {
        api: ctx.api,
        dialer_command: ctx.config.dialer,
        use_color: !cli.no_color && stdout_supports_color(),
    })
}

fn handle_dial(ctx: &AppContext, digits: &str, call: bool) -> Result<()> {
    let mut system = SystemDialer::new(ctx.dialer_command.clone());
    let dialer: Option<&mut dyn Dialer> = if call {
        Some(&mut system as &mut dyn Dialer)
    } else {
        None
    };

    let result = ctx.api.quick_dial(digits, dialer)?;
    if let Some(entry) = &result.quick_dial {
        print!("{}", render_quick_dial(entry, ctx.use_color));
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    print!(
        "{}",
        render_contact_list(&result.listed_contacts, ctx.use_color)
    );
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str, field: SearchField) -> Result<()> {
    let result = ctx.api.search_contacts(term, field)?;
    if !result.listed_contacts.is_empty() {
        print!(
            "{}",
            render_contact_list(&result.listed_contacts, ctx.use_color)
        );
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, name: &str, phone: &str, category: &str) -> Result<()> {
    let result = ctx.api.add_contact(name, phone, category)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: &str) -> Result<()> {
    let result = ctx.api.delete_contact(index)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>, save: bool) -> Result<()> {
    let target = if save {
        Some(default_filename(Local::now()))
    } else {
        path
    };

    let result = ctx.api.export_contacts(target.as_deref())?;
    if target.is_none() {
        if let Some(blob) = &result.exported {
            print!("{}", blob);
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &str) -> Result<()> {
    let blob = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(QuickDialError::Io)?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| QuickDialError::Api(format!("Could not read {}: {}", path, e)))?
    };

    let result = ctx.api.import_contacts(&blob)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_help(command: Option<&str>) {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
}
