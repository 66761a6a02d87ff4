use clap::builder::NonEmptyStringValueParser;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use quickdial::api::SearchField;
use quickdial::model::{DEFAULT_CATEGORIES, DEFAULT_CATEGORY};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const ABOUT: &str = "Contact book with quick-dial by the last three digits";

fn category_help() -> String {
    format!("Category label: {}, or your own", DEFAULT_CATEGORIES.join(", "))
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "quickdial",
    bin_name = "quickdial",
    version = get_version(),
    about = ABOUT,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contacts file to use instead of <data dir>/contacts.csv
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Field matched by `search`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Name,
    Category,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Name => SearchField::Name,
            SearchBy::Category => SearchField::Category,
        }
    }
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Contact,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Contact => "Contact Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "dial" | "list" | "search" => Some(CommandGroup::Core),
            "add" | "delete" => Some(CommandGroup::Contact),
            "export" | "import" => Some(CommandGroup::Data),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Contact,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("quickdial {version}\n"));
    output.push_str(ABOUT);
    output.push('\n');
    output.push('\n');
    output.push_str("Usage: quickdial [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<10} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --file <PATH>  Contacts file to use instead of <data dir>/contacts.csv\n");
    output.push_str("  -v, --verbose      Verbose output (debug logging on stderr)\n");
    output.push_str("      --no-color     Disable colored output\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Name of the subcommand a parsed command belongs to, for `--help`.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Core(c) => match c {
            CoreCommands::Dial { .. } => "dial",
            CoreCommands::List => "list",
            CoreCommands::Search { .. } => "search",
        },
        Commands::Contact(c) => match c {
            ContactCommands::Add { .. } => "add",
            ContactCommands::Delete { .. } => "delete",
        },
        Commands::Data(c) => match c {
            DataCommands::Export { .. } => "export",
            DataCommands::Import { .. } => "import",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Contact(ContactCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Find a contact by the last three digits of their number
    #[command(alias = "d", display_order = 1)]
    Dial {
        /// Last digits of the number (e.g. 890)
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        digits: String,

        /// Place the call through the system dialer
        #[arg(long)]
        call: bool,
    },

    /// List all contacts
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Search contacts by name or category
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Text to look for (case-insensitive)
        term: String,

        /// Field to search
        #[arg(long, value_enum, default_value_t = SearchBy::Name)]
        by: SearchBy,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a contact
    #[command(alias = "a", display_order = 10)]
    Add {
        /// Contact name
        name: String,

        /// Phone number, in national or +international format
        phone: String,

        #[arg(short, long, default_value = DEFAULT_CATEGORY, help = category_help())]
        category: String,
    },

    /// Delete a contact by its list number
    #[command(alias = "rm", display_order = 11)]
    Delete {
        /// Number shown by `list` (e.g. 2)
        index: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export contacts as CSV (to stdout, a file, or a timestamped file)
    #[command(display_order = 20)]
    Export {
        /// File to write
        path: Option<PathBuf>,

        /// Write to contacts-<timestamp>.csv in the current directory
        #[arg(long, conflicts_with = "path")]
        save: bool,
    },

    /// Import contacts from a CSV file ("-" reads stdin)
    #[command(display_order = 21)]
    Import {
        /// CSV file with name, phone and category columns
        path: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (region, dialer)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for quickdial or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_parses() {
        let cli = parse_from(&["quickdial"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_dial_alias_and_flag() {
        let cli = parse_from(&["quickdial", "d", "890", "--call"]);
        match cli.command {
            Some(Commands::Core(CoreCommands::Dial { digits, call })) => {
                assert_eq!(digits, "890");
                assert!(call);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_dial_rejects_empty_digits() {
        assert!(Cli::try_parse_from(["quickdial", "dial", ""]).is_err());
    }

    #[test]
    fn test_add_defaults_category() {
        let cli = parse_from(&["quickdial", "add", "Ada", "555-0100"]);
        match cli.command {
            Some(Commands::Contact(ContactCommands::Add { category, .. })) => {
                assert_eq!(category, "Other")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_search_by_category() {
        let cli = parse_from(&["quickdial", "s", "fam", "--by", "category"]);
        match cli.command {
            Some(Commands::Core(CoreCommands::Search { term, by })) => {
                assert_eq!(term, "fam");
                assert_eq!(SearchField::from(by), SearchField::Category);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_export_save_conflicts_with_path() {
        assert!(Cli::try_parse_from(["quickdial", "export", "out.csv", "--save"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse_from(&["quickdial", "list", "--file", "x.csv", "--no-color", "-v"]);
        assert_eq!(cli.file, Some(PathBuf::from("x.csv")));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for name in [
            "dial", "list", "search", "add", "delete", "export", "import", "config", "help",
        ] {
            assert!(help.contains(&format!("  {:<10} ", name)), "missing {}", name);
        }
    }

    #[test]
    fn test_command_name_matches_group() {
        let cli = parse_from(&["quickdial", "rm", "2"]);
        let name = command_name(cli.command.as_ref().unwrap());
        assert_eq!(name, "delete");
        assert_eq!(CommandGroup::for_command(name), Some(CommandGroup::Contact));
    }
}
