use super::render::{HelpCommand, HelpData, HelpGroup};
use clap::{CommandFactory, Parser, Subcommand};
use realty::config::{AgentConfig, ColorChoice};
use realty::error::Result;
use realty::model::{PhysicalKind, TransactionKind};
use tracing_subscriber::EnvFilter;

const ABOUT: &str = "Record and browse property listings from an interactive shell";

/// Process arguments. Everything here only seeds the session config.
#[derive(Parser, Debug)]
#[command(name = "realty", bin_name = "realty", version, about = ABOUT, long_about = None)]
pub struct Cli {
    /// When to use colors (auto, always, never)
    #[arg(long, env = "REALTY_COLOR", value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Invalid answers allowed per multiple-choice question (0 = no limit)
    #[arg(long, env = "REALTY_MAX_ATTEMPTS", value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Shell prompt
    #[arg(long, env = "REALTY_PROMPT", value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults overridden by whatever was given on the command line or in the environment.
    pub fn session_config(&self) -> Result<AgentConfig> {
        let mut config = AgentConfig::default();
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if let Some(prompt) = &self.prompt {
            config.set("prompt", prompt)?;
        }
        Ok(config)
    }
}

/// Sends `tracing` output to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "realty=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// One line typed at the shell prompt.
#[derive(Parser, Debug)]
#[command(
    name = "realty",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Listing(ListingCommands),

    #[command(flatten)]
    Search(SearchCommands),

    #[command(flatten)]
    Session(SessionCommands),
}

#[derive(Subcommand, Debug)]
pub enum ListingCommands {
    /// Record a new listing
    #[command(disable_help_flag = true, alias = "a", display_order = 1)]
    Add {
        /// Physical type (house, apartment)
        #[arg(long = "type", value_name = "TYPE")]
        physical: Option<PhysicalKind>,

        /// Payment type (purchase, rental)
        #[arg(long = "payment", value_name = "PAYMENT")]
        transaction: Option<TransactionKind>,
    },

    /// Show every listing
    #[command(disable_help_flag = true, alias = "ls", display_order = 2)]
    List {
        /// One line per listing
        #[arg(short, long)]
        short: bool,

        /// Print listings as JSON
        #[arg(long, conflicts_with = "short")]
        json: bool,
    },

    /// Show listings by number
    #[command(disable_help_flag = true, alias = "v", display_order = 3)]
    View {
        /// Listing numbers (e.g. 1 3 #2)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// Show the rental with the lowest rent
    #[command(
        disable_help_flag = true,
        name = "cheapest-rent",
        alias = "rent",
        display_order = 10
    )]
    CheapestRent,

    /// Show the purchase with the lowest price plus taxes
    #[command(
        disable_help_flag = true,
        name = "cheapest-purchase",
        alias = "buy",
        display_order = 11
    )]
    CheapestPurchase,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Get or set session configuration
    #[command(disable_help_flag = true, display_order = 20)]
    Config {
        /// Configuration key (color, max-attempts, prompt)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for the shell or a command
    #[command(disable_help_flag = true, display_order = 21)]
    Help {
        /// Command to get help for
        command: Option<String>,
    },

    /// Leave the shell
    #[command(disable_help_flag = true, aliases = ["exit", "q"], display_order = 22)]
    Quit,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Listing,
    Search,
    Session,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Listing => "Listing Commands:",
            CommandGroup::Search => "Search Commands:",
            CommandGroup::Session => "Session Commands:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "view" => Some(CommandGroup::Listing),
            "cheapest-rent" | "cheapest-purchase" => Some(CommandGroup::Search),
            "config" | "help" | "quit" => Some(CommandGroup::Session),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Listing,
            CommandGroup::Search,
            CommandGroup::Session,
        ]
    }
}

const NAME_COLUMN: usize = 26;

/// Shell commands grouped by purpose, ready for the help template.
pub fn grouped_help() -> HelpData {
    let shell = ShellLine::command();
    let subcommands: Vec<_> = shell.get_subcommands().collect();

    let groups = CommandGroup::all()
        .iter()
        .map(|group| HelpGroup {
            heading: group.heading().to_string(),
            commands: subcommands
                .iter()
                .filter(|sc| {
                    !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
                })
                .map(|sc| {
                    let aliases: Vec<_> = sc.get_all_aliases().collect();
                    let name = if aliases.is_empty() {
                        sc.get_name().to_string()
                    } else {
                        format!("{} ({})", sc.get_name(), aliases.join(", "))
                    };
                    HelpCommand {
                        indent: "  ".to_string(),
                        padding: " ".repeat(NAME_COLUMN.saturating_sub(name.len()).max(1)),
                        name,
                        about: sc.get_about().map(|s| s.to_string()).unwrap_or_default(),
                    }
                })
                .collect(),
        })
        .filter(|group| !group.commands.is_empty())
        .collect();

    let version = Cli::command()
        .get_version()
        .unwrap_or("unknown")
        .to_string();

    HelpData {
        title: format!("realty {}", version),
        about: ABOUT.to_string(),
        usage: "Usage: <command> [args]   (help <command> for details)".to_string(),
        groups,
    }
}

/// Clap's own help for one shell command, looked up by name or alias.
#[allow(clippy::let_and_return)]
pub fn command_help(name: &str) -> Option<String> {
    let mut shell = ShellLine::command();
    let help = shell
        .get_subcommands_mut()
        .find(|sc| sc.get_name() == name || sc.get_all_aliases().any(|alias| alias == name))
        .map(|sc| sc.render_help().to_string());
    help
}
