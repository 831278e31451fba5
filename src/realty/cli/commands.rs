//! # CLI Layer
//!
//! The interactive shell is **one possible UI client** for realty. It is the only place that:
//! - Knows about stdin/stdout
//! - Parses arguments and shell lines
//! - Formats output for humans
//!
//! ## Structure
//!
//! - `run()`: process entry point (called by `main.rs`)
//! - [`Shell`]: the read-parse-dispatch loop, generic over its reader and writer so tests can
//!   drive it with in-memory buffers
//! - `handle_*()`: per-command handlers that call the API and render the result
//!
//! The shell and the add questions share one [`LinePrompter`], so answers are read from the
//! same stream as commands.

use super::render::{
    render_help, render_listing_rows, render_listings, render_messages, render_text_list,
};
use super::setup::{
    command_help, grouped_help, init_tracing, Cli, ListingCommands, SearchCommands,
    SessionCommands, ShellCommand, ShellLine,
};
use super::theme::colors_supported;
use clap::Parser;
use realty::api::{CmdMessage, CmdResult, ConfigAction, KindPreset, RealtyApi};
use realty::config::ColorChoice;
use realty::error::{RealtyError, Result};
use realty::model::Listing;
use realty::prompt::LinePrompter;
use realty::store::memory::InMemoryStore;
use realty::store::ListingStore;
use std::io::{BufRead, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.session_config()?;
    tracing::debug!(?config, "session config");

    let api = RealtyApi::new(InMemoryStore::new(), config);
    let mut shell = Shell::new(api, std::io::stdin().lock(), std::io::stdout().lock());
    shell.run()
}

enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S: ListingStore, R, W> {
    api: RealtyApi<S>,
    io: LinePrompter<R, W>,
}

impl<S: ListingStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: RealtyApi<S>, input: R, output: W) -> Self {
        let max_attempts = api.settings().max_attempts;
        Self {
            api,
            io: LinePrompter::new(input, output).with_max_attempts(max_attempts),
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &RealtyApi<S> {
        &self.api
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.print_messages(&[CmdMessage::info(
            "Type 'help' for a list of commands, 'quit' to leave.",
        )])?;

        loop {
            let prompt = self.api.settings().prompt.clone();
            self.write(&prompt)?;
            self.io.output().flush()?;

            let Some(line) = self.io.read_line()? else {
                self.write("\n")?;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    tracing::debug!(%line, kind = ?e.kind(), "could not parse shell line");
                    let rendered = e.render();
                    let text = if self.use_color() {
                        rendered.ansi().to_string()
                    } else {
                        rendered.to_string()
                    };
                    self.write(&text)?;
                    continue;
                }
            };

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(RealtyError::InputClosed) => {
                    self.write("\n")?;
                    self.print_messages(&[CmdMessage::warning(
                        "Input closed, listing discarded.",
                    )])?;
                    break;
                }
                Err(RealtyError::Io(e)) => return Err(RealtyError::Io(e)),
                Err(e) => self.print_messages(&[CmdMessage::error(e.to_string())])?,
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Listing(cmd) => match cmd {
                ListingCommands::Add {
                    physical,
                    transaction,
                } => self.handle_add(KindPreset {
                    physical,
                    transaction,
                }),
                ListingCommands::List { short, json } => self.handle_list(short, json),
                ListingCommands::View { indexes } => self.handle_view(&indexes),
            },
            ShellCommand::Search(cmd) => match cmd {
                SearchCommands::CheapestRent => {
                    let result = self.api.cheapest_rental()?;
                    self.show_listings(&result)
                }
                SearchCommands::CheapestPurchase => {
                    let result = self.api.cheapest_purchase()?;
                    self.show_listings(&result)
                }
            },
            ShellCommand::Session(cmd) => match cmd {
                SessionCommands::Config { key, value } => self.handle_config(key, value),
                SessionCommands::Help { command } => self.handle_help(command),
                SessionCommands::Quit => return Ok(Flow::Quit),
            },
        }?;
        Ok(Flow::Continue)
    }

    fn handle_add(&mut self, preset: KindPreset) -> Result<()> {
        self.io.set_max_attempts(self.api.settings().max_attempts);
        let result = self.api.add_listing(&mut self.io, preset)?;
        self.print_messages(&result.messages)
    }

    fn handle_list(&mut self, short: bool, json: bool) -> Result<()> {
        let result = self.api.list_listings()?;

        if json {
            let listings: Vec<&Listing> =
                result.listed_listings.iter().map(|dl| &dl.listing).collect();
            let output = serde_json::to_string_pretty(&listings)?;
            return self.write(&format!("{}\n", output));
        }

        let output = if short {
            render_listing_rows(&result.listed_listings, self.use_color())
        } else {
            render_listings(&result.listed_listings, self.use_color())
        };
        self.write(&output)?;
        self.print_messages(&result.messages)
    }

    fn handle_view(&mut self, indexes: &[String]) -> Result<()> {
        let result = self.api.view_listings(indexes)?;
        self.show_listings(&result)
    }

    fn show_listings(&mut self, result: &CmdResult) -> Result<()> {
        let output = render_listings(&result.listed_listings, self.use_color());
        self.write(&output)?;
        self.print_messages(&result.messages)
    }

    fn handle_config(&mut self, key: Option<String>, value: Option<String>) -> Result<()> {
        let action = match (key, value) {
            (None, _) => ConfigAction::ShowAll,
            (Some(k), None) => ConfigAction::ShowKey(k),
            (Some(k), Some(v)) => ConfigAction::Set(k, v),
        };
        let show_all = matches!(action, ConfigAction::ShowAll);

        let result = self.api.config(action)?;
        if show_all {
            let lines: Vec<String> = result
                .config
                .as_ref()
                .map(|config| {
                    config
                        .list_all()
                        .into_iter()
                        .map(|(k, v)| format!("{} = {}", k, v))
                        .collect()
                })
                .unwrap_or_default();
            let output = render_text_list(&lines, "No configuration values.", self.use_color());
            self.write(&output)?;
        }
        self.print_messages(&result.messages)
    }

    fn handle_help(&mut self, command: Option<String>) -> Result<()> {
        let output = match command {
            None => render_help(&grouped_help(), self.use_color()),
            Some(name) => match command_help(&name) {
                Some(help) => help,
                None => {
                    self.print_messages(&[CmdMessage::error(format!(
                        "Unknown command: {}",
                        name
                    ))])?;
                    render_help(&grouped_help(), self.use_color())
                }
            },
        };
        self.write(&output)
    }

    fn use_color(&self) -> bool {
        match self.api.settings().color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => colors_supported(),
        }
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let output = render_messages(messages, self.use_color());
        self.write(&output)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.io.output().write_all(text.as_bytes())?;
        Ok(())
    }
}
