//! # API Facade
//!
//! The single entry point for every agent operation, whatever UI sits on top.
//!
//! The API:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (user-typed display indexes become `usize`s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules. `RealtyApi<S: ListingStore>` is generic
//! over the store so tests and the binary share exactly the same code path.

use crate::commands;
use crate::config::AgentConfig;
use crate::error::Result;
use crate::index::parse_indexes;
use crate::prompt::Prompter;
use crate::store::ListingStore;

pub struct RealtyApi<S: ListingStore> {
    store: S,
    config: AgentConfig,
}

impl<S: ListingStore> RealtyApi<S> {
    pub fn new(store: S, config: AgentConfig) -> Self {
        Self { store, config }
    }

    /// Interactively gathers a new listing and stores it.
    pub fn add_listing(
        &mut self,
        prompter: &mut dyn Prompter,
        preset: KindPreset,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, prompter, preset)
    }

    pub fn list_listings(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_listings<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn cheapest_rental(&self) -> Result<commands::CmdResult> {
        commands::cheapest::rental(&self.store)
    }

    pub fn cheapest_purchase(&self) -> Result<commands::CmdResult> {
        commands::cheapest::purchase(&self.store)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&mut self.config, action)
    }

    pub fn settings(&self) -> &AgentConfig {
        &self.config
    }
}

pub use crate::commands::add::KindPreset;
pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
