use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ListingKind, PhysicalKind, TransactionKind};
use crate::prompt::{ask_choice, Prompter};
use crate::store::ListingStore;

/// Choices already made before the questions start (e.g. via `add --type house`).
#[derive(Debug, Clone, Copy, Default)]
pub struct KindPreset {
    pub physical: Option<PhysicalKind>,
    pub transaction: Option<TransactionKind>,
}

pub fn run<S: ListingStore>(
    store: &mut S,
    prompter: &mut dyn Prompter,
    preset: KindPreset,
) -> Result<CmdResult> {
    let physical = match preset.physical {
        Some(kind) => kind,
        None => ask_choice(prompter, "What type of property?")?,
    };
    let transaction = match preset.transaction {
        Some(kind) => kind,
        None => ask_choice(prompter, "What payment type?")?,
    };

    let kind = ListingKind::lookup(physical, transaction);
    let listing = kind.prompt(prompter)?;
    store.save_listing(&listing)?;

    let number = store
        .list_listings()?
        .iter()
        .position(|l| l.metadata.id == listing.metadata.id)
        .map(|pos| pos + 1)
        .unwrap_or_default();
    tracing::info!(id = %listing.metadata.id, %kind, number, "listing added");

    let mut result = CmdResult::default().with_affected_listings(vec![listing]);
    result.add_message(CmdMessage::success(format!(
        "Listing #{} added ({})",
        number, kind
    )));
    Ok(result)
}
