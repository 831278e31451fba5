use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ListingStore;

use super::helpers::indexed_listings;

pub fn run<S: ListingStore>(store: &S) -> Result<CmdResult> {
    let listed = indexed_listings(store)?;
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No listings yet."));
    }
    Ok(result.with_listed_listings(listed))
}
