//! Cheapest rental and cheapest purchase.
//!
//! Both are a single linear scan over the listings in insertion order. Listings of the other
//! transaction type are ignored, as are listings whose figures can't be read as numbers. When
//! two listings cost the same, the one added first wins.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayListing;
use crate::store::ListingStore;

use super::helpers::{cheapest_by, indexed_listings};

const NOTHING_AVAILABLE: &str = "Nothing available";

/// The rental with the lowest monthly rent.
pub fn rental<S: ListingStore>(store: &S) -> Result<CmdResult> {
    let listings = indexed_listings(store)?;
    let best = cheapest_by(listings, |dl| {
        let rent = dl.listing.rent()?;
        let value = rent.value();
        if value.is_none() {
            tracing::debug!(index = dl.index, rent = %rent, "skipping rental with unreadable rent");
        }
        value
    });
    Ok(into_result(best))
}

/// The purchase with the lowest selling price plus estimated taxes.
pub fn purchase<S: ListingStore>(store: &S) -> Result<CmdResult> {
    let listings = indexed_listings(store)?;
    let best = cheapest_by(listings, |dl| {
        let cost = dl.listing.purchase_cost();
        if cost.is_none() && dl.listing.rent().is_none() {
            tracing::debug!(index = dl.index, "skipping purchase with unreadable price or taxes");
        }
        cost
    });
    Ok(into_result(best))
}

fn into_result(best: Option<DisplayListing>) -> CmdResult {
    match best {
        Some(dl) => CmdResult::default().with_listed_listings(vec![dl]),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(NOTHING_AVAILABLE));
            result
        }
    }
}
