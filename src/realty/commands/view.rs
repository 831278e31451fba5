use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ListingStore;

use super::helpers::listings_by_indexes;

pub fn run<S: ListingStore>(store: &S, indexes: &[usize]) -> Result<CmdResult> {
    let listings = listings_by_indexes(store, indexes)?;
    Ok(CmdResult::default().with_listed_listings(listings))
}
