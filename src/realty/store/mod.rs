//! # Storage Layer
//!
//! Listings live behind the [`ListingStore`] trait so the command layer never depends on how
//! they are kept. The only implementation is [`memory::InMemoryStore`]: listings last as long
//! as the process does.
//!
//! Stores preserve insertion order. Display indexes, "first listing wins" tie-breaking and the
//! order of `list` output all rely on it.

use crate::error::Result;
use crate::model::Listing;
use uuid::Uuid;

pub mod memory;

pub trait ListingStore {
    /// Save a listing (create or replace by id)
    fn save_listing(&mut self, listing: &Listing) -> Result<()>;

    /// Get a listing by id
    fn get_listing(&self, id: &Uuid) -> Result<Listing>;

    /// All listings in insertion order
    fn list_listings(&self) -> Result<Vec<Listing>>;
}
