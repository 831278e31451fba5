//! # Display Indexes
//!
//! Listings are stored by UUID but users refer to them by position: `1` is the first listing
//! added in this session, `2` the second, and so on. Since nothing is ever removed, a listing
//! keeps its index for the whole session.

use crate::error::{RealtyError, Result};
use crate::model::Listing;

#[derive(Debug, Clone)]
pub struct DisplayListing {
    pub index: usize,
    pub listing: Listing,
}

/// Assigns 1-based indexes in store order.
pub fn index_listings(listings: Vec<Listing>) -> Vec<DisplayListing> {
    listings
        .into_iter()
        .enumerate()
        .map(|(i, listing)| DisplayListing {
            index: i + 1,
            listing,
        })
        .collect()
}

/// Parses a user-supplied index. Accepts an optional leading `#`.
pub fn parse_index(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    match digits.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RealtyError::InvalidIndex(input.to_string())),
    }
}

pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<usize>> {
    inputs.iter().map(|s| parse_index(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn indexes_start_at_one() {
        let listings = vec![
            fixtures::listing(fixtures::house(), fixtures::rental("1")),
            fixtures::listing(fixtures::apartment(), fixtures::rental("2")),
        ];
        let indexed = index_listings(listings);
        let indexes: Vec<_> = indexed.iter().map(|dl| dl.index).collect();
        assert_eq!(indexes, vec![1, 2]);
    }

    #[test]
    fn parse_accepts_plain_and_hash_prefixed() {
        assert_eq!(parse_index("3").unwrap(), 3);
        assert_eq!(parse_index("#12").unwrap(), 12);
        assert_eq!(parse_index(" 4 ").unwrap(), 4);
    }

    #[test]
    fn parse_rejects_zero_negative_and_text() {
        for bad in ["0", "-1", "one", "", "#"] {
            assert!(
                matches!(parse_index(bad), Err(RealtyError::InvalidIndex(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn parse_indexes_fails_on_first_bad_entry() {
        assert_eq!(parse_indexes(&["1", "2"]).unwrap(), vec![1, 2]);
        assert!(parse_indexes(&["1", "x"]).is_err());
    }
}
