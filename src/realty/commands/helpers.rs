use crate::error::{RealtyError, Result};
use crate::index::{index_listings, DisplayListing};
use crate::store::ListingStore;

pub fn indexed_listings<S: ListingStore>(store: &S) -> Result<Vec<DisplayListing>> {
    let listings = store.list_listings()?;
    Ok(index_listings(listings))
}

pub fn listings_by_indexes<S: ListingStore>(
    store: &S,
    indexes: &[usize],
) -> Result<Vec<DisplayListing>> {
    let indexed = indexed_listings(store)?;

    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|dl| dl.index == *idx)
                .cloned()
                .ok_or(RealtyError::IndexNotFound(*idx))
        })
        .collect()
}

/// The entry with the smallest key, skipping entries without one. Ties keep the earlier entry.
pub fn cheapest_by<F>(listings: Vec<DisplayListing>, mut cost: F) -> Option<DisplayListing>
where
    F: FnMut(&DisplayListing) -> Option<f64>,
{
    let mut best: Option<(f64, DisplayListing)> = None;
    for dl in listings {
        let Some(value) = cost(&dl) else {
            continue;
        };
        let is_cheaper = match &best {
            Some((lowest, _)) => value < *lowest,
            None => true,
        };
        if is_cheaper {
            best = Some((value, dl));
        }
    }
    best.map(|(_, dl)| dl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_indexes_in_requested_order() {
        let store = StoreFixture::new()
            .with_house_rental("1")
            .with_house_rental("2")
            .with_house_rental("3")
            .store;

        let found = listings_by_indexes(&store, &[3, 1]).unwrap();
        let indexes: Vec<_> = found.iter().map(|dl| dl.index).collect();
        assert_eq!(indexes, vec![3, 1]);
        assert_eq!(found[0].listing.rent().unwrap().as_str(), "3");
    }

    #[test]
    fn unknown_index_is_an_error() {
        let store = StoreFixture::new().with_house_rental("1").store;
        let err = listings_by_indexes(&store, &[2]).unwrap_err();
        assert!(matches!(err, RealtyError::IndexNotFound(2)));
    }

    #[test]
    fn cheapest_by_keeps_first_on_tie() {
        let store = StoreFixture::new()
            .with_house_rental("500")
            .with_apartment_rental("500")
            .store;
        let listings = indexed_listings(&store).unwrap();

        let best = cheapest_by(listings, |dl| dl.listing.rent().and_then(|r| r.value())).unwrap();
        assert_eq!(best.index, 1);
    }

    #[test]
    fn cheapest_by_skips_missing_keys() {
        let store = StoreFixture::new()
            .with_house_rental("n/a")
            .with_apartment_rental("700")
            .store;
        let listings = indexed_listings(&store).unwrap();

        let best = cheapest_by(listings, |dl| dl.listing.rent().and_then(|r| r.value())).unwrap();
        assert_eq!(best.index, 2);
    }

    #[test]
    fn cheapest_by_empty_is_none() {
        assert!(cheapest_by(Vec::new(), |_| Some(1.0)).is_none());
    }
}
