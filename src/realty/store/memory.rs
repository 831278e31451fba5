use super::ListingStore;
use crate::error::{RealtyError, Result};
use crate::model::Listing;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    listings: Vec<Listing>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingStore for InMemoryStore {
    fn save_listing(&mut self, listing: &Listing) -> Result<()> {
        match self
            .listings
            .iter_mut()
            .find(|existing| existing.metadata.id == listing.metadata.id)
        {
            Some(existing) => *existing = listing.clone(),
            None => self.listings.push(listing.clone()),
        }
        Ok(())
    }

    fn get_listing(&self, id: &Uuid) -> Result<Listing> {
        self.listings
            .iter()
            .find(|listing| &listing.metadata.id == id)
            .cloned()
            .ok_or(RealtyError::ListingNotFound(*id))
    }

    fn list_listings(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::attributes::choices::{Balcony, Garage, Laundry, YesNo};
    use crate::attributes::{
        ApartmentDetails, HouseDetails, Physical, PropertyDetails, PurchaseDetails,
        RentalDetails, Transaction,
    };

    pub fn house() -> Physical {
        Physical::House(HouseDetails {
            stories: "2".into(),
            garage: Garage::Attached,
            fenced: YesNo::Yes,
        })
    }

    pub fn apartment() -> Physical {
        Physical::Apartment(ApartmentDetails {
            laundry: Laundry::Ensuite,
            balcony: Balcony::Yes,
        })
    }

    pub fn rental(rent: &str) -> Transaction {
        Transaction::Rental(RentalDetails {
            rent: rent.into(),
            utilities: "100".into(),
            furnished: YesNo::No,
        })
    }

    pub fn purchase(price: &str, taxes: &str) -> Transaction {
        Transaction::Purchase(PurchaseDetails {
            price: price.into(),
            taxes: taxes.into(),
        })
    }

    pub fn listing(physical: Physical, transaction: Transaction) -> Listing {
        Listing::new(PropertyDetails::new("1000", "2", "1"), physical, transaction)
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_listing(mut self, listing: Listing) -> Self {
            self.store.save_listing(&listing).unwrap();
            self
        }

        pub fn with_house_rental(self, rent: &str) -> Self {
            self.with_listing(listing(house(), rental(rent)))
        }

        pub fn with_apartment_rental(self, rent: &str) -> Self {
            self.with_listing(listing(apartment(), rental(rent)))
        }

        pub fn with_house_purchase(self, price: &str, taxes: &str) -> Self {
            self.with_listing(listing(house(), purchase(price, taxes)))
        }

        pub fn with_apartment_purchase(self, price: &str, taxes: &str) -> Self {
            self.with_listing(listing(apartment(), purchase(price, taxes)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{self, StoreFixture};
    use super::*;

    #[test]
    fn save_and_get() {
        let mut store = InMemoryStore::new();
        let listing = fixtures::listing(fixtures::house(), fixtures::rental("1000"));
        store.save_listing(&listing).unwrap();

        let loaded = store.get_listing(&listing.metadata.id).unwrap();
        assert_eq!(loaded, listing);
    }

    #[test]
    fn get_unknown_id_fails() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        let err = store.get_listing(&id).unwrap_err();
        assert!(matches!(err, RealtyError::ListingNotFound(missing) if missing == id));
    }

    #[test]
    fn list_keeps_insertion_order() {
        let store = StoreFixture::new()
            .with_house_rental("1")
            .with_apartment_rental("2")
            .with_house_purchase("3", "0")
            .store;

        let rents: Vec<_> = store
            .list_listings()
            .unwrap()
            .iter()
            .map(|l| l.rent().map(|r| r.to_string()))
            .collect();
        assert_eq!(
            rents,
            vec![Some("1".to_string()), Some("2".to_string()), None]
        );
    }

    #[test]
    fn saving_existing_id_replaces_in_place() {
        let mut store = StoreFixture::new()
            .with_house_rental("1000")
            .with_apartment_rental("2000")
            .store;

        let mut first = store.list_listings().unwrap().remove(0);
        first.transaction = fixtures::rental("900");
        store.save_listing(&first).unwrap();

        let listings = store.list_listings().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(listings[0].metadata.id, first.metadata.id);
        assert_eq!(listings[0].rent().unwrap().as_str(), "900");
    }

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list_listings().unwrap().is_empty());
    }
}
