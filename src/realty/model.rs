//! # Listings
//!
//! A [`Listing`] is assembled from the attribute groups in [`crate::attributes`]. The two
//! orthogonal choices, physical type and transaction type, select one of four concrete
//! [`ListingKind`]s through [`ListingKind::lookup`]. The kind then drives which questions are
//! asked and, through the groups it composes, what gets displayed.

use crate::attributes::{
    Amount, AttributeGroup, Physical, PropertyDetails, Prompted, Section, Transaction,
};
use crate::error::Result;
use crate::prompt::Prompter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PhysicalKind {
    House,
    Apartment,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransactionKind {
    Purchase,
    Rental,
}

/// The concrete combination of a physical type and a transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    HouseRental,
    HousePurchase,
    ApartmentRental,
    ApartmentPurchase,
}

impl ListingKind {
    /// The dispatch table: one concrete kind per pair of choices.
    pub fn lookup(physical: PhysicalKind, transaction: TransactionKind) -> Self {
        match (physical, transaction) {
            (PhysicalKind::House, TransactionKind::Rental) => ListingKind::HouseRental,
            (PhysicalKind::House, TransactionKind::Purchase) => ListingKind::HousePurchase,
            (PhysicalKind::Apartment, TransactionKind::Rental) => ListingKind::ApartmentRental,
            (PhysicalKind::Apartment, TransactionKind::Purchase) => ListingKind::ApartmentPurchase,
        }
    }

    pub fn parts(self) -> (PhysicalKind, TransactionKind) {
        match self {
            ListingKind::HouseRental => (PhysicalKind::House, TransactionKind::Rental),
            ListingKind::HousePurchase => (PhysicalKind::House, TransactionKind::Purchase),
            ListingKind::ApartmentRental => (PhysicalKind::Apartment, TransactionKind::Rental),
            ListingKind::ApartmentPurchase => (PhysicalKind::Apartment, TransactionKind::Purchase),
        }
    }

    pub fn physical(self) -> PhysicalKind {
        self.parts().0
    }

    pub fn transaction(self) -> TransactionKind {
        self.parts().1
    }

    /// Asks every question this kind needs: the shared property questions first, then the
    /// physical group's, then the transaction group's.
    pub fn prompt(self, prompter: &mut dyn Prompter) -> Result<Listing> {
        let (physical, transaction) = self.parts();
        let property = PropertyDetails::prompt(prompter)?;
        let physical = Physical::prompt_for(physical, prompter)?;
        let transaction = Transaction::prompt_for(transaction, prompter)?;
        Ok(Listing::new(property, physical, transaction))
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (physical, transaction) = self.parts();
        write!(f, "{} {}", physical, transaction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Metadata {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub metadata: Metadata,
    pub property: PropertyDetails,
    pub physical: Physical,
    pub transaction: Transaction,
}

impl Listing {
    pub fn new(property: PropertyDetails, physical: Physical, transaction: Transaction) -> Self {
        Self {
            metadata: Metadata::new(),
            property,
            physical,
            transaction,
        }
    }

    pub fn kind(&self) -> ListingKind {
        ListingKind::lookup(self.physical.kind(), self.transaction.kind())
    }

    /// Display sections in output order.
    pub fn sections(&self) -> Vec<Section> {
        vec![
            self.property.section(),
            self.physical.section(),
            self.transaction.section(),
        ]
    }

    pub fn rent(&self) -> Option<&Amount> {
        match &self.transaction {
            Transaction::Rental(rental) => Some(&rental.rent),
            Transaction::Purchase(_) => None,
        }
    }

    /// Price plus taxes for purchases whose figures are both readable.
    pub fn purchase_cost(&self) -> Option<f64> {
        match &self.transaction {
            Transaction::Purchase(purchase) => purchase.total_cost(),
            Transaction::Rental(_) => None,
        }
    }
}
