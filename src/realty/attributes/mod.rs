//! # Attribute Groups
//!
//! A listing is not one big record: it is the composition of three independent attribute
//! groups.
//!
//! ```text
//!   PropertyDetails        every listing (square footage, bedrooms, bathrooms)
//! + Physical               House(HouseDetails) | Apartment(ApartmentDetails)
//! + Transaction            Purchase(PurchaseDetails) | Rental(RentalDetails)
//! ```
//!
//! Each group owns three things and nothing else:
//!
//! 1. **Fields**: its own struct.
//! 2. **Questions**: [`Prompted::prompt`] asks only for its own fields.
//! 3. **Display**: [`AttributeGroup::section`] renders only its own piece of the output.
//!
//! Because groups never reach into each other, the physical and transaction axes combine
//! freely. Which combination gets built is decided by [`crate::model::ListingKind`].

use crate::error::Result;
use crate::prompt::Prompter;
use enum_dispatch::enum_dispatch;
use serde::Serialize;

pub mod choices;
pub mod physical;
pub mod property;
pub mod transaction;

pub use physical::{ApartmentDetails, HouseDetails, Physical};
pub use property::PropertyDetails;
pub use transaction::{Amount, PurchaseDetails, RentalDetails, Transaction};

/// A single `label: value` line of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// One group's contribution to a listing's display.
///
/// A primary section is the opening block of a listing: its heading is underlined and a
/// blank line follows its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub primary: bool,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(heading: &'static str) -> Self {
        Self {
            heading,
            primary: false,
            fields: Vec::new(),
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn field(mut self, label: &'static str, value: impl ToString) -> Self {
        self.fields.push(Field {
            label,
            value: value.to_string(),
        });
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

#[enum_dispatch]
pub trait AttributeGroup {
    fn section(&self) -> Section;
}

/// Groups that can be filled in interactively.
pub trait Prompted: Sized {
    fn prompt(prompter: &mut dyn Prompter) -> Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_builder_keeps_field_order() {
        let section = Section::new("TEST DETAILS")
            .field("first", 1)
            .field("second", "two");

        assert!(!section.primary);
        let labels: Vec<_> = section.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(section.value("second"), Some("two"));
        assert_eq!(section.value("third"), None);
    }

    #[test]
    fn primary_marks_section() {
        assert!(Section::new("X").primary().primary);
    }
}
