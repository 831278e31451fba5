use super::{AttributeGroup, Prompted, Section};
use crate::error::Result;
use crate::prompt::Prompter;
use serde::{Deserialize, Serialize};

/// Attributes shared by every listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub square_feet: String,
    pub bedrooms: String,
    pub bathrooms: String,
}

impl PropertyDetails {
    pub fn new(
        square_feet: impl Into<String>,
        bedrooms: impl Into<String>,
        bathrooms: impl Into<String>,
    ) -> Self {
        Self {
            square_feet: square_feet.into(),
            bedrooms: bedrooms.into(),
            bathrooms: bathrooms.into(),
        }
    }
}

impl Prompted for PropertyDetails {
    fn prompt(prompter: &mut dyn Prompter) -> Result<Self> {
        let square_feet = prompter.ask("Enter the square feet: ")?;
        let bedrooms = prompter.ask("Enter number of bedrooms: ")?;
        let bathrooms = prompter.ask("Enter number of baths: ")?;
        Ok(Self {
            square_feet,
            bedrooms,
            bathrooms,
        })
    }
}

impl AttributeGroup for PropertyDetails {
    fn section(&self) -> Section {
        Section::new("PROPERTY DETAILS")
            .primary()
            .field("square footage", &self.square_feet)
            .field("bedrooms", &self.bedrooms)
            .field("bathrooms", &self.bathrooms)
    }
}
