//! Physical type of a listing: what is being sold or rented.

use super::choices::{Balcony, Garage, Laundry, YesNo};
use super::{AttributeGroup, Prompted, Section};
use crate::error::Result;
use crate::model::PhysicalKind;
use crate::prompt::{ask_choice, Prompter};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseDetails {
    pub stories: String,
    pub garage: Garage,
    pub fenced: YesNo,
}

impl Prompted for HouseDetails {
    fn prompt(prompter: &mut dyn Prompter) -> Result<Self> {
        let fenced = ask_choice(prompter, "Is the yard fenced?")?;
        let garage = ask_choice(prompter, "Is there a garage?")?;
        let stories = prompter.ask("How many stories? ")?;
        Ok(Self {
            stories,
            garage,
            fenced,
        })
    }
}

impl AttributeGroup for HouseDetails {
    fn section(&self) -> Section {
        Section::new("HOUSE DETAILS")
            .field("# of stories", &self.stories)
            .field("garage", self.garage)
            .field("fenced yard", self.fenced)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentDetails {
    pub laundry: Laundry,
    pub balcony: Balcony,
}

impl Prompted for ApartmentDetails {
    fn prompt(prompter: &mut dyn Prompter) -> Result<Self> {
        let laundry = ask_choice(prompter, "What laundry facilities does the property have?")?;
        let balcony = ask_choice(prompter, "Does the property have a balcony?")?;
        Ok(Self { laundry, balcony })
    }
}

impl AttributeGroup for ApartmentDetails {
    fn section(&self) -> Section {
        Section::new("APARTMENT DETAILS")
            .field("laundry", self.laundry)
            .field("has balcony", self.balcony)
    }
}

#[enum_dispatch(AttributeGroup)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Physical {
    House(HouseDetails),
    Apartment(ApartmentDetails),
}

impl Physical {
    pub fn kind(&self) -> PhysicalKind {
        match self {
            Physical::House(_) => PhysicalKind::House,
            Physical::Apartment(_) => PhysicalKind::Apartment,
        }
    }

    /// Asks the questions of the group matching `kind`.
    pub fn prompt_for(kind: PhysicalKind, prompter: &mut dyn Prompter) -> Result<Self> {
        Ok(match kind {
            PhysicalKind::House => Physical::House(HouseDetails::prompt(prompter)?),
            PhysicalKind::Apartment => Physical::Apartment(ApartmentDetails::prompt(prompter)?),
        })
    }
}
