//! Transaction type of a listing: how it changes hands.

use super::choices::YesNo;
use super::{AttributeGroup, Prompted, Section};
use crate::error::Result;
use crate::model::TransactionKind;
use crate::prompt::{ask_choice, Prompter};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A money figure as the agent typed it.
///
/// The raw text is what gets displayed. [`Amount::value`] is a best-effort numeric reading
/// used only for comparisons; currency symbols, thousands separators and whitespace are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> Option<f64> {
        let cleaned: String = self
            .0
            .chars()
            .filter(|c| !matches!(c, '$' | ',' | '_') && !c.is_whitespace())
            .collect();
        cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDetails {
    pub price: Amount,
    pub taxes: Amount,
}

impl PurchaseDetails {
    /// Price plus taxes, when both are readable numbers.
    pub fn total_cost(&self) -> Option<f64> {
        Some(self.price.value()? + self.taxes.value()?)
    }
}

impl Prompted for PurchaseDetails {
    fn prompt(prompter: &mut dyn Prompter) -> Result<Self> {
        let price = Amount::new(prompter.ask("What is the selling price? ")?);
        let taxes = Amount::new(prompter.ask("What are the estimated taxes? ")?);
        Ok(Self { price, taxes })
    }
}

impl AttributeGroup for PurchaseDetails {
    fn section(&self) -> Section {
        Section::new("PURCHASE DETAILS")
            .field("selling price", &self.price)
            .field("estimated taxes", &self.taxes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalDetails {
    pub rent: Amount,
    pub utilities: Amount,
    pub furnished: YesNo,
}

impl Prompted for RentalDetails {
    fn prompt(prompter: &mut dyn Prompter) -> Result<Self> {
        let rent = Amount::new(prompter.ask("What is the monthly rent? ")?);
        let utilities = Amount::new(prompter.ask("What are the estimated utilities? ")?);
        let furnished = ask_choice(prompter, "Is the property furnished?")?;
        Ok(Self {
            rent,
            utilities,
            furnished,
        })
    }
}

impl AttributeGroup for RentalDetails {
    fn section(&self) -> Section {
        Section::new("RENTAL DETAILS")
            .field("rent", &self.rent)
            .field("estimated utilities", &self.utilities)
            .field("furnished", self.furnished)
    }
}

#[enum_dispatch(AttributeGroup)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transaction {
    Purchase(PurchaseDetails),
    Rental(RentalDetails),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Purchase(_) => TransactionKind::Purchase,
            Transaction::Rental(_) => TransactionKind::Rental,
        }
    }

    /// Asks the questions of the group matching `kind`.
    pub fn prompt_for(kind: TransactionKind, prompter: &mut dyn Prompter) -> Result<Self> {
        Ok(match kind {
            TransactionKind::Purchase => Transaction::Purchase(PurchaseDetails::prompt(prompter)?),
            TransactionKind::Rental => Transaction::Rental(RentalDetails::prompt(prompter)?),
        })
    }
}
