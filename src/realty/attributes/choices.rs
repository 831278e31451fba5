//! Enumerated answers.
//!
//! Every question with a fixed set of valid responses is backed by one of these enums.
//! Parsing is case-insensitive and display is always lowercase, so whatever casing the
//! user typed, the stored value prints the same way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A closed set of answers a question accepts.
///
/// The option order shown to the user is the declaration order of the enum.
pub trait Choice: FromStr + fmt::Display + IntoEnumIterator + Copy {
    fn options() -> Vec<String> {
        Self::iter().map(|choice| choice.to_string()).collect()
    }
}

impl<T> Choice for T where T: FromStr + fmt::Display + IntoEnumIterator + Copy {}

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
pub enum Laundry {
    Coin,
    Ensuite,
    None,
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
pub enum Balcony {
    Yes,
    No,
    Solarium,
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
pub enum Garage {
    Attached,
    Detached,
    None,
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
pub enum YesNo {
    Yes,
    No,
}
