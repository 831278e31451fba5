//! # Realty Architecture
//!
//! Realty is a small listings library for a real-estate agent, with an interactive shell as
//! its client. Listings are entered by answering questions, kept in memory, and browsed with
//! a handful of commands.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and shell lines, renders output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → listings)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, view, cheapest, config                        │
//! │  - Talks to users only through the Prompter trait           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ListingStore trait, InMemoryStore                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Composition
//!
//! The interesting part is [`model`] and [`attributes`]: a listing is a
//! [`attributes::PropertyDetails`] plus one physical group (house or apartment) plus one
//! transaction group (purchase or rental). Each group asks its own questions and renders its
//! own section; [`model::ListingKind::lookup`] picks the combination from the agent's two
//! answers.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`attributes`]: Attribute groups and enumerated answers
//! - [`model`]: `Listing`, `ListingKind` and the dispatch table
//! - [`prompt`]: Question asking, free text and enumerated
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`index`]: Display indexes (1, 2, 3…)
//! - [`config`]: Session settings
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive shell and templated rendering (binary only)

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod prompt;
pub mod store;
