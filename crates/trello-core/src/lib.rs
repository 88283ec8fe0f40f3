//! Core library for the trello-cli command-line client.
//!
//! This crate provides a thin resource model over the Trello REST API:
//! boards, lists, cards and labels wrapped as lazily refreshing entities, a
//! fractional-position algorithm for placing cards within a list, and the
//! transport and configuration plumbing they need.
//!
//! # Architecture
//!
//! - **Transport** ([`transport`]): one [`Transport::execute`] call per API
//!   request, with 4xx/5xx classified into client and server errors
//! - **Entity model** ([`entity`]): dictionary-like field storage, lazy
//!   refresh on first access of a missing field, schema-driven query
//!   projection and relationship accessors
//! - **Positional insertion** ([`position`]): ordering keys for inserting a
//!   card at any visual index without renumbering its siblings
//! - **Client facade** ([`client`]): the operations the CLI exposes, built by
//!   [`TrelloBuilder`] from the on-disk credentials
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trello_core::{params::CreateCard, Entity, TrelloBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let trello = TrelloBuilder::new().build()?;
//!
//! let card = trello.create_card(&CreateCard {
//!     list_id: "5f1a2b3c4d5e6f7a8b9c0d1e".to_string(),
//!     name: "Write release notes".to_string(),
//!     position: Some(0),
//!     ..CreateCard::default()
//! })?;
//! println!("Created card {}", card.id().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dates;
pub mod display;
pub mod entity;
pub mod error;
pub mod params;
pub mod position;
pub mod transport;

// Re-export commonly used types
pub use client::{Trello, TrelloBuilder};
pub use config::Config;
pub use display::Table;
pub use entity::{Board, BoardFilter, Card, Entity, Label, List};
pub use error::{Result, TrelloError};
pub use params::{CreateCard, Id, ListBoards, MoveCard};
pub use position::{insertion_position, parse_index};
pub use transport::{HttpTransport, QueryParams, Request, Transport, Verb};
