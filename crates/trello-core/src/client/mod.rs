//! High-level client API used by command-line front ends.
//!
//! [`Trello`] owns the single [`Transport`] of the process and exposes one
//! method per user-facing operation. Each method builds or looks up entities
//! from the [`entity`](crate::entity) model and lets them talk to the
//! transport:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Trello      │    │  Entity model   │    │    Transport    │
//! │ (board_ops,     │───▶│ (Board, List,   │───▶│ (HttpTransport) │
//! │  card_ops)      │    │  Card, Label)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use trello_core::{params::ListBoards, Entity, TrelloBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let trello = TrelloBuilder::new().build()?;
//!
//! for mut board in trello.list_boards(&ListBoards::default())? {
//!     let name = board.name(trello.transport())?;
//!     println!("{} {name}", board.id().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use crate::transport::Transport;

pub mod board_ops;
pub mod builder;
pub mod card_ops;

pub use builder::TrelloBuilder;

/// Main client interface for boards, lists, cards and labels.
pub struct Trello {
    transport: Box<dyn Transport>,
}

impl Trello {
    /// Creates a client on top of an existing transport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The transport used for lazy field reads on returned entities.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
