//! Parameter structures for facade operations.
//!
//! These structures are free of CLI framework derives so the core can be
//! driven from any interface. The CLI defines its own clap argument structs
//! and converts them with `TryFrom` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│  Trello facade  │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::entity::BoardFilter;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for listing the member's boards.
#[derive(Debug, Clone, Default)]
pub struct ListBoards {
    /// Restrict the listing to this single board
    pub board_id: Option<String>,
    /// Which boards to include when listing all of them
    pub filter: BoardFilter,
}

/// Parameters for creating a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCard {
    /// List to create the card in
    pub list_id: String,
    /// Title of the card (required)
    pub name: String,
    /// Optional description
    pub desc: Option<String>,
    /// Optional due date, RFC 3339 timestamp or `YYYY-MM-DD`
    pub due: Option<String>,
    /// Label ids to attach
    #[serde(default)]
    pub labels: Vec<String>,
    /// Visual index to insert at; negative counts from the end, `None`
    /// appends
    pub position: Option<i64>,
    /// Optional comment posted after creation
    pub comment: Option<String>,
}

/// Parameters for moving a card to a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveCard {
    /// Card to move
    pub card_id: String,
    /// Destination list (may be the card's current list)
    pub list_id: String,
    /// Visual index in the destination list; `None` appends
    pub position: Option<i64>,
}
