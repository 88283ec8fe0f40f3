//! Boards and their child collections.

use std::{fmt, str::FromStr};

use super::{Entity, Field, FieldKind, Fields, Label, List};
use crate::{
    error::{Result, TrelloError},
    transport::{QueryParams, Request, Transport},
};

/// Which of the member's boards to return from [`Board::all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardFilter {
    All,
    Closed,
    Members,
    #[default]
    Open,
    Organization,
    Public,
    Starred,
}

impl BoardFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardFilter::All => "all",
            BoardFilter::Closed => "closed",
            BoardFilter::Members => "members",
            BoardFilter::Open => "open",
            BoardFilter::Organization => "organization",
            BoardFilter::Public => "public",
            BoardFilter::Starred => "starred",
        }
    }
}

impl fmt::Display for BoardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardFilter {
    type Err = TrelloError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(BoardFilter::All),
            "closed" => Ok(BoardFilter::Closed),
            "members" => Ok(BoardFilter::Members),
            "open" => Ok(BoardFilter::Open),
            "organization" => Ok(BoardFilter::Organization),
            "public" => Ok(BoardFilter::Public),
            "starred" => Ok(BoardFilter::Starred),
            other => Err(TrelloError::invalid_argument("filter")
                .with_reason(format!("invalid filter name '{other}'"))),
        }
    }
}

/// A Trello board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    fields: Fields,
}

impl Entity for Board {
    const PATH: &'static str = "/boards";
    const NAME: &'static str = "board";
    const FIELDS: &'static [Field] = &[
        Field::new("name", FieldKind::Str),
        Field::new("desc", FieldKind::Str),
        Field::new("closed", FieldKind::Bool),
    ];

    fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }
}

impl Board {
    /// Boards of the authenticated member, narrowed by `filter`.
    pub fn all(transport: &dyn Transport, filter: BoardFilter) -> Result<Vec<Board>> {
        let request = Request::new("/members/me/boards")
            .param("filter", filter.as_str())
            .param("fields", "id,name");
        Board::from_array(transport.execute(request)?)
    }

    /// Lists on this board.
    pub fn lists(&self, transport: &dyn Transport) -> Result<Vec<List>> {
        self.children(transport, QueryParams::new())
    }

    /// Labels defined on this board.
    pub fn labels(&self, transport: &dyn Transport) -> Result<Vec<Label>> {
        self.children(transport, QueryParams::new())
    }

    pub fn name(&mut self, transport: &dyn Transport) -> Result<String> {
        self.get(transport, "name")
    }

    pub fn desc(&mut self, transport: &dyn Transport) -> Result<String> {
        self.get(transport, "desc")
    }

    pub fn closed(&mut self, transport: &dyn Transport) -> Result<bool> {
        self.get(transport, "closed")
    }
}
