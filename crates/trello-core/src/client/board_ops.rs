//! Board, list and label queries for the Trello client.

use super::Trello;
use crate::{
    entity::{Board, Entity, Label, List},
    error::Result,
    params::{Id, ListBoards},
};

impl Trello {
    /// Lists the member's boards, or just the one named by `board_id`.
    pub fn list_boards(&self, params: &ListBoards) -> Result<Vec<Board>> {
        match &params.board_id {
            Some(id) => Ok(vec![Board::fetch_by_id(self.transport(), id)?]),
            None => Board::all(self.transport(), params.filter),
        }
    }

    /// Lists on the given board.
    pub fn lists(&self, params: &Id) -> Result<Vec<List>> {
        Board::with_id(params.id.as_str()).lists(self.transport())
    }

    /// Labels defined on the given board.
    pub fn labels(&self, params: &Id) -> Result<Vec<Label>> {
        Board::with_id(params.id.as_str()).labels(self.transport())
    }
}
