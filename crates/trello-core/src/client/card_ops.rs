//! Card operations for the Trello client.

use super::Trello;
use crate::{
    dates::parse_due,
    entity::{Card, Entity, List},
    error::{Result, TrelloError},
    params::{CreateCard, Id, MoveCard},
};

impl Trello {
    /// Cards in the given list.
    pub fn cards(&self, params: &Id) -> Result<Vec<Card>> {
        List::with_id(params.id.as_str()).cards(self.transport())
    }

    /// Creates a card at the requested position (or at the end) and posts
    /// the optional comment on it.
    ///
    /// # Errors
    ///
    /// Returns `TrelloError::InvalidArgument` for an empty name or an
    /// unparseable due date, before anything is sent.
    pub fn create_card(&self, params: &CreateCard) -> Result<Card> {
        if params.name.trim().is_empty() {
            return Err(TrelloError::invalid_argument("name").with_reason("must not be empty"));
        }

        let mut card = Card::new();
        card.set_field("name", params.name.as_str());
        if let Some(desc) = &params.desc {
            card.set_field("desc", desc.as_str());
        }
        if let Some(due) = &params.due {
            card.set_field("due", parse_due(due)?);
        }
        if !params.labels.is_empty() {
            card.set_field("idLabels", params.labels.clone());
        }

        let list = List::with_id(params.list_id.as_str());
        match params.position {
            Some(index) => list.insert(self.transport(), index, &mut card)?,
            None => list.append(self.transport(), &mut card)?,
        }

        if let Some(comment) = &params.comment {
            card.add_comment(self.transport(), comment)?;
        }

        Ok(card)
    }

    /// Deletes a card.
    pub fn delete_card(&self, params: &Id) -> Result<()> {
        Card::with_id(params.id.as_str()).delete(self.transport())
    }

    /// Moves a card to a list, at the requested position or at the end.
    pub fn move_card(&self, params: &MoveCard) -> Result<Card> {
        let mut card = Card::with_id(params.card_id.as_str());
        let index = params.position.unwrap_or(i64::MAX);

        List::with_id(params.list_id.as_str()).move_card(self.transport(), index, &mut card)?;
        Ok(card)
    }
}
