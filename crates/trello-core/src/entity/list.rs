//! Lists (board columns) and card placement.

use log::info;

use super::{Card, Entity, Field, FieldKind, Fields};
use crate::{
    error::Result,
    position::insertion_position,
    transport::{QueryParams, Request, Transport, Verb},
};

/// A list on a board, holding cards ordered by `pos`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    fields: Fields,
}

impl Entity for List {
    const PATH: &'static str = "/lists";
    const NAME: &'static str = "list";
    const FIELDS: &'static [Field] = &[
        Field::new("name", FieldKind::Str),
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

impl List {
    pub fn name(&mut self, transport: &dyn Transport) -> Result<String> {
        self.get(transport, "name")
    }

    pub fn closed(&mut self, transport: &dyn Transport) -> Result<bool> {
        self.get(transport, "closed")
    }

    /// Cards in this list, in the order the server returns them.
    pub fn cards(&self, transport: &dyn Transport) -> Result<Vec<Card>> {
        let mut params = QueryParams::new();
        params.insert("fields".to_string(), "id,name,pos".to_string());
        self.children(transport, params)
    }

    /// Creates `card` in this list at visual index `index`.
    ///
    /// Negative indices count from the end. The card's schema fields are sent
    /// together with `idList` and the computed `pos`, and the server's reply
    /// (carrying the new `id` and canonical `pos`) is merged into `card`.
    pub fn insert(&self, transport: &dyn Transport, index: i64, card: &mut Card) -> Result<()> {
        let list_id = self.require_id()?;
        let pos = insertion_position(&self.positions(transport, None)?, index);

        let request = Request::new(Card::PATH)
            .verb(Verb::Post)
            .params(card.to_query_parameters())
            .param("idList", list_id)
            .param("pos", pos.to_string());

        card.merge(transport.execute(request)?)?;
        info!(
            "Created card {} in list {list_id} at pos {pos}",
            card.id().unwrap_or("?")
        );
        Ok(())
    }

    /// Creates `card` after the last card of this list.
    pub fn append(&self, transport: &dyn Transport, card: &mut Card) -> Result<()> {
        self.insert(transport, i64::MAX, card)
    }

    /// Moves an existing card into this list at visual index `index`.
    ///
    /// The card itself is left out when computing the neighbours, so moving
    /// within the same list behaves like removing and re-inserting it.
    pub fn move_card(&self, transport: &dyn Transport, index: i64, card: &mut Card) -> Result<()> {
        let list_id = self.require_id()?;
        let card_id = card.require_id()?.to_string();
        let pos = insertion_position(&self.positions(transport, Some(&card_id))?, index);

        let request = Request::new(card.resource_path()?)
            .verb(Verb::Put)
            .param("idList", list_id)
            .param("pos", pos.to_string());

        card.merge(transport.execute(request)?)?;
        info!("Moved card {card_id} to list {list_id} at pos {pos}");
        Ok(())
    }

    fn positions(&self, transport: &dyn Transport, skip: Option<&str>) -> Result<Vec<f64>> {
        self.cards(transport)?
            .into_iter()
            .filter(|card| skip.is_none() || card.id() != skip)
            .map(|mut card| card.pos(transport))
            .collect()
    }
}
