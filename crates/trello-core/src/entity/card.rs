//! Cards.

use log::info;

use super::{Entity, Field, FieldKind, Fields};
use crate::{
    error::Result,
    transport::{Request, Transport, Verb},
};

/// A card within a list.
///
/// New cards are built locally with [`Entity::new`] plus
/// [`Entity::set_field`] and persisted by [`List::insert`](super::List::insert).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    fields: Fields,
}

impl Entity for Card {
    const PATH: &'static str = "/cards";
    const NAME: &'static str = "card";
    const FIELDS: &'static [Field] = &[
        Field::new("name", FieldKind::Str),
        Field::new("desc", FieldKind::Str),
        Field::new("due", FieldKind::Str),
        Field::new("dueComplete", FieldKind::Bool),
        Field::new("idLabels", FieldKind::List),
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

impl Card {
    pub fn name(&mut self, transport: &dyn Transport) -> Result<String> {
        self.get(transport, "name")
    }

    pub fn desc(&mut self, transport: &dyn Transport) -> Result<String> {
        self.get(transport, "desc")
    }

    /// Ordering key within the card's list.
    pub fn pos(&mut self, transport: &dyn Transport) -> Result<f64> {
        self.get(transport, "pos")
    }

    pub fn due(&mut self, transport: &dyn Transport) -> Result<Option<String>> {
        self.get(transport, "due")
    }

    pub fn id_list(&mut self, transport: &dyn Transport) -> Result<String> {
        self.get(transport, "idList")
    }

    pub fn id_labels(&mut self, transport: &dyn Transport) -> Result<Vec<String>> {
        self.get(transport, "idLabels")
    }

    /// Posts a comment on the card.
    pub fn add_comment(&self, transport: &dyn Transport, text: &str) -> Result<()> {
        let id = self.require_id()?;
        let request = Request::new(format!("{}/actions/comments", self.resource_path()?))
            .verb(Verb::Post)
            .param("id", id)
            .param("text", text);

        transport.execute(request)?;
        info!("Commented on card {id}");
        Ok(())
    }

    /// Deletes the card on the server. The local copy is left untouched.
    pub fn delete(&self, transport: &dyn Transport) -> Result<()> {
        let request = Request::new(self.resource_path()?).verb(Verb::Delete);

        transport.execute(request)?;
        info!("Deleted card {}", self.require_id()?);
        Ok(())
    }
}
