//! Board labels.

use super::{Entity, Field, FieldKind, Fields};
use crate::{error::Result, transport::Transport};

/// A label defined on a board. Cards reference labels through their
/// `idLabels` field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    fields: Fields,
}

impl Entity for Label {
    const PATH: &'static str = "/labels";
    const NAME: &'static str = "label";
    const FIELDS: &'static [Field] = &[
        Field::new("name", FieldKind::Str),
        Field::new("color", FieldKind::Str),
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

impl Label {
    pub fn name(&mut self, transport: &dyn Transport) -> Result<String> {
        self.get(transport, "name")
    }

    /// Colour of the label; colourless labels report `None`.
    pub fn color(&mut self, transport: &dyn Transport) -> Result<Option<String>> {
        self.get(transport, "color")
    }
}
