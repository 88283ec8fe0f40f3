//! Lazily refreshed wrappers around remote API resources.
//!
//! Each resource ([`Board`], [`List`], [`Card`], [`Label`]) keeps the JSON
//! fields it has seen so far in a [`Fields`] map and implements [`Entity`],
//! which supplies the shared behaviour:
//!
//! - reading a field that is not loaded yet triggers exactly one refresh when
//!   the entity has an `id`; a field still missing afterwards is an error
//! - an entity without an `id` never touches the network on reads
//! - local writes are plain map updates and are only sent by an explicit
//!   write operation
//! - [`Entity::to_query_parameters`] projects the fields named in the
//!   resource's static schema into string-encoded query parameters
//!
//! ```text
//! ┌──────────────┐ get_field  ┌──────────────┐  execute   ┌──────────────┐
//! │  CLI / caller│───────────▶│ Entity model │───────────▶│  Transport   │
//! └──────────────┘            └──────────────┘◀───────────└──────────────┘
//!                                     merge (server wins)
//! ```

use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{
    error::{Result, TrelloError},
    transport::{QueryParams, Request, Transport},
};

pub mod board;
pub mod card;
pub mod label;
pub mod list;

pub use board::{Board, BoardFilter};
pub use card::Card;
pub use label::Label;
pub use list::List;

/// Encoding applied to a schema field when it is sent as a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Passed through unchanged
    Str,
    /// Encoded as literal `true` / `false`
    Bool,
    /// Elements joined with commas
    List,
    /// Stringified directly
    Other,
}

impl FieldKind {
    /// Encodes `value` according to this kind.
    pub fn encode(self, value: &Value) -> String {
        match self {
            FieldKind::Str | FieldKind::Other => plain(value),
            FieldKind::Bool => truthy(value).to_string(),
            FieldKind::List => match value {
                Value::Array(items) => items.iter().map(plain).collect::<Vec<_>>().join(","),
                other => plain(other),
            },
        }
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// One entry of a resource's query schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Projects the schema fields present in `fields` into query parameters.
pub fn project(fields: &Fields, schema: &[Field]) -> QueryParams {
    schema
        .iter()
        .filter_map(|field| {
            fields
                .get(field.name)
                .map(|value| (field.name.to_string(), field.kind.encode(value)))
        })
        .collect()
}

/// Local field storage of a single entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Unions `other` into this map; values from `other` win on collision.
    pub fn merge(&mut self, other: Map<String, Value>) {
        self.0.extend(other);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }
}

/// Shared behaviour of every API resource.
pub trait Entity: Sized {
    /// Path segment of the resource collection, e.g. `/boards`
    const PATH: &'static str;
    /// Human-readable resource name used in error messages
    const NAME: &'static str;
    /// Fields sent by [`Entity::to_query_parameters`]
    const FIELDS: &'static [Field];

    fn from_fields(fields: Fields) -> Self;
    fn fields(&self) -> &Fields;
    fn fields_mut(&mut self) -> &mut Fields;

    /// Creates an entity with no fields and no `id`.
    fn new() -> Self {
        Self::from_fields(Fields::default())
    }

    /// Creates a reference to a persisted entity; every other field is loaded
    /// on first access.
    fn with_id(id: impl Into<String>) -> Self {
        let mut entity = Self::new();
        entity.set_field("id", id.into());
        entity
    }

    /// Wraps a JSON object returned by the server.
    ///
    /// # Errors
    ///
    /// Returns `TrelloError::Serialization` if `value` is not an object.
    fn from_value(value: Value) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_value(value)?;
        Ok(Self::from_fields(Fields::new(map)))
    }

    /// Wraps a JSON array returned by the server, element by element.
    fn from_array(value: Value) -> Result<Vec<Self>> {
        let items: Vec<Map<String, Value>> = serde_json::from_value(value)?;
        Ok(items
            .into_iter()
            .map(|map| Self::from_fields(Fields::new(map)))
            .collect())
    }

    /// Fetches the entity with the given id.
    ///
    /// # Errors
    ///
    /// Returns `TrelloError::Client` if the server does not know the id and
    /// `TrelloError::Server` on a server fault.
    fn fetch_by_id(transport: &dyn Transport, id: &str) -> Result<Self> {
        let value = transport.execute(Request::new(format!("{}/{}", Self::PATH, id)))?;
        Self::from_value(value)
    }

    /// The server-assigned identifier, if the entity has been persisted.
    fn id(&self) -> Option<&str> {
        self.fields().get("id").and_then(Value::as_str)
    }

    /// The identifier, or a `MissingField` error for unsaved entities.
    fn require_id(&self) -> Result<&str> {
        self.id().ok_or_else(|| TrelloError::MissingField {
            resource: Self::NAME,
            field: "id".to_string(),
        })
    }

    /// `PATH/<id>` of this entity.
    fn resource_path(&self) -> Result<String> {
        Ok(format!("{}/{}", Self::PATH, self.require_id()?))
    }

    /// Returns a field, refreshing once from the server if it is not loaded
    /// and the entity has an `id`.
    ///
    /// # Errors
    ///
    /// Returns `TrelloError::MissingField` if the field is still absent after
    /// the refresh (or immediately, for an entity without `id`), and any
    /// transport error raised by the refresh.
    fn get_field(&mut self, transport: &dyn Transport, name: &str) -> Result<&Value> {
        if !self.fields().contains(name) && self.id().is_some() {
            debug!("{} field '{name}' not loaded, refreshing", Self::NAME);
            self.refresh(transport)?;
        }

        self.fields()
            .get(name)
            .ok_or_else(|| TrelloError::MissingField {
                resource: Self::NAME,
                field: name.to_string(),
            })
    }

    /// [`Entity::get_field`] deserialized into `T`.
    fn get<T: DeserializeOwned>(&mut self, transport: &dyn Transport, name: &str) -> Result<T> {
        let value = self.get_field(transport, name)?.clone();
        Ok(serde_json::from_value(value)?)
    }

    /// Sets a field locally. Nothing is sent to the server.
    fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        self.fields_mut().insert(name, value.into());
    }

    /// Re-fetches the entity by `id` and merges the result, server values
    /// winning over local ones.
    fn refresh(&mut self, transport: &dyn Transport) -> Result<()> {
        let value = transport.execute(Request::new(self.resource_path()?))?;
        self.merge(value)
    }

    /// Merges a server response object into local storage.
    fn merge(&mut self, value: Value) -> Result<()> {
        let map: Map<String, Value> = serde_json::from_value(value)?;
        self.fields_mut().merge(map);
        Ok(())
    }

    /// Schema fields that are set locally, encoded as query parameters.
    fn to_query_parameters(&self) -> QueryParams {
        project(self.fields(), Self::FIELDS)
    }

    /// Pretty-printed JSON of every locally known field.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.fields())?)
    }

    /// Fetches the child collection `PATH/<id><C::PATH>`.
    fn children<C: Entity>(&self, transport: &dyn Transport, params: QueryParams) -> Result<Vec<C>> {
        let path = format!("{}{}", self.resource_path()?, C::PATH);
        C::from_array(transport.execute(Request::new(path).params(params))?)
    }
}
