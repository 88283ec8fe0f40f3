//! Request/response plumbing between the entity model and the REST API.
//!
//! Every entity operation is expressed as a single [`Request`] handed to a
//! [`Transport`]. The transport is constructed once at startup and passed by
//! reference into each operation, so tests can substitute an in-memory
//! implementation for [`HttpTransport`].

use std::{collections::BTreeMap, fmt};

use serde_json::Value;

use crate::error::Result;

pub mod http;

pub use http::HttpTransport;

/// Query parameters in string-encoded form, ordered by name.
pub type QueryParams = BTreeMap<String, String>;

/// HTTP verbs used against the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logical API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Path below the API root, starting with `/`
    pub path: String,
    /// Explicit verb; when unset it is derived from the presence of a body
    pub verb: Option<Verb>,
    pub params: QueryParams,
    pub body: Option<Value>,
}

impl Request {
    /// Creates a request for `path` with no parameters and no body.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            verb: None,
            params: QueryParams::new(),
            body: None,
        }
    }

    /// Sets an explicit verb.
    pub fn verb(mut self, verb: Verb) -> Self {
        self.verb = Some(verb);
        self
    }

    /// Adds a single query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Adds every parameter from `params`, replacing existing names.
    pub fn params(mut self, params: QueryParams) -> Self {
        self.params.extend(params);
        self
    }

    /// Attaches a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the verb to send: the explicit one, else GET without a body
    /// and POST with one.
    pub fn effective_verb(&self) -> Verb {
        match (self.verb, &self.body) {
            (Some(verb), _) => verb,
            (None, None) => Verb::Get,
            (None, Some(_)) => Verb::Post,
        }
    }
}

/// Executes API requests and classifies failures.
///
/// Implementations must return the decoded JSON body for statuses below 400,
/// `TrelloError::Client` for 4xx and `TrelloError::Server` for 5xx. A single
/// attempt is made per call.
pub trait Transport {
    fn execute(&self, request: Request) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: Request) -> Result<Value> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: Request) -> Result<Value> {
        (**self).execute(request)
    }
}
