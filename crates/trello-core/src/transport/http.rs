//! Blocking HTTP transport backed by `reqwest`.

use log::debug;
use reqwest::{blocking::Client, Method, StatusCode, Url};
use serde_json::Value;

use super::{Request, Transport, Verb};
use crate::{
    config::Config,
    error::{Result, TrelloError},
};

/// Default root of the Trello REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Transport that talks to the real API, authenticating every call with the
/// configured key and token.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    key: String,
    token: String,
}

impl HttpTransport {
    /// Creates a transport for `base_url` using the given credentials.
    ///
    /// # Errors
    ///
    /// Returns `TrelloError::Network` if the HTTP client cannot be
    /// initialized.
    pub fn new(config: &Config, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("trello-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: config.key.clone(),
            token: config.token.clone(),
        })
    }

    fn url_for(&self, request: &Request) -> Result<Url> {
        let auth = [("key", self.key.as_str()), ("token", self.token.as_str())];
        let params = request
            .params
            .iter()
            .filter(|(name, _)| name.as_str() != "key" && name.as_str() != "token")
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .chain(auth);

        Url::parse_with_params(&format!("{}{}", self.base_url, request.path), params).map_err(
            |e| {
                TrelloError::invalid_argument("path")
                    .with_reason(format!("cannot build URL for '{}': {e}", request.path))
            },
        )
    }
}

fn method(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

impl Transport for HttpTransport {
    fn execute(&self, request: Request) -> Result<Value> {
        let verb = request.effective_verb();
        let url = self.url_for(&request)?;

        debug!("{verb} {}", request.path);

        let mut builder = self.client.request(method(verb), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let text = response.text()?;

        debug!("{verb} {} -> {}", request.path, status.as_u16());

        if status.is_server_error() {
            return Err(TrelloError::Server {
                reason: reason(status),
                body: text,
            });
        }
        if status.is_client_error() {
            return Err(TrelloError::Client {
                reason: reason(status),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
