#![allow(dead_code)]

use std::cell::RefCell;

use serde_json::Value;
use trello_core::{Request, Result, Transport, TrelloError, Verb};

/// What a route answers with.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Client(&'static str, &'static str),
    Server(&'static str, &'static str),
}

/// In-memory transport that answers by verb and path and records every
/// request it sees.
#[derive(Default)]
pub struct MockTransport {
    routes: Vec<(Verb, String, Reply)>,
    requests: RefCell<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, verb: Verb, path: &str, reply: Reply) -> Self {
        self.routes.push((verb, path.to_string(), reply));
        self
    }

    pub fn json(self, verb: Verb, path: &str, value: Value) -> Self {
        self.route(verb, path, Reply::Json(value))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Request {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was made")
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: Request) -> Result<Value> {
        let verb = request.effective_verb();
        let reply = self
            .routes
            .iter()
            .find(|(v, path, _)| *v == verb && *path == request.path)
            .map(|(_, _, reply)| reply.clone());
        self.requests.borrow_mut().push(request);

        match reply {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Client(reason, body)) => Err(TrelloError::Client {
                reason: reason.to_string(),
                body: body.to_string(),
            }),
            Some(Reply::Server(reason, body)) => Err(TrelloError::Server {
                reason: reason.to_string(),
                body: body.to_string(),
            }),
            None => Err(TrelloError::Client {
                reason: "Not Found".to_string(),
                body: format!("no route for {verb}"),
            }),
        }
    }
}
