//! In-memory transport for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use super::Transport;
use crate::Result;
use crate::error::TransportError;

/// One recorded exchange.
#[derive(Debug, Clone)]
pub struct Call {
    pub verb: &'static str,
    pub url: Url,
    pub fields: Vec<(String, String)>,
}

impl Call {
    /// Look a parameter up in the query string, then in the form fields.
    pub fn param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
            })
    }
}

/// Answers by `api` (and optionally `method`) parameter; unrouted calls fail with HTTP 404.
#[derive(Default)]
pub struct StubTransport {
    routes: Vec<(String, Option<String>, String)>,
    calls: Mutex<Vec<Call>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, api: &str, body: &str) -> Self {
        self.routes.push((api.to_string(), None, body.to_string()));
        self
    }

    pub fn on_method(mut self, api: &str, method: &str, body: &str) -> Self {
        self.routes
            .push((api.to_string(), Some(method.to_string()), body.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn answer(&self, call: Call) -> Result<String> {
        let api = call.param("api");
        let method = call.param("method");
        self.calls.lock().unwrap().push(call);

        let api = api.as_deref();
        let method = method.as_deref();
        let for_api = || {
            self.routes
                .iter()
                .filter(move |(a, _, _)| Some(a.as_str()) == api)
        };
        for_api()
            .find(|(_, m, _)| m.is_some() && m.as_deref() == method)
            .or_else(|| for_api().find(|(_, m, _)| m.is_none()))
            .map(|(_, _, body)| body.clone())
            .ok_or_else(|| TransportError::Status { status: 404 }.into())
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> Result<String> {
        self.answer(Call {
            verb: "GET",
            url: url.clone(),
            fields: Vec::new(),
        })
    }

    async fn post_form(&self, url: &Url, fields: &[(String, String)]) -> Result<String> {
        self.answer(Call {
            verb: "POST",
            url: url.clone(),
            fields: fields.to_vec(),
        })
    }
}
