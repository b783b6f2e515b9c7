#![allow(dead_code)]

use async_trait::async_trait;
use channel_scout::config::GatewayConfig;
use channel_scout::error::RemoteError;
use channel_scout::gateway::transport::{HttpReply, Transport};
use channel_scout::gateway::GatewayClient;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

type Responder = Box<dyn Fn(&Value) -> Result<HttpReply, RemoteError>>;

/// One request seen by [`FakeTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub body: Value,
}

/// Scripted gateway keyed by endpoint path. Unscripted paths answer 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Responder>,
    calls: RefCell<Vec<RecordedCall>>,
    yields: usize,
    in_flight: Cell<usize>,
    peak_in_flight: Cell<usize>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, path: &str, status: u16, body: &str) -> Self {
        let body = body.to_string();
        self.respond_with(path, move |_| {
            Ok(HttpReply {
                status,
                body: body.clone(),
            })
        })
    }

    pub fn json(self, path: &str, body: Value) -> Self {
        self.reply(path, 200, &body.to_string())
    }

    pub fn fail(self, path: &str, error: RemoteError) -> Self {
        self.respond_with(path, move |_| Err(error.clone()))
    }

    pub fn respond_with<F>(mut self, path: &str, responder: F) -> Self
    where
        F: Fn(&Value) -> Result<HttpReply, RemoteError> + 'static,
    {
        self.routes.insert(path.to_string(), Box::new(responder));
        self
    }

    /// Makes every request yield to the executor `times` times before
    /// answering, so concurrent requests overlap.
    pub fn yielding(mut self, times: usize) -> Self {
        self.yields = times;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.path == path)
            .map(|call| call.body.clone())
            .collect()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.get()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, RemoteError> {
        let path = url::Url::parse(url)
            .map(|url| url.path().to_string())
            .unwrap_or_else(|_| url.to_string());
        let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        self.calls.borrow_mut().push(RecordedCall {
            path: path.clone(),
            body: body.clone(),
        });

        let in_flight = self.in_flight.get() + 1;
        self.in_flight.set(in_flight);
        self.peak_in_flight.set(self.peak_in_flight.get().max(in_flight));
        for _ in 0..self.yields {
            tokio::task::yield_now().await;
        }
        self.in_flight.set(self.in_flight.get() - 1);

        match self.routes.get(&path) {
            Some(responder) => responder(&body),
            None => Ok(HttpReply {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn client(transport: FakeTransport) -> GatewayClient<FakeTransport> {
    init_logging();
    GatewayClient::new(transport, GatewayConfig::default())
}
