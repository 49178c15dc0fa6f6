// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stub transports and fixtures shared by the rivulet-net tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Url;
use rivulet_net::{Book, FetchError, Transport, TransportResponse};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Transport answering every call with one canned status/body pair.
pub struct CannedTransport {
    status: u16,
    body: Vec<u8>,
}

impl CannedTransport {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn get(&self, _url: &Url) -> Result<TransportResponse, FetchError> {
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Transport that fails every call, like an unreachable host.
pub struct UnreachableTransport;

#[async_trait]
impl Transport for UnreachableTransport {
    async fn get(&self, _url: &Url) -> Result<TransportResponse, FetchError> {
        Err(FetchError::Connection)
    }
}

/// Transport replaying a scripted series of outcomes, one per call, and
/// recording the locator of every call it sees.
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<TransportResponse, FetchError>>>,
    seen: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: Vec<Result<TransportResponse, FetchError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Locators of every call performed so far, in call order.
    pub fn seen(&self) -> Vec<Url> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError> {
        self.seen.lock().push(url.clone());
        self.outcomes
            .lock()
            .pop_front()
            .expect("transport script exhausted")
    }
}

/// Transport that holds every call at a gate until released, for racing
/// cancellation against resolution. Calls resolve in arrival order, taking
/// responses from the script front.
pub struct GatedTransport {
    gate: Semaphore,
    responses: Mutex<VecDeque<TransportResponse>>,
    started: AtomicUsize,
    finished: AtomicUsize,
}

impl GatedTransport {
    pub fn new(responses: Vec<TransportResponse>) -> Self {
        Self {
            gate: Semaphore::new(0),
            responses: Mutex::new(responses.into()),
            started: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
        }
    }

    /// Let one held call proceed.
    pub fn release_one(&self) {
        self.gate.add_permits(1);
    }

    /// How many calls have reached the gate.
    pub fn started(&self) -> usize {
        self.started.load(Ordering::Acquire)
    }

    /// How many calls have resolved.
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::Acquire)
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn get(&self, _url: &Url) -> Result<TransportResponse, FetchError> {
        self.started.fetch_add(1, Ordering::AcqRel);
        let permit = self.gate.acquire().await.map_err(|_| FetchError::Connection)?;
        permit.forget();
        let response = self
            .responses
            .lock()
            .pop_front()
            .expect("transport script exhausted");
        self.finished.fetch_add(1, Ordering::AcqRel);
        Ok(response)
    }
}

/// A canned 2xx response whose body lists the given display names.
pub fn ok_response(names: &[&str]) -> TransportResponse {
    TransportResponse {
        status: 200,
        body: books_body(names),
    }
}

/// A valid success body listing the given display names.
pub fn books_body(names: &[&str]) -> Vec<u8> {
    let results: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "display_name": name,
                "amazon_product_url": format!("https://amazon.example/{name}"),
            })
        })
        .collect();
    serde_json::to_vec(&serde_json::json!({ "results": results })).expect("fixture body")
}

/// The entry [`books_body`] encodes for `name`.
pub fn book(name: &str) -> Book {
    Book {
        name: name.to_owned(),
        amazon_url: format!("https://amazon.example/{name}"),
    }
}

/// Poll `condition` until it holds, panicking after a generous deadline.
pub async fn wait_until<F>(what: &str, mut condition: F)
where
    F: FnMut() -> bool,
{
    for _ in 0..1000 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("timed out waiting until {what}");
}
