// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::book::BookList;
use crate::endpoint::{Endpoint, DEFAULT_LIST};
use crate::error::FetchError;
use crate::fetch::FetchSource;
use crate::transport::Transport;
use rivulet_core::{BoxSource, EventSource};
use rivulet_stream::FailSource;
use std::sync::Arc;
use tracing::warn;

/// The fetch operations the coordinator depends on.
///
/// Kept behind a trait so tests can substitute scripted pipelines for the
/// real network client.
pub trait BooksApi: Send + Sync {
    /// A fresh one-shot stream of the configured list.
    ///
    /// Each call describes one independent fetch; nothing happens until the
    /// returned source is subscribed.
    fn get_books(&self) -> BoxSource<BookList, FetchError>;
}

/// Production [`BooksApi`] over an injected [`Transport`].
pub struct BooksClient {
    transport: Arc<dyn Transport>,
    list: String,
}

impl BooksClient {
    /// Client for the default best-seller list.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_list(transport, DEFAULT_LIST)
    }

    /// Client for a specific named list.
    pub fn with_list(transport: Arc<dyn Transport>, list: impl Into<String>) -> Self {
        Self {
            transport,
            list: list.into(),
        }
    }
}

impl BooksApi for BooksClient {
    fn get_books(&self) -> BoxSource<BookList, FetchError> {
        let endpoint = Endpoint::GetBooks {
            list: self.list.clone(),
        };
        match endpoint.url() {
            Some(url) => FetchSource::new(Arc::clone(&self.transport), url).boxed(),
            None => {
                // The error still travels as an ordinary stream event.
                warn!(list = %self.list, "request locator could not be constructed");
                FailSource::new(FetchError::InvalidRequest).boxed()
            }
        }
    }
}
