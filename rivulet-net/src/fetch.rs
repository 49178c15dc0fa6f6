// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot fetch source and response classification.

use crate::book::BookList;
use crate::error::{ErrorMessage, FetchError};
use crate::transport::{Transport, TransportResponse};
use reqwest::Url;
use rivulet_core::{EventSink, EventSource};
use std::sync::Arc;
use tracing::{debug, warn};

/// Map one transport response onto the closed error taxonomy.
///
/// A 2xx body must decode as [`BookList`]; one that does not is treated the
/// same as a failed connection. A 400 carries a structured reason when its
/// error body decodes, and falls back to the connection bucket when it does
/// not. Every other status is a bare validation failure with no reason.
fn classify(response: &TransportResponse) -> Result<BookList, FetchError> {
    match response.status {
        200..=299 => serde_json::from_slice(&response.body).map_err(|_| FetchError::Connection),
        400 => match serde_json::from_slice::<ErrorMessage>(&response.body) {
            Ok(message) => {
                debug!(flagged = message.error, reason = %message.reason, "structured rejection");
                Err(FetchError::Validation {
                    reason: message.reason,
                })
            }
            Err(_) => {
                warn!("status 400 with an undecodable error body");
                Err(FetchError::Connection)
            }
        },
        status => {
            debug!(status, "unexpected status");
            Err(FetchError::Validation {
                reason: String::new(),
            })
        }
    }
}

/// One-shot asynchronous source fetching a single [`BookList`].
///
/// Every subscription spawns one fresh transport call on the ambient Tokio
/// runtime, so `drive` must be reached from within a runtime. A run
/// delivers at most one `Next(BookList)` followed by `Completed`, or one
/// `Failed(FetchError)`.
///
/// Cancelling before the call resolves is silent: the sink guard discards
/// the eventual terminal event, the call itself is not interrupted.
pub struct FetchSource {
    transport: Arc<dyn Transport>,
    url: Url,
}

impl FetchSource {
    /// A source that fetches `url` through `transport`, once per
    /// subscription.
    pub fn new(transport: Arc<dyn Transport>, url: Url) -> Self {
        Self { transport, url }
    }
}

impl EventSource for FetchSource {
    type Item = BookList;
    type Error = FetchError;

    fn drive(&self, sink: EventSink<BookList, FetchError>) {
        let transport = Arc::clone(&self.transport);
        let url = self.url.clone();
        tokio::spawn(async move {
            debug!(%url, "fetch started");
            let outcome = transport.get(&url).await.and_then(|response| {
                let outcome = classify(&response);
                debug!(
                    status = response.status,
                    ok = outcome.is_ok(),
                    "response classified"
                );
                outcome
            });
            match outcome {
                Ok(list) => {
                    sink.next(list);
                    sink.complete();
                }
                Err(error) => sink.fail(error),
            }
        });
    }
}
