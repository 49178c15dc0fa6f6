// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use thiserror::Error;

/// Closed failure taxonomy of the fetch pipeline.
///
/// Transform stages never add kinds of their own, so every failure a
/// consumer can observe is one of these, delivered through the stream's
/// terminal event rather than raised out-of-band. Cancellation is not an
/// error and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The transport failed, or a response body could not be decoded.
    #[error("connection error")]
    Connection,
    /// The request locator could not be constructed; nothing was sent.
    #[error("invalid request")]
    InvalidRequest,
    /// The server rejected the request.
    ///
    /// The reason is empty unless the response was a 400 whose error body
    /// decoded successfully.
    #[error("validation error: {reason}")]
    Validation {
        /// Server-supplied explanation, possibly empty.
        reason: String,
    },
}

/// Wire shape of a structured 400 error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorMessage {
    pub error: bool,
    pub reason: String,
}
