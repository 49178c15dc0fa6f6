// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-flight fetch pipeline built on the rivulet engine.
//!
//! This crate turns the abstract stream machinery of `rivulet-core` into one
//! concrete, fully asynchronous pipeline:
//!
//! 1. [`Endpoint`] builds the request locator, percent-encoding the list
//!    name into a fixed base.
//! 2. [`Transport`] performs the GET and yields a structured
//!    [`TransportResponse`] (status plus raw body, nothing more).
//! 3. [`FetchSource`] is a one-shot [`rivulet_core::EventSource`] that runs
//!    the call on the Tokio runtime and classifies the response into either
//!    one `Next(BookList)` + `Completed` or one `Failed(FetchError)`.
//! 4. [`Library`] owns at most one outstanding subscription at a time,
//!    funnels every event through a single delivery lane, and publishes a
//!    [`LibrarySnapshot`] that interested parties poll or watch.
//!
//! Failures are never raised out-of-band: everything a consumer can observe
//! travels through the stream's own terminal event, as one of the closed
//! [`FetchError`] kinds.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod api;
pub mod book;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod library;
pub mod transport;

pub use self::api::{BooksApi, BooksClient};
pub use self::book::{Book, BookList};
pub use self::endpoint::Endpoint;
pub use self::error::FetchError;
pub use self::fetch::FetchSource;
pub use self::library::{Library, LibrarySnapshot};
pub use self::transport::{HttpTransport, Transport, TransportResponse};
