// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod cancellation_token;
pub mod event;
pub mod sink;
pub mod source;
pub mod subscription;

pub use self::cancellation_token::CancellationToken;
pub use self::event::{Completion, Event};
pub use self::sink::EventSink;
pub use self::source::{BoxSource, EventSource};
pub use self::subscription::Subscription;
