// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! A minimal push-based reactive stream engine: sources produce zero or more
//! ordered values terminated by exactly one completion or failure, transform
//! stages rewrite those events composably, and every subscription carries a
//! race-free, idempotent cancellation handle.
//!
//! ## Overview
//!
//! The workspace splits along the same seams as its crates:
//!
//! - **Engine** (`rivulet-core`): the [`Event`] vocabulary, the
//!   [`EventSource`] trait, the guarded [`EventSink`] delivery funnel and the
//!   hierarchical [`CancellationToken`].
//! - **Stages** (`rivulet-stream`): concrete sources and one extension trait
//!   per operator, from `map` and `filter` to `scan`, `reduce`,
//!   `distinct_until_changed`, `take_items` and friends.
//! - **Pipeline** (`rivulet-net`): a single-flight fetch-and-decode pipeline
//!   with a closed error taxonomy and the [`Library`] coordinator on top.
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//! use rivulet_test_utils::Recorder;
//!
//! let recorder = Recorder::new();
//! let _subscription = SequenceSource::new(vec![1, 2, 2, 3])
//!     .distinct_until_changed()
//!     .scan(0, |acc, value| acc + value)
//!     .subscribe(recorder.consumer());
//!
//! assert_eq!(
//!     recorder.events(),
//!     vec![
//!         Event::Next(1),
//!         Event::Next(3),
//!         Event::Next(6),
//!         Event::Completed
//!     ]
//! );
//! ```

// Re-export the engine surface
pub use rivulet_core::{
    BoxSource, CancellationToken, Completion, Event, EventSink, EventSource, Subscription,
};

// Re-export sources and operator extension traits
pub use rivulet_stream::{
    AllSatisfyExt, AppendExt, CollectExt, CountExt, DistinctUntilChangedExt, FailSource,
    FilterExt, FilterMapExt, FirstExt, IgnoreItemsExt, LastExt, MapExt, MaxByExt, MinByExt,
    PrependExt, ReduceExt, ReplaceNoneExt, ScanExt, SequenceSource, SkipItemsExt, SkipWhileExt,
    TakeItemsExt, TakeRangeExt,
};

// Re-export the fetch pipeline
pub use rivulet_net::{
    Book, BookList, BooksApi, BooksClient, Endpoint, FetchError, FetchSource, HttpTransport,
    Library, LibrarySnapshot, Transport, TransportResponse,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_core::{Completion, Event, EventSource, Subscription};
    pub use rivulet_stream::{
        AllSatisfyExt, AppendExt, CollectExt, CountExt, DistinctUntilChangedExt, FailSource,
        FilterExt, FilterMapExt, FirstExt, IgnoreItemsExt, LastExt, MapExt, MaxByExt, MinByExt,
        PrependExt, ReduceExt, ReplaceNoneExt, ScanExt, SequenceSource, SkipItemsExt,
        SkipWhileExt, TakeItemsExt, TakeRangeExt,
    };
}
