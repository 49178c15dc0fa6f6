// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources and transform stages for push-based event streams.
//!
//! This crate provides the concrete producers and every transform stage of
//! the rivulet engine. All stages consume any [`EventSource`] and are
//! themselves sources, so pipelines compose as plain method chains. Each
//! operator lives in its own module and is provided via an extension trait.
//!
//! # Sources
//!
//! - **[`SequenceSource`]**: replays a fixed collection synchronously, then
//!   completes
//! - **[`FailSource`]**: delivers exactly one failure
//!
//! # Operator Categories
//!
//! ## Stateless Transformations
//!
//! - **[`map`](MapExt::map)**: transform every value
//! - **[`filter`](FilterExt::filter)**: keep values passing a predicate
//! - **[`filter_map`](FilterMapExt::filter_map)**: transform and drop in one
//!   pass
//! - **[`replace_none`](ReplaceNoneExt::replace_none)**: substitute absent
//!   optional values
//!
//! ## Accumulation
//!
//! - **[`scan`](ScanExt::scan)**: running fold, every intermediate emitted
//! - **[`reduce`](ReduceExt::reduce)**: fold to one value at completion
//! - **[`collect`](CollectExt::collect)**: buffer everything into one `Vec`
//! - **[`count`](CountExt::count)**: number of values, at completion
//!
//! ## Selection and Limiting
//!
//! - **[`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed)**:
//!   drop consecutive duplicates
//! - **[`skip_while`](SkipWhileExt::skip_while)** /
//!   **[`skip_items`](SkipItemsExt::skip_items)**: drop a prefix
//! - **[`take_items`](TakeItemsExt::take_items)** /
//!   **[`take_range`](TakeRangeExt::take_range)**: keep a prefix or an index
//!   window, cancelling upstream once done
//! - **[`first`](FirstExt::first)** / **[`last`](LastExt::last)**: a single
//!   value from either end
//! - **[`max_by`](MaxByExt::max_by)** / **[`min_by`](MinByExt::min_by)**:
//!   streaming extremum under a caller-supplied comparison
//! - **[`all_satisfy`](AllSatisfyExt::all_satisfy)**: one boolean verdict,
//!   short-circuiting on the first counterexample
//!
//! ## Sequencing
//!
//! - **[`append`](AppendExt::append)** /
//!   **[`prepend`](PrependExt::prepend)**: relay a second source after or
//!   before this one
//! - **[`ignore_items`](IgnoreItemsExt::ignore_items)**: keep only the
//!   terminal event
//!
//! # Cancellation
//!
//! Every stage runs its upstream under a child of the downstream
//! cancellation token. Cancelling a subscription therefore reaches the
//! source through the whole chain, while stages that finish early
//! (`take_items`, `first`, `all_satisfy`) cancel only their upstream child
//! and still deliver their own completion downstream.

pub mod all_satisfy;
pub mod append;
pub mod collect;
pub mod count;
pub mod distinct_until_changed;
pub mod fail;
pub mod filter;
pub mod filter_map;
pub mod first;
pub mod ignore_items;
pub mod last;
pub mod map;
pub mod max_by;
pub mod min_by;
pub mod prepend;
pub mod reduce;
pub mod replace_none;
pub mod scan;
pub mod sequence;
pub mod skip_items;
pub mod skip_while;
pub mod take_items;
pub mod take_range;

pub use self::all_satisfy::{AllSatisfy, AllSatisfyExt};
pub use self::append::{Append, AppendExt};
pub use self::collect::{Collect, CollectExt};
pub use self::count::{Count, CountExt};
pub use self::distinct_until_changed::{DistinctUntilChanged, DistinctUntilChangedExt};
pub use self::fail::FailSource;
pub use self::filter::{Filter, FilterExt};
pub use self::filter_map::{FilterMap, FilterMapExt};
pub use self::first::{First, FirstExt};
pub use self::ignore_items::{IgnoreItems, IgnoreItemsExt};
pub use self::last::{Last, LastExt};
pub use self::map::{Map, MapExt};
pub use self::max_by::{MaxBy, MaxByExt};
pub use self::min_by::{MinBy, MinByExt};
pub use self::prepend::{Prepend, PrependExt};
pub use self::reduce::{Reduce, ReduceExt};
pub use self::replace_none::{ReplaceNone, ReplaceNoneExt};
pub use self::scan::{Scan, ScanExt};
pub use self::sequence::SequenceSource;
pub use self::skip_items::{SkipItems, SkipItemsExt};
pub use self::skip_while::{SkipWhile, SkipWhileExt};
pub use self::take_items::{TakeItems, TakeItemsExt};
pub use self::take_range::{TakeRange, TakeRangeExt};

pub use rivulet_core::{
    BoxSource, CancellationToken, Completion, Event, EventSink, EventSource, Subscription,
};
