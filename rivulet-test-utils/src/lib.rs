// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rivulet reactive streaming library.
//!
//! This crate provides the two observation points stream tests need and is
//! meant for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `Recorder<T, E>`
//!
//! A consumer that records every delivered [`rivulet_core::Event`] so a test
//! can assert on the exact delivery sequence after the run:
//!
//! ```rust
//! use rivulet_core::{Event, EventSink, EventSource};
//! use rivulet_test_utils::Recorder;
//!
//! struct One;
//!
//! impl EventSource for One {
//!     type Item = i32;
//!     type Error = ();
//!
//!     fn drive(&self, sink: EventSink<i32, ()>) {
//!         sink.next(1);
//!         sink.complete();
//!     }
//! }
//!
//! let recorder = Recorder::new();
//! let _subscription = One.subscribe(recorder.consumer());
//! assert_eq!(recorder.events(), vec![Event::Next(1), Event::Completed]);
//! ```
//!
//! ## `ProbeSource<T, E>`
//!
//! A scripted source that counts how far its script actually ran, so a test
//! can prove that a downstream stage cancelled upstream production early.

pub mod error;
pub mod probe;
pub mod recorder;

pub use self::error::TestError;
pub use self::probe::ProbeSource;
pub use self::recorder::Recorder;
