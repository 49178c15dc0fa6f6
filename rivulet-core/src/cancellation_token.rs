// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hierarchical cancellation token.
//!
//! Every subscription owns a root token; transform stages derive child tokens
//! for their upstream runs. Cancelling a token silences everything below it
//! in the chain without touching anything above.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared by all parties of one subscription.
///
/// A `CancellationToken` can be cloned to create multiple handles to the same
/// cancellation state. A token derived with [`child`](Self::child) also
/// reports cancelled once any of its ancestors is cancelled, while cancelling
/// the child leaves its ancestors untouched.
///
/// # Example
///
/// ```
/// use rivulet_core::CancellationToken;
///
/// let root = CancellationToken::new();
/// let child = root.child();
///
/// child.cancel();
/// assert!(child.is_cancelled());
/// assert!(!root.is_cancelled());
///
/// root.cancel();
/// assert!(root.is_cancelled());
/// assert!(root.child().is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    parent: Option<Arc<Inner>>,
}

impl CancellationToken {
    /// Create a new root token.
    ///
    /// The token is initially not cancelled.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                parent: None,
            }),
        }
    }

    /// Derive a token that is cancelled when either it or `self` is.
    pub fn child(&self) -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                parent: Some(Arc::clone(&self.inner)),
            }),
        }
    }

    /// Cancel the token.
    ///
    /// This method is idempotent. Calling it multiple times has the same effect
    /// as calling it once. Ancestors are not affected.
    pub fn cancel(&self) {
        // Release ordering so writes made before cancel() are visible to
        // whoever observes the flag
        self.inner.cancelled.store(true, Ordering::Release);
    }

    /// Check whether this token or any of its ancestors has been cancelled.
    ///
    /// # Example
    ///
    /// ```
    /// use rivulet_core::CancellationToken;
    ///
    /// let token = CancellationToken::new();
    /// assert!(!token.is_cancelled());
    ///
    /// token.cancel();
    /// assert!(token.is_cancelled());
    /// ```
    pub fn is_cancelled(&self) -> bool {
        let mut current = Some(&self.inner);
        while let Some(inner) = current {
            if inner.cancelled.load(Ordering::Acquire) {
                return true;
            }
            current = inner.parent.as_ref();
        }
        false
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
