// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CancellationToken;

/// Handle to one active subscription.
///
/// Returned by [`subscribe`](crate::EventSource::subscribe). The handle owns
/// the subscription's root [`CancellationToken`]; calling
/// [`cancel`](Self::cancel) suppresses every event not yet delivered to the
/// consumer and propagates upstream through the whole stage chain.
///
/// Dropping the handle does *not* cancel the stream. Cancellation is always
/// an explicit act, so a caller that only wants to fire-and-forget may let
/// the handle go out of scope.
#[derive(Debug, Clone)]
#[must_use = "dropping the handle does not cancel the subscription, but losing it forfeits the ability to"]
pub struct Subscription {
    token: CancellationToken,
}

impl Subscription {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Stop delivery for this subscription.
    ///
    /// Idempotent: repeated calls are indistinguishable from a single one.
    /// After the stream has already delivered its terminal event this is a
    /// no-op.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
