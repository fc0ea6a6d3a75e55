//! Request-token fencing for overlapping loads.
//!
//! Each loader owns one tracker. Starting a load issues a new token; a
//! completion is applied only if its token is still the latest, so the view
//! always reflects the most recent user action.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Opaque, monotonically increasing load identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Issue a token that supersedes every earlier one.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
