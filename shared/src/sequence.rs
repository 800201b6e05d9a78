//! Monotonic request tickets used to drop stale responses.
//!
//! Catalog requests are never cancelled. A view takes a ticket when it
//! issues a request and applies the response only if no newer ticket has been
//! issued since, so a slow response for an old filter cannot overwrite a newer
//! result.

use std::cell::Cell;

/// Opaque ticket handed out by [`RequestSequence::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Per-view counter of issued requests.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    /// Issue a ticket newer than every ticket issued before.
    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    /// Whether `ticket` is still the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let sequence = RequestSequence::default();
        let first = sequence.issue();
        assert!(sequence.is_current(first));

        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
        assert!(first < second);
    }
}
