//! # Debounce
//!
//! A single-slot deferred task for the free-text search input. Each
//! keystroke replaces the pending slot ([`Debouncer::schedule`]) and yields a
//! fresh ticket; the host arms one timer per ticket and hands the ticket
//! back when it fires. Only the ticket from the latest schedule still
//! resolves ([`Debouncer::fire`]); earlier ones are superseded and resolve to
//! nothing. That is cancel-and-replace without timer-id bookkeeping: stale
//! timers may fire, they just no longer mean anything.
//!
//! The crate owns no clock. Delay is carried here so the app layer can tell
//! the host how long to wait.

use std::time::Duration;

/// Identifies one scheduled slot occupancy. Monotonically increasing, so a
/// ticket can only match the slot that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

#[derive(Debug)]
pub struct Debouncer {
    pending: Option<(DebounceTicket, String)>,
    next_ticket: u64,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            pending: None,
            next_ticket: 0,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending slot with `query`; returns the ticket the host
    /// should fire after the delay.
    pub fn schedule(&mut self, query: String) -> DebounceTicket {
        self.next_ticket += 1;
        let ticket = DebounceTicket(self.next_ticket);
        self.pending = Some((ticket, query));
        ticket
    }

    /// Resolve a fired ticket. Returns the query only if `ticket` is still
    /// the current slot occupant; superseded or cancelled tickets return
    /// `None`.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<String> {
        let current = self.pending.as_ref().map(|(t, _)| *t);
        if current != Some(ticket) {
            return None;
        }
        self.pending.take().map(|(_, query)| query)
    }

    /// Empty the slot; any outstanding ticket becomes stale.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
