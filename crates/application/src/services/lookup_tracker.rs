//! Lookup sequencing
//!
//! Every lookup takes a ticket. Only the holder of the newest ticket may
//! publish a result; older lookups are superseded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

impl LookupTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket counter shared by concurrent lookups
#[derive(Debug, Default)]
pub struct LookupTracker {
    latest: AtomicU64,
}

impl LookupTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before
    pub fn begin(&self) -> LookupTicket {
        LookupTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no newer ticket has been issued
    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
