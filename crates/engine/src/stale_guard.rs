//! Last-writer-wins-by-dispatch-order guard for asynchronous responses.

use moviesearch_types::RequestTicket;

/// Issues monotonically increasing tickets and recognises responses whose
/// request has since been superseded.
#[derive(Debug, Clone, Default)]
pub struct StaleGuard {
    last_dispatched: RequestTicket,
}

impl StaleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new dispatch and return its ticket.
    pub fn dispatch(&mut self) -> RequestTicket {
        self.last_dispatched = RequestTicket(self.last_dispatched.0 + 1);
        self.last_dispatched
    }

    /// Advance past every in-flight request without issuing a new one.
    pub fn invalidate(&mut self) {
        self.dispatch();
    }

    pub fn last_dispatched(&self) -> RequestTicket {
        self.last_dispatched
    }

    /// `true` unless a newer dispatch happened after `ticket` was issued.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket >= self.last_dispatched
    }
}
