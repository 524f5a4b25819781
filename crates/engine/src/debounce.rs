//! Cancellable scheduled call used to collapse bursts of input.
//!
//! The debouncer owns no timer. Callers hand it the current `Instant` and
//! ask for the next deadline, which keeps it usable from any event loop and
//! deterministic under test. Each call replaces the pending value and its
//! deadline, so only the most recent call can ever fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Collapses rapid successive calls into one, fired after a quiet period
/// with the arguments of the last call.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value`, replacing anything still pending.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending call, if any. A cancelled call never fires.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Instant at which the pending call becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Take the pending value once its quiet period has elapsed.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|pending| pending.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn burst_within_window_fires_once_with_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.call("b", start);
        debouncer.call("ba", start + Duration::from_millis(100));
        debouncer.call("bat", start + Duration::from_millis(200));

        let mut fired = Vec::new();
        for step in 0..=10 {
            let now = start + Duration::from_millis(step * 100);
            if let Some(value) = debouncer.fire_if_due(now) {
                fired.push(value);
            }
        }
        assert_eq!(fired, vec!["bat"]);
    }

    #[test]
    fn quiet_period_restarts_on_every_call() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.call(1, start);
        debouncer.call(2, start + Duration::from_millis(250));
        assert_eq!(debouncer.fire_if_due(start + DELAY), None);
        assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(550)));
        assert_eq!(debouncer.fire_if_due(start + Duration::from_millis(550)), Some(2));
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.call("x", now);
        assert_eq!(debouncer.fire_if_due(now), Some("x"));
    }

    #[test]
    fn cancelled_call_never_fires() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.call("x", now);
        debouncer.cancel();
        assert_eq!(debouncer.fire_if_due(now + DELAY * 2), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
