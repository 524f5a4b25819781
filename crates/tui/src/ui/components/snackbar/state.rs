use std::time::{Duration, Instant};

use moviesearch_util::redact_sensitive;

/// Transient banner reporting the last provider error.
///
/// The banner reappears whenever the controller's error text changes and
/// hides itself once its display window has elapsed. Clearing the error in
/// the controller hides it immediately.
#[derive(Debug, Clone)]
pub struct SnackbarState {
    duration: Duration,
    /// Last error text seen from the controller, before redaction.
    observed: Option<String>,
    message: Option<String>,
    expires_at: Option<Instant>,
}

impl SnackbarState {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            observed: None,
            message: None,
            expires_at: None,
        }
    }

    /// Track the controller's current error.
    pub fn observe(&mut self, error: Option<&str>, now: Instant) {
        if self.observed.as_deref() == error {
            return;
        }
        self.observed = error.map(str::to_string);
        match error {
            Some(text) => {
                self.message = Some(redact_sensitive(text));
                self.expires_at = Some(now + self.duration);
            }
            None => {
                self.message = None;
                self.expires_at = None;
            }
        }
    }

    /// Expire the banner. Returns true when it was hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.expires_at
            && now >= deadline
        {
            self.message = None;
            self.expires_at = None;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn visible_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
