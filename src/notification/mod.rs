//! Transient "N persons added/deleted" message driven by list size changes.

use std::time::{Duration, Instant};

use tracing::debug;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(2000);

/// Format the message shown for a signed size delta.
pub fn count_changed_message(delta: i64) -> String {
    if delta > 0 {
        format!("Added {} persons", delta)
    } else {
        format!("Deleted {} persons", delta)
    }
}

/// Watches consecutive list sizes and keeps the current message.
///
/// The first observed size only primes the notifier. A repeated size emits
/// nothing. Each emitted message replaces the previous one and restarts the
/// clear deadline.
#[derive(Clone, Debug)]
pub struct CountNotifier {
    ttl: Duration,
    last_len: Option<usize>,
    message: String,
    clear_at: Option<Instant>,
}

impl Default for CountNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl CountNotifier {
    pub fn new(ttl: Duration) -> Self {
        CountNotifier {
            ttl,
            last_len: None,
            message: String::new(),
            clear_at: None,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The message to display; empty when nothing is shown.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the current message clears, if one is showing.
    pub fn clear_at(&self) -> Option<Instant> {
        self.clear_at
    }

    /// Record a list size observed at `now`. Returns the signed delta when the
    /// size changed.
    pub fn observe(&mut self, len: usize, now: Instant) -> Option<i64> {
        let previous = self.last_len.replace(len)?;
        if previous == len {
            return None;
        }

        let delta = len as i64 - previous as i64;
        self.message = count_changed_message(delta);
        self.clear_at = Some(now + self.ttl);
        debug!(delta = delta, text = %self.message, "person count changed");
        Some(delta)
    }

    /// Clear the message once its deadline has passed. Returns true when the
    /// message was cleared by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.message.clear();
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }
}
