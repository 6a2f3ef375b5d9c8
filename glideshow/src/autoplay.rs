/// A repeating, deadline-based autoplay timer.
///
/// The timer owns no thread or OS timer: the host polls it with a monotonic clock (`now_ms`).
/// There is a single deadline slot, so arming always replaces any pending deadline and a
/// cancelled timer can never fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval_ms: u64,
    deadline_ms: Option<u64>,
}

impl AutoplayTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the period. A pending deadline is dropped; call [`AutoplayTimer::arm`] to restart.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Invalidates the pending deadline (if any) and schedules the next fire one interval from
    /// `now_ms`. A zero interval leaves the timer disarmed.
    pub fn arm(&mut self, now_ms: u64) {
        self.cancel();
        if self.interval_ms == 0 {
            return;
        }
        self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Returns `true` when the deadline has passed, and schedules the next one.
    ///
    /// Fires at most once per poll: missed periods are skipped rather than replayed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        let mut next = deadline.saturating_add(self.interval_ms);
        if next <= now_ms {
            next = now_ms.saturating_add(self.interval_ms);
        }
        self.deadline_ms = Some(next);
        true
    }
}
