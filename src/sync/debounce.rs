use std::time::{Duration, Instant};

/// Explicit-clock debounce: keeps the latest value of a burst and releases it
/// once no new value has arrived for `delay`.
///
/// Every [`push`](Debouncer::push) cancels the pending deadline and arms a new
/// one, so a burst releases at most one value: the last.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces the pending value and re-arms the deadline at `now + delay`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Releases the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// When the pending value will be released.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Rewrites the pending value in place, keeping its deadline.
    pub fn update_pending<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Some((value, _)) = self.pending.as_mut() {
            f(value);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
