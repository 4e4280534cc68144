//! Clock-driven debounce and throttle.
//!
//! Both take the current time in milliseconds from the caller so they can
//! run against `performance.now()` in the browser and a fake clock in tests.

use crate::constants::{DEBOUNCE_WAIT_MS, THROTTLE_LIMIT_MS};

/// Runs only the last call of a burst, once calls stop for `wait_ms`.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    wait_ms: f64,
    pending: Option<T>,
    deadline: f64,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            pending: None,
            deadline: 0.0,
        }
    }

    /// Record a call. Replaces any pending arguments and returns the time at
    /// which `poll` will release them if nothing else arrives.
    pub fn call(&mut self, now: f64, args: T) -> f64 {
        self.pending = Some(args);
        self.deadline = now + self.wait_ms;
        self.deadline
    }

    /// Release the pending arguments if the quiet window has passed.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        if now < self.deadline {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEBOUNCE_WAIT_MS)
    }
}

/// At most one execution per `limit_ms`; calls inside the window are dropped.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_run: None,
        }
    }

    /// Returns true if the caller should execute now.
    pub fn try_call(&mut self, now: f64) -> bool {
        match self.last_run {
            Some(t) if now - t < self.limit_ms => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }

    pub fn limit_ms(&self) -> f64 {
        self.limit_ms
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(THROTTLE_LIMIT_MS)
    }
}
