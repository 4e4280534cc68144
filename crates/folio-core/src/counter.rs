//! Stat counters that count up once when revealed.

use crate::constants::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// Parse a `data-count` attribute the way a lenient integer parse would:
/// surrounding whitespace is ignored and trailing non-digits ("250+") are
/// dropped. Returns `None` when no leading integer is present.
pub fn parse_counter_target(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (sign, digits) = match s.as_bytes().first()? {
        b'-' => (-1, &s[1..]),
        b'+' => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// A counter awaiting its reveal. Fires at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    fired: bool,
}

impl CounterSpec {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Start the ramp. A second call returns `None`.
    pub fn fire(&mut self) -> Option<CounterRamp> {
        if self.fired {
            return None;
        }
        self.fired = true;
        log::debug!("[counter] ramp to {}", self.target);
        Some(CounterRamp::new(self.target))
    }
}

/// Linear ramp from 0 to `target`, one item per tick.
///
/// Intermediate values are rounded up; the last item is always exactly the
/// target and nothing above it is ever yielded.
#[derive(Clone, Debug)]
pub struct CounterRamp {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterRamp {
    pub fn new(target: i64) -> Self {
        Self::with_timing(target, COUNTER_DURATION_MS, f64::from(COUNTER_TICK_MS))
    }

    pub fn with_timing(target: i64, duration_ms: f64, tick_ms: f64) -> Self {
        let ticks = (duration_ms / tick_ms).max(1.0);
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

impl Iterator for CounterRamp {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(self.current.ceil() as i64)
        } else {
            self.done = true;
            Some(self.target)
        }
    }
}
