//! Exponential smoothing used by the trailing cursor elements.

use crate::error::{FolioError, Result};
use glam::Vec2;

/// Move `current` toward `target` by the fraction `damping` of the gap.
///
/// A damping of 1 snaps to the target. Values in (0, 1) approach it
/// asymptotically without overshooting.
#[inline]
pub fn smooth(current: Vec2, target: Vec2, damping: f32) -> Vec2 {
    current + (target - current) * damping
}

/// A 2D position that trails a moving target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedValue {
    current: Vec2,
    damping: f32,
}

impl SmoothedValue {
    pub fn new(start: Vec2, damping: f32) -> Result<Self> {
        if !damping.is_finite() || damping <= 0.0 || damping > 1.0 {
            return Err(FolioError::InvalidDamping(damping));
        }
        Ok(Self::with_valid_damping(start, damping))
    }

    // Only for factors known to lie in (0, 1].
    pub(crate) const fn with_valid_damping(start: Vec2, damping: f32) -> Self {
        Self {
            current: start,
            damping,
        }
    }

    /// Advance one frame toward `target` and return the new position.
    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.current = smooth(self.current, target, self.damping);
        self.current
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }
}
