//! Per-frame cursor animation state and its cancellation handle.

use crate::constants::{CURSOR_LEAD_DAMPING, CURSOR_TRAIL_DAMPING};
use crate::error::Result;
use crate::smoothing::SmoothedValue;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Positions to write to the cursor elements for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub lead: Vec2,
    pub trail: Vec2,
}

/// Two smoothed values chasing the same pointer target at different rates.
/// The gap between them is the visible "lag" of the cursor halo.
#[derive(Clone, Debug)]
pub struct CursorAnimator {
    lead: SmoothedValue,
    trail: SmoothedValue,
}

impl CursorAnimator {
    pub fn new(lead_damping: f32, trail_damping: f32) -> Result<Self> {
        Ok(Self {
            lead: SmoothedValue::new(Vec2::ZERO, lead_damping)?,
            trail: SmoothedValue::new(Vec2::ZERO, trail_damping)?,
        })
    }

    pub fn frame(&mut self, target: Vec2) -> CursorFrame {
        CursorFrame {
            lead: self.lead.step(target),
            trail: self.trail.step(target),
        }
    }

    pub fn lead(&self) -> &SmoothedValue {
        &self.lead
    }

    pub fn trail(&self) -> &SmoothedValue {
        &self.trail
    }
}

impl Default for CursorAnimator {
    fn default() -> Self {
        Self {
            lead: SmoothedValue::with_valid_damping(Vec2::ZERO, CURSOR_LEAD_DAMPING),
            trail: SmoothedValue::with_valid_damping(Vec2::ZERO, CURSOR_TRAIL_DAMPING),
        }
    }
}

/// Shared stop flag for a running frame loop. Clones observe the same flag.
#[derive(Clone, Default, Debug)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Handle a `pagehide`. A page kept in the back/forward cache comes back
    /// alive, so only a discarded page stops the loop. Returns true if it did.
    pub fn on_page_hide(&self, persisted: bool) -> bool {
        if !persisted {
            self.cancel();
        }
        self.is_cancelled()
    }
}

/// Cursor animation driven once per display refresh until cancelled.
#[derive(Debug, Default)]
pub struct FrameLoop {
    animator: CursorAnimator,
    handle: LoopHandle,
    frames: u64,
}

impl FrameLoop {
    pub fn new(animator: CursorAnimator) -> Self {
        Self {
            animator,
            handle: LoopHandle::default(),
            frames: 0,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Advance one frame. `None` means the loop was cancelled and the caller
    /// must not schedule another frame.
    pub fn tick(&mut self, target: Vec2) -> Option<CursorFrame> {
        if self.handle.is_cancelled() {
            return None;
        }
        self.frames += 1;
        Some(self.animator.frame(target))
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
