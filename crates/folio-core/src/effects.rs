//! Pointer- and scroll-driven decorative transforms.

use crate::constants::*;
use glam::Vec2;

/// Element box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Vertical shift for the background orb at `index`; later orbs move faster.
#[inline]
pub fn parallax_offset(scroll: f64, index: usize) -> f64 {
    scroll * (index as f64 + 1.0) * PARALLAX_SPEED_STEP
}

pub fn parallax_transform(scroll: f64, index: usize) -> String {
    format!("translateY({}px)", parallax_offset(scroll, index))
}

/// Pull a button a fraction of the way toward the pointer.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect: Rect) -> Vec2 {
    (pointer - rect.center()) * MAGNETIC_STRENGTH
}

pub fn magnetic_transform(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    pub fn css_transform(&self) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) scale3d({TILT_SCALE}, {TILT_SCALE}, {TILT_SCALE})",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

/// Card tilt toward the pointer. The top edge leans back when the pointer
/// is above centre; the card turns toward the side the pointer is on.
pub fn tilt(pointer: Vec2, rect: Rect) -> Tilt {
    let local = pointer - Vec2::new(rect.left, rect.top);
    let center = Vec2::new(rect.width * 0.5, rect.height * 0.5);
    Tilt {
        rotate_x_deg: (local.y - center.y) / TILT_DIVISOR,
        rotate_y_deg: (center.x - local.x) / TILT_DIVISOR,
    }
}
