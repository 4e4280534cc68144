use glam::Vec2;

/// Latest raw pointer sample in viewport (client) coordinates.
///
/// Every move event overwrites the previous sample; the animation frame
/// reads whatever was written last.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn record(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Tracks whether the pointer is over any interactive element.
///
/// Interactive elements nest (a link inside a project card), so leaving the
/// inner one must not clear the hover state while the outer one is still
/// under the pointer.
#[derive(Default, Clone, Copy, Debug)]
pub struct CursorHover {
    depth: u32,
}

impl CursorHover {
    pub fn enter(&mut self) -> bool {
        self.depth += 1;
        self.is_hovering()
    }

    pub fn leave(&mut self) -> bool {
        self.depth = self.depth.saturating_sub(1);
        self.is_hovering()
    }

    pub fn is_hovering(&self) -> bool {
        self.depth > 0
    }
}
