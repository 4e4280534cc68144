//! Navigation bar state: scroll thresholds, active section, mobile menu.

use crate::constants::{BACK_TO_TOP_OFFSET, NAV_SCROLLED_OFFSET, SECTION_ACTIVATION_MARGIN};

/// Geometry of one `section[id]` as measured on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open range `[top - margin, top - margin + height)`.
    #[inline]
    pub fn contains(&self, offset: f64, margin: f64) -> bool {
        let start = self.top - margin;
        offset >= start && offset < start + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavThresholds {
    pub scrolled: f64,
    pub back_to_top: f64,
    pub section_margin: f64,
}

impl Default for NavThresholds {
    fn default() -> Self {
        Self {
            scrolled: NAV_SCROLLED_OFFSET,
            back_to_top: BACK_TO_TOP_OFFSET,
            section_margin: SECTION_ACTIVATION_MARGIN,
        }
    }
}

/// Result of one scroll tick, applied to the DOM by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct NavUpdate {
    pub scrolled: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
    pub active_changed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct NavigationState {
    menu_open: bool,
    active_section: Option<String>,
    scrolled: bool,
    back_to_top_visible: bool,
    thresholds: NavThresholds,
}

impl NavigationState {
    pub fn new(thresholds: NavThresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionBounds]) -> NavUpdate {
        self.scrolled = offset > self.thresholds.scrolled;
        self.back_to_top_visible = offset > self.thresholds.back_to_top;

        let active = active_section_for(offset, sections, self.thresholds.section_margin)
            .map(|s| s.id.clone());
        let active_changed = active != self.active_section;
        if active_changed {
            log::debug!("[nav] active section {:?} -> {:?}", self.active_section, active);
        }
        self.active_section = active;

        NavUpdate {
            scrolled: self.scrolled,
            back_to_top_visible: self.back_to_top_visible,
            active_section: self.active_section.clone(),
            active_changed,
        }
    }

    /// Flip the mobile menu and return the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Whether a nav link with this `href` should carry the active class.
    pub fn link_is_active(&self, href: &str) -> bool {
        match (self.active_section(), anchor_target(href)) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}

/// Section containing `offset`. When ranges overlap the last one in
/// document order wins.
pub fn active_section_for<'a>(
    offset: f64,
    sections: &'a [SectionBounds],
    margin: f64,
) -> Option<&'a SectionBounds> {
    sections.iter().filter(|s| s.contains(offset, margin)).last()
}

/// In-page anchor target id for an `href`, if it names one.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
