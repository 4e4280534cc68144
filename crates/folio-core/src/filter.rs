//! Project gallery filter: one active category, per-card visibility.

use crate::constants::FILTER_ALL;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVisibility {
    /// Shown, replaying the fade-in animation.
    Shown,
    /// Marked hidden; the card stays in the document.
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    active: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
        }
    }
}

impl FilterState {
    /// Make `category` the single active filter. Returns true if it changed.
    pub fn select(&mut self, category: &str) -> bool {
        if self.active == category {
            return false;
        }
        log::debug!("[filter] {} -> {}", self.active, category);
        self.active = category.to_string();
        true
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether the filter button for `category` is the active one.
    pub fn button_is_active(&self, category: &str) -> bool {
        self.active == category
    }

    pub fn is_visible(&self, card_category: &str) -> bool {
        self.active == FILTER_ALL || self.active == card_category
    }

    pub fn apply<'a, I>(&self, card_categories: I) -> Vec<CardVisibility>
    where
        I: IntoIterator<Item = &'a str>,
    {
        card_categories
            .into_iter()
            .map(|c| {
                if self.is_visible(c) {
                    CardVisibility::Shown
                } else {
                    CardVisibility::Hidden
                }
            })
            .collect()
    }
}
