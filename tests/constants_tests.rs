// Host-side tests for tuning constants and DOM hooks.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use folio_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_factors_are_valid_and_ordered() {
    assert!(CURSOR_LEAD_DAMPING > 0.0 && CURSOR_LEAD_DAMPING <= 1.0);
    assert!(CURSOR_TRAIL_DAMPING > 0.0 && CURSOR_TRAIL_DAMPING <= 1.0);
    // the halo must lag the dot
    assert!(CURSOR_TRAIL_DAMPING < CURSOR_LEAD_DAMPING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_and_timings_have_logical_relationships() {
    assert!(BACK_TO_TOP_OFFSET > NAV_SCROLLED_OFFSET);
    assert!(SECTION_ACTIVATION_MARGIN > 0.0);
    assert!(COUNTER_DURATION_MS > f64::from(COUNTER_TICK_MS));
    assert!(COUNTER_VISIBILITY_THRESHOLD > 0.0 && COUNTER_VISIBILITY_THRESHOLD <= 1.0);
    // the link opens before the form resets
    assert!(LINK_OPEN_DELAY_MS < SUBMIT_RESET_DELAY_MS);
    assert!(DEBOUNCE_WAIT_MS < THROTTLE_LIMIT_MS);
    assert!(DEFERRED_EFFECTS_DELAY_MS > LOADER_HIDE_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_positive() {
    assert_eq!(PARTICLE_COUNT, 50);
    assert!(PARTICLE_SIZE_MIN_PX > 0.0 && PARTICLE_SIZE_SPAN_PX > 0.0);
    assert!(PARTICLE_OPACITY_MIN + PARTICLE_OPACITY_SPAN <= 1.0);
    assert!(PARTICLE_DURATION_MIN_S > 0.0);
    assert!(PARTICLE_DELAY_MAX_S <= PARTICLE_DURATION_MIN_S);
}

#[test]
fn dom_hooks_are_well_formed() {
    for id in [
        CURSOR_ID,
        CURSOR_FOLLOWER_ID,
        NAVBAR_ID,
        NAV_TOGGLE_ID,
        NAV_MENU_ID,
        BACK_TO_TOP_ID,
        CONTACT_FORM_ID,
        LOADER_ID,
        PARTICLES_ID,
        THEME_TOGGLE_ID,
    ] {
        assert!(!id.is_empty() && !id.starts_with('#'), "{id}");
    }
    for attr in [ATTR_FILTER, ATTR_CATEGORY, ATTR_COUNT, ATTR_LAZY_SRC, ATTR_OBSERVE_KEY] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
    assert!(COUNTERS.contains(ATTR_COUNT));
    assert!(LAZY_IMAGES.contains(ATTR_LAZY_SRC));
    assert_eq!(THEME_STORAGE_KEY, "theme");
}
