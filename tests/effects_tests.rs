// Host-side tests for decorative transforms, cursor hover depth and theme persistence.

use folio_core::effects::*;
use folio_core::theme::{load_theme, toggle_theme, MemoryStore, PreferenceStore, Theme};
use folio_core::CursorHover;
use glam::Vec2;

#[test]
fn parallax_speeds_up_per_orb() {
    assert_eq!(parallax_offset(0.0, 2), 0.0);
    assert!((parallax_offset(100.0, 0) - 10.0).abs() < 1e-9);
    assert!((parallax_offset(100.0, 2) - 30.0).abs() < 1e-9);
    assert!(parallax_transform(100.0, 0).starts_with("translateY(10"));
}

#[test]
fn magnetic_pull_is_a_tenth_of_center_offset() {
    let rect = Rect::new(100.0, 50.0, 200.0, 40.0);
    assert_eq!(rect.center(), Vec2::new(200.0, 70.0));
    let off = magnetic_offset(Vec2::new(250.0, 60.0), rect);
    assert!((off.x - 5.0).abs() < 1e-5);
    assert!((off.y + 1.0).abs() < 1e-5);
    assert_eq!(magnetic_offset(rect.center(), rect), Vec2::ZERO);
    assert_eq!(magnetic_transform(Vec2::new(5.0, -1.0)), "translate(5px, -1px)");
}

#[test]
fn tilt_follows_pointer_quadrant() {
    let rect = Rect::new(0.0, 0.0, 400.0, 200.0);
    let centre = tilt(Vec2::new(200.0, 100.0), rect);
    assert_eq!(centre.rotate_x_deg, 0.0);
    assert_eq!(centre.rotate_y_deg, 0.0);

    // bottom-left corner
    let t = tilt(Vec2::new(0.0, 200.0), rect);
    assert!((t.rotate_x_deg - 5.0).abs() < 1e-5);
    assert!((t.rotate_y_deg - 10.0).abs() < 1e-5);

    let css = t.css_transform();
    assert!(css.starts_with("perspective(1000px) rotateX(5deg) rotateY(10deg)"));
    assert!(css.ends_with("scale3d(1.02, 1.02, 1.02)"));
}

#[test]
fn tilt_uses_coordinates_relative_to_the_card() {
    let a = tilt(Vec2::new(10.0, 10.0), Rect::new(0.0, 0.0, 100.0, 100.0));
    let b = tilt(Vec2::new(510.0, 310.0), Rect::new(500.0, 300.0, 100.0, 100.0));
    assert_eq!(a, b);
}

#[test]
fn nested_hover_targets_keep_cursor_hovering() {
    let mut h = CursorHover::default();
    assert!(h.enter()); // card
    assert!(h.enter()); // link inside card
    assert!(h.leave()); // back on card
    assert!(!h.leave());
    assert!(!h.leave());
    assert!(!h.is_hovering());
}

#[test]
fn theme_defaults_to_dark_and_persists_toggles() {
    let mut store = MemoryStore::default();
    assert_eq!(load_theme(&store), Theme::Dark);

    let next = toggle_theme(load_theme(&store), &mut store);
    assert_eq!(next, Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(load_theme(&store), Theme::Light);

    let back = toggle_theme(next, &mut store);
    assert_eq!(back, Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn unrecognised_stored_theme_falls_back_to_dark() {
    let mut store = MemoryStore::default();
    store.set("theme", "sepia");
    assert_eq!(load_theme(&store), Theme::Dark);
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("LIGHT"), None);
}
