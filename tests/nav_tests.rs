// Host-side tests for navigation state: scroll thresholds, active section, menu.

use folio_core::nav::{active_section_for, anchor_target, NavigationState, SectionBounds};

fn page() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 800.0),
        SectionBounds::new("about", 800.0, 600.0),
        SectionBounds::new("projects", 1400.0, 1000.0),
        SectionBounds::new("contact", 2400.0, 700.0),
    ]
}

const LINKS: [&str; 4] = ["#home", "#about", "#projects", "#contact"];

fn active_links(nav: &NavigationState) -> Vec<&'static str> {
    LINKS
        .iter()
        .copied()
        .filter(|href| nav.link_is_active(href))
        .collect()
}

#[test]
fn scroll_thresholds_toggle_flags() {
    let mut nav = NavigationState::default();
    let u = nav.on_scroll(50.0, &[]);
    assert!(!u.scrolled);
    assert!(!u.back_to_top_visible);

    let u = nav.on_scroll(51.0, &[]);
    assert!(u.scrolled);
    assert!(!u.back_to_top_visible);

    let u = nav.on_scroll(501.0, &[]);
    assert!(u.scrolled && u.back_to_top_visible);
    assert!(nav.is_scrolled() && nav.is_back_to_top_visible());

    let u = nav.on_scroll(0.0, &[]);
    assert!(!u.scrolled && !u.back_to_top_visible);
}

#[test]
fn section_activates_one_margin_early() {
    let mut nav = NavigationState::default();
    let sections = page();
    // about spans [700, 1300)
    nav.on_scroll(699.0, &sections);
    assert_eq!(nav.active_section(), Some("home"));
    nav.on_scroll(700.0, &sections);
    assert_eq!(nav.active_section(), Some("about"));
    nav.on_scroll(1299.0, &sections);
    assert_eq!(nav.active_section(), Some("about"));
    nav.on_scroll(1300.0, &sections);
    assert_eq!(nav.active_section(), Some("projects"));
}

#[test]
fn exactly_one_link_active_inside_a_section() {
    let mut nav = NavigationState::default();
    let sections = page();
    for offset in [0.0, 350.0, 900.0, 1800.0, 2500.0, 2999.0] {
        nav.on_scroll(offset, &sections);
        assert_eq!(active_links(&nav).len(), 1, "offset {offset}");
    }
}

#[test]
fn no_link_active_above_all_sections() {
    let mut nav = NavigationState::default();
    let sections = vec![
        SectionBounds::new("about", 900.0, 600.0),
        SectionBounds::new("contact", 1500.0, 600.0),
    ];
    nav.on_scroll(1000.0, &sections);
    assert_eq!(active_links(&nav), vec!["#about"]);

    let u = nav.on_scroll(100.0, &sections);
    assert!(u.active_changed);
    assert_eq!(u.active_section, None);
    assert!(active_links(&nav).is_empty());
}

#[test]
fn overlapping_sections_resolve_to_last_match() {
    let sections = vec![
        SectionBounds::new("hero", 0.0, 1000.0),
        SectionBounds::new("intro", 500.0, 400.0),
    ];
    let hit = active_section_for(600.0, &sections, 100.0).map(|s| s.id.as_str());
    assert_eq!(hit, Some("intro"));
    let hit = active_section_for(850.0, &sections, 100.0).map(|s| s.id.as_str());
    assert_eq!(hit, Some("hero"));
}

#[test]
fn active_changed_only_reports_transitions() {
    let mut nav = NavigationState::default();
    let sections = page();
    assert!(nav.on_scroll(10.0, &sections).active_changed);
    assert!(!nav.on_scroll(20.0, &sections).active_changed);
    assert!(nav.on_scroll(750.0, &sections).active_changed);
}

#[test]
fn menu_toggle_and_close() {
    let mut nav = NavigationState::default();
    assert!(!nav.is_menu_open());
    assert!(nav.toggle_menu());
    assert!(nav.is_menu_open());
    assert!(!nav.toggle_menu());
    nav.toggle_menu();
    nav.close_menu();
    assert!(!nav.is_menu_open());
    nav.close_menu();
    assert!(!nav.is_menu_open());
}

#[test]
fn anchor_targets() {
    assert_eq!(anchor_target("#contact"), Some("contact"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
    assert_eq!(anchor_target("about"), None);
}
