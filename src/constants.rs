// DOM hooks the page markup exposes to the web frontend.

// Cursor
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_FOLLOWER_ID: &str = "cursor-follower";
pub const HOVER_TARGETS: &str = "a, button, .project-card, .service-card, .skill-item";

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_LINKS: &str = ".nav-link";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const SECTIONS: &str = "section[id]";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

// Gallery and stats
pub const FILTER_BUTTONS: &str = ".filter-btn";
pub const PROJECT_CARDS: &str = ".project-card";
pub const COUNTERS: &str = ".stat-number[data-count]";
pub const LAZY_IMAGES: &str = "img[data-src]";

// Contact
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON: &str = ".btn-submit";

// Decoration
pub const LOADER_ID: &str = "loader";
pub const PARTICLES_ID: &str = "particles";
pub const GRADIENT_ORBS: &str = ".gradient-orb";
pub const MAGNETIC_BUTTONS: &str = ".btn-primary, .btn-secondary";
pub const TILT_CARDS: &str = ".project-card, .service-card";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Classes and attributes toggled by the controllers
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_HOVERING: &str = "hovering";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_PARTICLE: &str = "particle";
pub const ATTR_FILTER: &str = "data-filter";
pub const ATTR_CATEGORY: &str = "data-category";
pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_LAZY_SRC: &str = "data-src";
pub const ATTR_OBSERVE_KEY: &str = "data-folio-key";
pub const ATTR_THEME: &str = "data-theme";

// Submit button icons, appended after the label text
pub const ICON_SENDING: &str = "fas fa-spinner fa-spin";
pub const ICON_SENT: &str = "fas fa-check";
pub const ICON_ERROR: &str = "fas fa-exclamation-circle";
pub const SUBMIT_BG_SENT: &str = "linear-gradient(135deg, #10b981 0%, #06b6d4 100%)";
pub const SUBMIT_BG_ERROR: &str = "linear-gradient(135deg, #ef4444 0%, #f59e0b 100%)";
