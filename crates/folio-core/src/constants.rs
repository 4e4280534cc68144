// Shared interaction tuning constants used by the web frontend.

// Cursor
pub const CURSOR_LEAD_DAMPING: f32 = 0.5; // dot closes half the gap per frame
pub const CURSOR_TRAIL_DAMPING: f32 = 0.15; // halo lags behind the dot

// Navigation (CSS px of vertical scroll)
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
pub const BACK_TO_TOP_OFFSET: f64 = 500.0;
pub const SECTION_ACTIVATION_MARGIN: f64 = 100.0; // sections activate this far before their top

// Project filter
pub const FILTER_ALL: &str = "all";
pub const CARD_FADE_IN_ANIMATION: &str = "fadeIn 0.5s ease forwards";

// Counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const LAZY_IMAGE_VISIBILITY_THRESHOLD: f64 = 0.0;

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_SIZE_MIN_PX: f32 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f32 = 4.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_DURATION_MIN_S: f32 = 10.0;
pub const PARTICLE_DURATION_SPAN_S: f32 = 10.0;
pub const PARTICLE_DELAY_MAX_S: f32 = 10.0;
pub const PARTICLE_DRIFT_MAX_PX: f32 = 100.0;
pub const PARTICLE_RGB: [u8; 3] = [99, 102, 241];

// Contact relay
pub const CONTACT_WHATSAPP_NUMBER: &str = "94764092662";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";
pub const BUDGET_FALLBACK: &str = "Not specified";
pub const SUBMIT_SIMULATED_DELAY_MS: u32 = 1500;
pub const LINK_OPEN_DELAY_MS: u32 = 500;
pub const SUBMIT_RESET_DELAY_MS: u32 = 3000;

// Rate limiting
pub const DEBOUNCE_WAIT_MS: f64 = 10.0;
pub const THROTTLE_LIMIT_MS: f64 = 100.0;

// Decorative effects
pub const PARALLAX_SPEED_STEP: f64 = 0.1; // orb i moves at (i + 1) * step
pub const MAGNETIC_STRENGTH: f32 = 0.1;
pub const TILT_DIVISOR: f32 = 20.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_SCALE: f32 = 1.02;

// Startup
pub const LOADER_HIDE_DELAY_MS: u32 = 1000;
pub const DEFERRED_EFFECTS_DELAY_MS: u32 = 1500;

// Preferences
pub const THEME_STORAGE_KEY: &str = "theme";
