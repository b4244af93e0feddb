// Shared interaction tuning constants used by the web frontend.

// Smoothing
pub const LERP_FACTOR: f32 = 0.15; // fraction of the remaining distance covered per frame
pub const SETTLE_EPSILON: f32 = 0.1; // px; below this on both axes the pointer loop goes idle

// Parallax tilt
pub const PARALLAX_BASE_DIVISOR: f32 = 50.0; // px of pointer offset per degree at depth 1
pub const DEPTH_LAYERS: usize = 3;
pub const DEPTH_STEP: f32 = 0.3;
pub const TILE_LIFT_PX_PER_DEPTH: f32 = 5.0;
pub const TILE_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILE_RESET_TRANSITION: &str = "transform 0.5s ease-out";
pub const TILE_RESET_MS: i32 = 500;

// Scroll-progress line
pub const SCROLL_LINE_SPEED: f32 = 2000.0; // px of horizontal travel per unit of progress

// Icon randomizer
pub const ICON_REASSIGN_INTERVAL_MS: i32 = 2500;
pub const ICON_STAGGER_MS: i32 = 100;

// Navbar
pub const NAVBAR_CONDENSE_SCROLL_Y: f64 = 50.0;

// Ripple
pub const RIPPLE_RADIUS_PX: f64 = 50.0;
pub const RIPPLE_LIFETIME_MS: i32 = 1000;

// In-page anchor scrolling
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 900.0;
pub const HEADER_OFFSET_PX: f64 = 80.0;

// Reveal on intersect
pub const REVEAL_STAGGER_MS: i32 = 50;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Simulated download
pub const DOWNLOAD_SIMULATION_MS: i32 = 1500;
pub const DOWNLOAD_SPINNER_HTML: &str =
    "<i class=\"fas fa-spinner fa-spin\"></i><span>Downloading...</span>";
pub const DOWNLOAD_ALERT: &str = "Download started! This is a demo.";
