// DOM hooks the interaction layer looks up. Every id, selector and class
// name the frontend depends on lives here.

// Cursor
pub const CURSOR_SELECTOR: &str = ".custom-cursor";
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_HOVER_CLASS: &str = "hover";
pub const CURSOR_HOVER_TARGETS: &str = "a, button, .bento-item";
pub const NO_HOVER_MEDIA: &str = "(hover: none)";

// Bento grid
pub const TILE_SELECTOR: &str = ".bento-item";
pub const ICON_SELECTOR: &str = ".bento-item i";

// Scroll-progress line
pub const FEATURE_LINE_ID: &str = "line4";

// Navbar and mobile menu
pub const NAVBAR_ID: &str = "navbar";
pub const NAVBAR_CONDENSED_CLASSES: [&str; 2] = ["nav-blur", "shadow-lg"];
pub const MOBILE_MENU_BUTTON_ID: &str = "mobile-menu-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_CLOSERS: &str = ".mobile-nav-link, .mobile-download-btn";
pub const HIDDEN_CLASS: &str = "hidden";

// In-page anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// FAQ
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const ACTIVE_CLASS: &str = "active";

// Ripple
pub const RIPPLE_CLASS: &str = "ripple";

// Downloads; `:has` is not supported everywhere, so there is a fallback
pub const DOWNLOAD_BUTTONS: &str = ".download-btn, .mobile-download-btn, button:has(.fa-download)";
pub const DOWNLOAD_BUTTONS_FALLBACK: &str = ".download-btn, .mobile-download-btn";

// Third-party animation-on-scroll global
pub const AOS_GLOBAL: &str = "AOS";
