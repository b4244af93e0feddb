// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the DOM hook list directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    // Smoothing must converge without overshoot
    assert!(LERP_FACTOR > 0.0 && LERP_FACTOR <= 1.0);
    assert!(SETTLE_EPSILON > 0.0);

    // Deepest layer still divides by a positive amount
    let deepest = 1.0 + (DEPTH_LAYERS - 1) as f32 * DEPTH_STEP;
    assert!(PARALLAX_BASE_DIVISOR / deepest > 0.0);
    assert!(TILE_PERSPECTIVE_PX > 0.0);

    // Timers
    assert!(ICON_REASSIGN_INTERVAL_MS > 0);
    assert!(ICON_STAGGER_MS > 0);
    assert!(RIPPLE_LIFETIME_MS > 0);
    assert!(DOWNLOAD_SIMULATION_MS > 0);
    assert!(SMOOTH_SCROLL_DURATION_MS > 0.0);

    // Reveal observer
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
fn tile_reset_transition_matches_timer() {
    let secs = TILE_RESET_MS as f32 / 1000.0;
    assert!(TILE_RESET_TRANSITION.contains(&format!("{}s", secs)));
}

#[test]
fn selectors_are_well_formed() {
    for sel in [
        CURSOR_SELECTOR,
        CURSOR_DOT_SELECTOR,
        TILE_SELECTOR,
        ICON_SELECTOR,
        FAQ_ITEM_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
    assert!(ICON_SELECTOR.starts_with(TILE_SELECTOR));
    assert!(CURSOR_HOVER_TARGETS.contains(TILE_SELECTOR));

    // Ids are looked up with getElementById, so no leading '#'.
    for id in [FEATURE_LINE_ID, NAVBAR_ID, MOBILE_MENU_BUTTON_ID, MOBILE_MENU_ID] {
        assert!(!id.is_empty() && !id.starts_with('#'), "{id}");
    }
}

#[test]
fn download_fallback_drops_only_has_clause() {
    assert!(DOWNLOAD_BUTTONS.contains(":has("));
    assert!(!DOWNLOAD_BUTTONS_FALLBACK.contains(":has("));
    assert!(DOWNLOAD_BUTTONS.starts_with(DOWNLOAD_BUTTONS_FALLBACK));
}
