pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod icons;
pub mod motion;
pub mod scroll_line;
pub mod timers;
pub mod toggles;

pub use config::*;
pub use glam::Vec2;
pub use error::CoreError;
pub use icons::{IconAnimation, IconPalette, IconRandomizer, RandomSource, SeededRandom};
pub use motion::*;
pub use scroll_line::*;
pub use timers::PendingSet;
pub use toggles::*;

use constants::{REVEAL_STAGGER_MS, RIPPLE_RADIUS_PX};

/// Top-left corner of a ripple centred on the click point.
#[inline]
pub fn ripple_origin(client_x: f64, client_y: f64) -> (f64, f64) {
    (client_x - RIPPLE_RADIUS_PX, client_y - RIPPLE_RADIUS_PX)
}

/// Delay before revealing the `k`-th intersecting entry of one observer batch.
#[inline]
pub fn reveal_delay_ms(batch_index: usize) -> i32 {
    batch_index as i32 * REVEAL_STAGGER_MS
}
