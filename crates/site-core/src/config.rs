//! Runtime-tunable interaction parameters.
//!
//! Defaults come from [`crate::constants`]. A page can override a few of them
//! through `data-*` attributes on `<body>`; the web frontend passes a lookup
//! closure so this module stays free of DOM types.

use crate::constants::{ICON_REASSIGN_INTERVAL_MS, LERP_FACTOR, SCROLL_LINE_SPEED, SETTLE_EPSILON};
use crate::error::CoreError;

pub const LERP_FACTOR_KEY: &str = "data-lerp-factor";
pub const SETTLE_EPSILON_KEY: &str = "data-settle-epsilon";
pub const SCROLL_SPEED_KEY: &str = "data-scroll-speed";
pub const ICON_INTERVAL_KEY: &str = "data-icon-interval-ms";

pub const OVERRIDE_KEYS: [&str; 4] = [
    LERP_FACTOR_KEY,
    SETTLE_EPSILON_KEY,
    SCROLL_SPEED_KEY,
    ICON_INTERVAL_KEY,
];

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub lerp_factor: f32,
    pub settle_epsilon: f32,
    pub scroll_speed: f32,
    pub icon_interval_ms: i32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            lerp_factor: LERP_FACTOR,
            settle_epsilon: SETTLE_EPSILON,
            scroll_speed: SCROLL_LINE_SPEED,
            icon_interval_ms: ICON_REASSIGN_INTERVAL_MS,
        }
    }
}

impl InteractionConfig {
    /// Apply every override `lookup` knows about. Bad values are logged and
    /// skipped so a typo in markup never disables the interactions.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        for key in OVERRIDE_KEYS {
            if let Some(raw) = lookup(key) {
                if let Err(e) = self.apply_override(key, &raw) {
                    log::warn!("[config] {}; keeping default", e);
                }
            }
        }
        self
    }

    pub fn apply_override(&mut self, key: &str, raw: &str) -> Result<(), CoreError> {
        let invalid = || CoreError::InvalidOverride {
            key: key.to_string(),
            value: raw.to_string(),
        };
        let raw_trim = raw.trim();
        match key {
            LERP_FACTOR_KEY => {
                let v: f32 = raw_trim.parse().map_err(|_| invalid())?;
                if !(v > 0.0 && v <= 1.0) {
                    return Err(invalid());
                }
                self.lerp_factor = v;
            }
            SETTLE_EPSILON_KEY => {
                let v: f32 = raw_trim.parse().map_err(|_| invalid())?;
                if !(v.is_finite() && v > 0.0) {
                    return Err(invalid());
                }
                self.settle_epsilon = v;
            }
            SCROLL_SPEED_KEY => {
                let v: f32 = raw_trim.parse().map_err(|_| invalid())?;
                if !v.is_finite() {
                    return Err(invalid());
                }
                self.scroll_speed = v;
            }
            ICON_INTERVAL_KEY => {
                let v: i32 = raw_trim.parse().map_err(|_| invalid())?;
                if v <= 0 {
                    return Err(invalid());
                }
                self.icon_interval_ms = v;
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

/// Options handed to the animation-on-scroll library's `init`.
#[derive(Clone, Debug, PartialEq)]
pub struct AosConfig {
    pub duration_ms: u32,
    pub once: bool,
    pub offset_px: u32,
    pub easing: &'static str,
}

impl Default for AosConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            once: true,
            offset_px: 100,
            easing: "ease-out",
        }
    }
}
