use crate::config::InteractionConfig;
use crate::motion::{lerp, FrameGate};

/// How far the element has travelled through the viewport.
///
/// Negative before the element's top enters from below, 1.0 once its bottom
/// has left through the top, and keeps growing after that. Not clamped.
#[inline]
pub fn scroll_progress(viewport_height: f32, element_top: f32, element_height: f32) -> f32 {
    (viewport_height - element_top) / (viewport_height + element_height)
}

/// Smoothed horizontal offset of the feature line.
///
/// Unlike [`crate::motion::PointerLoop`] there is no settle check: frames are
/// only ever requested by scroll events, at most one outstanding at a time.
#[derive(Clone, Debug)]
pub struct ScrollLine {
    current: f32,
    target: f32,
    speed: f32,
    factor: f32,
    gate: FrameGate,
}

impl Default for ScrollLine {
    fn default() -> Self {
        Self::from_config(&InteractionConfig::default())
    }
}

impl ScrollLine {
    pub fn new(speed: f32, factor: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            speed,
            factor,
            gate: FrameGate::default(),
        }
    }

    pub fn from_config(cfg: &InteractionConfig) -> Self {
        Self::new(cfg.scroll_speed, cfg.lerp_factor)
    }

    /// Returns `true` if a frame must be requested.
    #[inline]
    pub fn scrolled(&mut self) -> bool {
        self.gate.request()
    }

    /// Advance one frame and return the offset to apply (leftwards).
    pub fn frame(&mut self, viewport_height: f32, element_top: f32, element_height: f32) -> f32 {
        self.gate.begin_frame();
        let progress = scroll_progress(viewport_height, element_top, element_height);
        self.target = progress * self.speed;
        self.current = lerp(self.current, self.target, self.factor);
        self.current
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    #[inline]
    pub fn frame_dropped(&mut self) {
        self.gate.cancel();
    }
}

#[inline]
pub fn line_transform(offset: f32) -> String {
    format!("translateX({}px)", -offset)
}
