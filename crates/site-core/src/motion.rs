//! Cursor smoothing and bento-tile parallax.
//!
//! The pointer loop is driven by two inputs: pointer-move samples and frame
//! callbacks. Samples only overwrite the target; frames step the displayed
//! position toward it. Once both axes are within the settle epsilon the loop
//! reports that no further frame is needed, so an idle pointer costs nothing.

use crate::config::InteractionConfig;
use crate::constants::{
    DEPTH_LAYERS, DEPTH_STEP, PARALLAX_BASE_DIVISOR, TILE_LIFT_PX_PER_DEPTH, TILE_PERSPECTIVE_PX,
};
use glam::Vec2;

#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Coalesces frame requests: at most one frame is outstanding at a time.
#[derive(Default, Clone, Copy, Debug)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller must actually request a frame.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called first thing inside the frame callback.
    #[inline]
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The requested frame will never arrive; let the next request through.
    #[inline]
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct SmoothedPointer {
    pub target: Vec2,
    pub current: Vec2,
}

impl SmoothedPointer {
    #[inline]
    pub fn step(&mut self, factor: f32) -> Vec2 {
        self.current = Vec2::new(
            lerp(self.current.x, self.target.x, factor),
            lerp(self.current.y, self.target.y, factor),
        );
        self.current
    }

    #[inline]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        let d = (self.target - self.current).abs();
        d.x <= epsilon && d.y <= epsilon
    }
}

/// What a single frame of the pointer loop wants written to the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerFrame {
    /// Smoothed position for the cursor ring and dot.
    pub cursor: Vec2,
    /// Raw pointer position; tiles tilt toward this, not the smoothed one.
    pub pointer: Vec2,
    pub reschedule: bool,
}

#[derive(Clone, Debug)]
pub struct PointerLoop {
    pointer: SmoothedPointer,
    gate: FrameGate,
    factor: f32,
    epsilon: f32,
}

impl Default for PointerLoop {
    fn default() -> Self {
        Self::from_config(&InteractionConfig::default())
    }
}

impl PointerLoop {
    pub fn new(factor: f32, epsilon: f32) -> Self {
        Self {
            pointer: SmoothedPointer::default(),
            gate: FrameGate::default(),
            factor,
            epsilon,
        }
    }

    pub fn from_config(cfg: &InteractionConfig) -> Self {
        Self::new(cfg.lerp_factor, cfg.settle_epsilon)
    }

    /// Record a pointer sample. Returns `true` if a frame must be requested.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        self.pointer.target = Vec2::new(x, y);
        self.gate.request()
    }

    pub fn frame(&mut self) -> PointerFrame {
        self.gate.begin_frame();
        let cursor = self.pointer.step(self.factor);
        let reschedule = !self.pointer.is_settled(self.epsilon);
        if reschedule {
            self.gate.request();
        }
        PointerFrame {
            cursor,
            pointer: self.pointer.target,
            reschedule,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// The host could not schedule the frame this loop asked for.
    #[inline]
    pub fn frame_dropped(&mut self) {
        self.gate.cancel();
    }

    #[inline]
    pub fn pointer(&self) -> &SmoothedPointer {
        &self.pointer
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TileRect {
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Vertical overlap test only; tiles never scroll horizontally.
    #[inline]
    pub fn in_viewport(&self, viewport_height: f32) -> bool {
        !(self.bottom() < 0.0 || self.top > viewport_height)
    }
}

/// Depth layer of the tile at `index` in document order: 1.0, 1.3, 1.6, 1.0, ...
#[inline]
pub fn depth_factor(index: usize) -> f32 {
    1.0 + (index % DEPTH_LAYERS) as f32 * DEPTH_STEP
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate_z_px: f32,
}

impl TiltPose {
    pub const NEUTRAL: TiltPose = TiltPose {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        translate_z_px: 0.0,
    };

    /// Tilt of tile `index` toward `pointer`. Deeper layers get a smaller
    /// divisor and therefore tilt further for the same pointer offset.
    pub fn toward(pointer: Vec2, tile: &TileRect, index: usize) -> Self {
        let depth = depth_factor(index);
        let d = (pointer - tile.center()) / (PARALLAX_BASE_DIVISOR / depth);
        Self {
            rotate_x_deg: -d.y,
            rotate_y_deg: d.x,
            translate_z_px: depth * TILE_LIFT_PX_PER_DEPTH,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            TILE_PERSPECTIVE_PX, self.rotate_x_deg, self.rotate_y_deg, self.translate_z_px
        )
    }
}

#[inline]
pub fn cursor_transform(pos: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", pos.x, pos.y)
}
