use crate::constants::{HEADER_OFFSET_PX, SMOOTH_SCROLL_DURATION_MS};

#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Where the page should scroll to so an anchor target lands below the fixed
/// header.
#[inline]
pub fn anchor_destination(target_top: f64, scroll_y: f64) -> f64 {
    target_top + scroll_y - HEADER_OFFSET_PX
}

/// Time-based scroll animation sampled once per animation frame with the
/// frame timestamp. The first sample pins the start time.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTween {
    start: f64,
    distance: f64,
    duration_ms: f64,
    start_time: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSample {
    pub y: f64,
    pub done: bool,
}

impl ScrollTween {
    pub fn new(start: f64, end: f64) -> Self {
        Self::with_duration(start, end, SMOOTH_SCROLL_DURATION_MS)
    }

    pub fn with_duration(start: f64, end: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: end - start,
            duration_ms,
            start_time: None,
        }
    }

    pub fn sample(&mut self, now_ms: f64) -> TweenSample {
        let t0 = *self.start_time.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - t0) / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        TweenSample {
            y: self.start + self.distance * ease_in_out_quad(progress),
            done: progress >= 1.0,
        }
    }
}
