// Host-side tests for the scroll-progress line.

use site_core::constants::{LERP_FACTOR, SCROLL_LINE_SPEED};
use site_core::{line_transform, scroll_progress, InteractionConfig, ScrollLine};

const VH: f32 = 800.0;
const H: f32 = 200.0;

#[test]
fn progress_spans_entry_to_exit() {
    // Top edge at the bottom of the viewport.
    assert_eq!(scroll_progress(VH, VH, H), 0.0);
    // Bottom edge at the top of the viewport.
    assert_eq!(scroll_progress(VH, -H, H), 1.0);
    // Centred.
    assert_eq!(scroll_progress(VH, (VH - H) / 2.0, H), 0.5);
}

#[test]
fn top_at_viewport_midpoint() {
    let p = scroll_progress(VH, VH / 2.0, H);
    assert_eq!(p, 0.5 * VH / (VH + H));

    let mut line = ScrollLine::default();
    let offset = line.frame(VH, VH / 2.0, H);
    assert!((offset - LERP_FACTOR * p * SCROLL_LINE_SPEED).abs() < 1e-3);
}

#[test]
fn progress_is_not_clamped() {
    assert!(scroll_progress(VH, 900.0, H) < 0.0);
    assert!((scroll_progress(VH, -2000.0, H) - 2.8).abs() < 1e-6);
}

#[test]
fn one_frame_moves_fraction_of_target() {
    let mut line = ScrollLine::default();
    assert!(line.scrolled());

    let offset = line.frame(VH, (VH - H) / 2.0, H);
    assert_eq!(line.target(), 0.5 * SCROLL_LINE_SPEED);
    assert!((offset - LERP_FACTOR * 0.5 * SCROLL_LINE_SPEED).abs() < 1e-3);
    assert_eq!(offset, line.offset());
}

#[test]
fn offset_approaches_target_over_frames() {
    let mut line = ScrollLine::new(1000.0, 0.5);
    let top = VH - 0.25 * (VH + H); // progress 0.25
    let mut last = line.frame(VH, top, H);
    assert_eq!(last, 125.0);
    for _ in 0..40 {
        let o = line.frame(VH, top, H);
        assert!(o >= last);
        last = o;
    }
    assert!((last - 250.0).abs() < 1e-3);
}

#[test]
fn scroll_events_coalesce_into_one_frame() {
    let mut line = ScrollLine::default();
    assert!(line.scrolled());
    assert!(!line.scrolled());
    assert!(line.is_pending());

    line.frame(VH, 0.0, H);
    // No settle check: nothing is rescheduled without another scroll.
    assert!(!line.is_pending());
    assert!(line.scrolled());
}

#[test]
fn speed_and_factor_follow_config() {
    let cfg = InteractionConfig {
        scroll_speed: 100.0,
        lerp_factor: 1.0,
        ..InteractionConfig::default()
    };
    let mut line = ScrollLine::from_config(&cfg);
    assert_eq!(line.frame(VH, -H, H), 100.0);
}

#[test]
fn transform_moves_left_for_positive_offsets() {
    assert_eq!(line_transform(150.0), "translateX(-150px)");
    assert_eq!(line_transform(-20.5), "translateX(20.5px)");
}

#[test]
fn dropped_frame_rearms_scroll_line() {
    let mut line = ScrollLine::default();
    assert!(line.scrolled());
    line.frame_dropped();
    assert!(line.scrolled());
}
