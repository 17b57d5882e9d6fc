//! Virtual canvas math: clamping, legacy percentage conversion and viewport scale.
//!
//! All stored layout lives in a fixed 1920x1080 logical space. Rendering surfaces of any pixel
//! size map into it through [`compute_scale`].

use crate::foundation::core::{MIN_ELEMENT_SIZE, Point, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};

/// Clamp `pos` into `[0, VIRTUAL_WIDTH] x [0, VIRTUAL_HEIGHT]`.
///
/// Never fails. A NaN component collapses to `0`.
pub fn normalize_position(pos: Point) -> Point {
    Point::new(clamp_axis(pos.x, VIRTUAL_WIDTH), clamp_axis(pos.y, VIRTUAL_HEIGHT))
}

/// Convert a legacy `0..=100` percentage position into virtual units.
///
/// No clamping is applied; callers clamp afterwards when needed.
pub fn legacy_to_virtual(percent: Option<Point>) -> Option<Point> {
    percent.map(|p| {
        Point::new(
            percent_of(p.x, VIRTUAL_WIDTH),
            percent_of(p.y, VIRTUAL_HEIGHT),
        )
    })
}

/// Pixels per virtual unit for a surface rendered `rendered_px_width` pixels wide.
///
/// Returns `0.0` for non-finite or negative widths.
pub fn compute_scale(rendered_px_width: f64) -> f64 {
    if !rendered_px_width.is_finite() || rendered_px_width < 0.0 {
        return 0.0;
    }
    rendered_px_width / VIRTUAL_WIDTH
}

/// Round and clamp a block size into `[MIN_ELEMENT_SIZE, canvas span]` per axis.
pub fn normalize_size(width: f64, height: f64) -> (f64, f64) {
    (
        clamp_extent(width, VIRTUAL_WIDTH),
        clamp_extent(height, VIRTUAL_HEIGHT),
    )
}

// Multiply first so whole-number percentages convert exactly.
pub(crate) fn percent_of(value: f64, span: f64) -> f64 {
    value * span / 100.0
}

fn clamp_axis(v: f64, max: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, max) }
}

fn clamp_extent(v: f64, max: f64) -> f64 {
    if v.is_nan() {
        return MIN_ELEMENT_SIZE;
    }
    v.round().clamp(MIN_ELEMENT_SIZE, max)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/canvas.rs"]
mod tests;
