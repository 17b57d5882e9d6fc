//! Pointer math shared by drag and resize gestures.
//!
//! Pointer coordinates arrive in screen pixels relative to the canvas' top-left corner. They are
//! divided by the scale from [`compute_scale`](crate::compute_scale), rounded to whole virtual
//! units, and clamped before anything is stored.

use crate::{
    foundation::core::{MIN_ELEMENT_SIZE, Placement, Point, Vec2},
    layout::canvas::normalize_position,
};

/// One of the eight resize grips around a text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Top-left corner.
    TopLeft,
    /// Top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Right edge.
    Right,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom edge.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Left edge.
    Left,
}

impl ResizeHandle {
    fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }
}

/// Convert a screen-space delta into whole virtual units.
///
/// A non-positive or non-finite `scale` leaves the delta untouched.
pub fn screen_to_virtual(delta: Vec2, scale: f64) -> Vec2 {
    if !(scale.is_finite() && scale > 0.0) {
        return delta;
    }
    Vec2::new((delta.x / scale).round(), (delta.y / scale).round())
}

/// Where inside the element the pointer grabbed it, in virtual units.
pub fn grab_offset(pointer_px: Point, element_origin_px: Point, scale: f64) -> Vec2 {
    let d = pointer_px - element_origin_px;
    if !(scale.is_finite() && scale > 0.0) {
        return d;
    }
    Vec2::new(d.x / scale, d.y / scale)
}

/// Follow the pointer while dragging: the block's top-left lands at `pointer - grab`.
///
/// The size is kept; the new position is rounded and clamped to the canvas.
pub fn drag_to(pointer_px: Point, grab: Vec2, scale: f64, current: Placement) -> Placement {
    let pointer = pointer_to_virtual(pointer_px, scale);
    let origin = Point::new((pointer.x - grab.x).round(), (pointer.y - grab.y).round());
    Placement {
        position: normalize_position(origin),
        ..current
    }
}

/// Convert a canvas-relative pointer in pixels into (unrounded) virtual units.
pub fn pointer_to_virtual(pointer_px: Point, scale: f64) -> Point {
    if !(scale.is_finite() && scale > 0.0) {
        return pointer_px;
    }
    Point::new(pointer_px.x / scale, pointer_px.y / scale)
}

/// Resize `initial` by dragging `handle` to `pointer` (virtual units).
///
/// Left/top grips move the origin while the opposite edge stays put; right/bottom grips grow from
/// the fixed origin. Either way no side shrinks below [`MIN_ELEMENT_SIZE`].
pub fn resize(initial: Placement, handle: ResizeHandle, pointer: Point) -> Placement {
    let mut x = initial.position.x;
    let mut y = initial.position.y;
    let mut width = initial.width;
    let mut height = initial.height;

    let right = initial.position.x + initial.width;
    let bottom = initial.position.y + initial.height;

    if handle.moves_left() {
        x = pointer.x.min(right - MIN_ELEMENT_SIZE);
        width = right - x;
    } else if handle.moves_right() {
        width = (pointer.x - initial.position.x).max(MIN_ELEMENT_SIZE);
    }

    if handle.moves_top() {
        y = pointer.y.min(bottom - MIN_ELEMENT_SIZE);
        height = bottom - y;
    } else if handle.moves_bottom() {
        height = (pointer.y - initial.position.y).max(MIN_ELEMENT_SIZE);
    }

    Placement {
        position: normalize_position(Point::new(x.round(), y.round())),
        width: width.round(),
        height: height.round(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/interaction.rs"]
mod tests;
