//! Placement resolution and the placement setters used by the editing surface.
//!
//! Stored layouts come in two flavours: virtual-canvas units (current) and `0..=100` percentages
//! written by older editor builds. [`resolve_placement`] is the single place that tells them
//! apart, so a future explicit format tag only has to change this module.
//!
//! The detection rule is ambiguous: a genuine virtual position such as `(50, 80)` is read as a
//! legacy percentage. Existing projects depend on the rule, so it stays as is.

use crate::{
    deck::slide::{SlideRecord, StoredLayout},
    foundation::core::{Placement, Point, TextRole, VIRTUAL_HEIGHT, VIRTUAL_WIDTH},
    layout::canvas::{legacy_to_virtual, normalize_position, normalize_size, percent_of},
};

const LEGACY_MAX: f64 = 100.0;

/// Compiled-in placement used when a slide stores nothing for `role`.
pub fn default_placement(role: TextRole) -> Placement {
    match role {
        TextRole::Title => Placement::new(110.0, 250.0, 1700.0, 250.0),
        TextRole::Subtitle => Placement::new(110.0, 520.0, 1700.0, 500.0),
    }
}

/// Resolve where the `role` block of `slide` sits, migrating legacy percentages.
///
/// Each of position, width and height is resolved independently: a value that is missing or not
/// a finite positive number falls back to [`default_placement`], a value `<= 100` is scaled
/// against its axis span, anything else passes through. The slide is never mutated.
pub fn resolve_placement(slide: &SlideRecord, role: TextRole) -> Placement {
    resolve_stored(slide.stored_layout(role), role)
}

pub(crate) fn resolve_stored(stored: StoredLayout, role: TextRole) -> Placement {
    let def = default_placement(role);

    let position = match stored.pos.filter(|p| p.x.is_finite() && p.y.is_finite()) {
        Some(p) if p.x <= LEGACY_MAX && p.y <= LEGACY_MAX => {
            tracing::debug!(%role, x = p.x, y = p.y, "migrating legacy percentage position");
            legacy_to_virtual(Some(p)).unwrap_or(def.position)
        }
        Some(p) => p,
        None => def.position,
    };

    Placement {
        position,
        width: resolve_extent(stored.width, VIRTUAL_WIDTH).unwrap_or(def.width),
        height: resolve_extent(stored.height, VIRTUAL_HEIGHT).unwrap_or(def.height),
    }
}

fn resolve_extent(value: Option<f64>, span: f64) -> Option<f64> {
    let v = value.filter(|v| v.is_finite() && *v > 0.0)?;
    if v <= LEGACY_MAX {
        Some(percent_of(v, span))
    } else {
        Some(v)
    }
}

impl SlideRecord {
    /// Resolved placement for `role`; see [`resolve_placement`].
    pub fn placement(&self, role: TextRole) -> Placement {
        resolve_placement(self, role)
    }

    /// Store a full placement: position clamped to the canvas, size rounded and clamped to
    /// `[MIN_ELEMENT_SIZE, span]`.
    ///
    /// [`MIN_ELEMENT_SIZE`]: crate::MIN_ELEMENT_SIZE
    pub fn set_placement(&mut self, role: TextRole, placement: Placement) {
        let position = normalize_position(placement.position);
        let (width, height) = normalize_size(placement.width, placement.height);
        self.set_stored_layout(
            role,
            StoredLayout {
                pos: Some(position),
                width: Some(width),
                height: Some(height),
            },
        );
    }

    /// Move the `role` block, keeping its current resolved size.
    pub fn set_position(&mut self, role: TextRole, position: Point) {
        let current = self.placement(role);
        self.set_placement(role, Placement { position, ..current });
    }

    /// Resize the `role` block, keeping its current resolved position.
    pub fn set_size(&mut self, role: TextRole, width: f64, height: f64) {
        let current = self.placement(role);
        self.set_placement(
            role,
            Placement {
                width,
                height,
                ..current
            },
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
