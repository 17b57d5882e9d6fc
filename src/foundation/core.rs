pub use kurbo::{Point, Rect, Vec2};

/// Width of the virtual canvas in logical units.
pub const VIRTUAL_WIDTH: f64 = 1920.0;
/// Height of the virtual canvas in logical units.
pub const VIRTUAL_HEIGHT: f64 = 1080.0;
/// Smallest width/height a text block may be resized to, in virtual units.
pub const MIN_ELEMENT_SIZE: f64 = 40.0;

/// Positionable text block on a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Main heading (`content` field).
    Title,
    /// Secondary text (`subtitle` field).
    Subtitle,
}

impl TextRole {
    /// Both roles in paint order.
    pub const ALL: [TextRole; 2] = [TextRole::Title, TextRole::Subtitle];

    /// Field-name prefix used by slide records (`titlePos`, `subtitleWidth`, ...).
    pub fn prefix(self) -> &'static str {
        match self {
            TextRole::Title => "title",
            TextRole::Subtitle => "subtitle",
        }
    }
}

impl std::fmt::Display for TextRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A text role's `{position, width, height}` triple in virtual-canvas units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Top-left corner.
    pub position: Point,
    /// Block width.
    pub width: f64,
    /// Block height.
    pub height: f64,
}

impl Placement {
    /// Build a placement from raw components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point::new(x, y),
            width,
            height,
        }
    }

    /// Bounding rectangle in virtual units.
    pub fn rect(self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }

    /// Bounding rectangle mapped into a viewport rendered at `scale` pixels per virtual unit.
    pub fn to_viewport(self, scale: f64) -> Rect {
        let r = self.rect();
        Rect::new(r.x0 * scale, r.y0 * scale, r.x1 * scale, r.y1 * scale)
    }
}

/// Milliseconds since the Unix epoch; `0` if the system clock is before it.
pub fn unix_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
