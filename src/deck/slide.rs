use serde_json::{Map, Value};

use crate::{
    deck::lenient,
    deck::tokens::{SlideTransition, TextAnimation},
    foundation::core::{Point, TextRole},
    layout::placement::default_placement,
    playback::timer::{TIMER_DEFAULT_DELAY_SECS, validate_delay},
};

const DEFAULT_BACKGROUND: &str = "bg-gradient-to-br from-blue-600 to-indigo-800";
const DEFAULT_TEXT_COLOR: &str = "#ffffff";
const DEFAULT_FONT_FAMILY: &str = "sans-serif";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Full persisted/editable state of one slide.
///
/// Field names serialize in camelCase to stay compatible with the editor's project files. Fields
/// this type does not model are kept in [`SlideRecord::extra`] and written back unchanged.
pub struct SlideRecord {
    /// Stable identifier, assigned at creation.
    pub id: String,
    /// Named background style token; empty when a custom image is set.
    #[serde(default)]
    pub background: String,
    /// Local blob handle at runtime, archive-relative path when serialized.
    #[serde(default, deserialize_with = "lenient::text")]
    pub custom_image: Option<String>,
    /// Title text.
    #[serde(default)]
    pub content: String,
    /// Subtitle text.
    #[serde(default)]
    pub subtitle: String,

    /// Title font size in px.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<f64>,
    /// Subtitle font size in px.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub subtitle_font_size: Option<f64>,
    /// Title CSS color.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    /// Subtitle CSS color.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub subtitle_color: Option<String>,
    /// Bold title.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub title_bold: bool,
    /// Italic title.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub title_italic: bool,
    /// Bold subtitle.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub subtitle_bold: bool,
    /// Italic subtitle.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub subtitle_italic: bool,
    /// Title font family, overriding [`SlideRecord::font_family`].
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub title_font_family: Option<String>,
    /// Subtitle font family, overriding [`SlideRecord::font_family`].
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub subtitle_font_family: Option<String>,
    /// Font family shared by both roles.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Scene transition token (see [`SlideTransition`]).
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    /// Scene transition duration in seconds.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<f64>,
    /// Text entrance animation token (see [`TextAnimation`]).
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub text_animation: Option<String>,
    /// Delay before the text animation starts, in seconds.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub text_animation_delay: Option<f64>,
    /// Text animation duration in seconds.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub text_animation_duration: Option<f64>,

    /// Advance to the next slide automatically during playback.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub auto_advance: bool,
    /// Seconds before auto-advance; validated to `1..=300` on use.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub auto_advance_delay: Option<f64>,

    /// Stored title position (virtual units, or legacy percentages).
    #[serde(default, deserialize_with = "lenient::point", skip_serializing_if = "Option::is_none")]
    pub title_pos: Option<Point>,
    /// Stored title width.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub title_width: Option<f64>,
    /// Stored title height.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub title_height: Option<f64>,
    /// Stored subtitle position (virtual units, or legacy percentages).
    #[serde(default, deserialize_with = "lenient::point", skip_serializing_if = "Option::is_none")]
    pub subtitle_pos: Option<Point>,
    /// Stored subtitle width.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub subtitle_width: Option<f64>,
    /// Stored subtitle height.
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub subtitle_height: Option<f64>,

    /// Fields not modelled above, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw layout fields for one role, exactly as stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StoredLayout {
    /// `{role}Pos`.
    pub pos: Option<Point>,
    /// `{role}Width`.
    pub width: Option<f64>,
    /// `{role}Height`.
    pub height: Option<f64>,
}

/// Resolved typography for one text role.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    /// Font size in px.
    pub font_size: f64,
    /// CSS color.
    pub color: String,
    /// Bold weight.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
    /// Font family.
    pub font_family: String,
}

/// Build a blank slide with the standard template and virtual-canvas placements.
///
/// This is the only place the template lives; deck creation and reset both go through it.
pub fn default_slide(id: impl Into<String>) -> SlideRecord {
    let title = default_placement(TextRole::Title);
    let subtitle = default_placement(TextRole::Subtitle);
    SlideRecord {
        id: id.into(),
        background: DEFAULT_BACKGROUND.to_string(),
        custom_image: None,
        content: "Welcome to your presentation".to_string(),
        subtitle: "Click to edit the text".to_string(),
        title_font_size: Some(80.0),
        subtitle_font_size: Some(40.0),
        title_color: Some(DEFAULT_TEXT_COLOR.to_string()),
        subtitle_color: Some(DEFAULT_TEXT_COLOR.to_string()),
        title_bold: false,
        title_italic: false,
        subtitle_bold: false,
        subtitle_italic: false,
        title_font_family: None,
        subtitle_font_family: None,
        font_family: None,
        transition: Some(SlideTransition::default().as_str().to_string()),
        transition_duration: Some(1.0),
        text_animation: Some(TextAnimation::default().as_str().to_string()),
        text_animation_delay: Some(0.5),
        text_animation_duration: Some(1.0),
        auto_advance: false,
        auto_advance_delay: Some(f64::from(TIMER_DEFAULT_DELAY_SECS)),
        title_pos: Some(title.position),
        title_width: Some(title.width),
        title_height: Some(title.height),
        subtitle_pos: Some(subtitle.position),
        subtitle_width: Some(subtitle.width),
        subtitle_height: Some(subtitle.height),
        extra: Map::new(),
    }
}

impl SlideRecord {
    /// Text shown in the block for `role`.
    pub fn text(&self, role: TextRole) -> &str {
        match role {
            TextRole::Title => &self.content,
            TextRole::Subtitle => &self.subtitle,
        }
    }

    /// Raw `{role}Pos` / `{role}Width` / `{role}Height` fields.
    pub fn stored_layout(&self, role: TextRole) -> StoredLayout {
        match role {
            TextRole::Title => StoredLayout {
                pos: self.title_pos,
                width: self.title_width,
                height: self.title_height,
            },
            TextRole::Subtitle => StoredLayout {
                pos: self.subtitle_pos,
                width: self.subtitle_width,
                height: self.subtitle_height,
            },
        }
    }

    /// Overwrite the raw layout fields for `role` without validation.
    pub fn set_stored_layout(&mut self, role: TextRole, layout: StoredLayout) {
        let (pos, width, height) = match role {
            TextRole::Title => (
                &mut self.title_pos,
                &mut self.title_width,
                &mut self.title_height,
            ),
            TextRole::Subtitle => (
                &mut self.subtitle_pos,
                &mut self.subtitle_width,
                &mut self.subtitle_height,
            ),
        };
        *pos = layout.pos;
        *width = layout.width;
        *height = layout.height;
    }

    /// Resolved typography for `role`, with the editor's fallbacks applied.
    pub fn text_style(&self, role: TextRole) -> TextStyle {
        let (size, color, bold, italic, family, default_size) = match role {
            TextRole::Title => (
                self.title_font_size,
                &self.title_color,
                self.title_bold,
                self.title_italic,
                &self.title_font_family,
                80.0,
            ),
            TextRole::Subtitle => (
                self.subtitle_font_size,
                &self.subtitle_color,
                self.subtitle_bold,
                self.subtitle_italic,
                &self.subtitle_font_family,
                40.0,
            ),
        };
        let legacy_color = self.extra.get("textColor").and_then(Value::as_str);
        TextStyle {
            font_size: size.filter(|s| *s > 0.0).unwrap_or(default_size),
            color: color
                .as_deref()
                .or(legacy_color)
                .unwrap_or(DEFAULT_TEXT_COLOR)
                .to_string(),
            bold,
            italic,
            font_family: family
                .as_deref()
                .or(self.font_family.as_deref())
                .unwrap_or(DEFAULT_FONT_FAMILY)
                .to_string(),
        }
    }

    /// Parsed transition; `None` when the stored token is missing or unknown.
    pub fn transition_kind(&self) -> Option<SlideTransition> {
        self.transition
            .as_deref()
            .and_then(|t| SlideTransition::parse(t).ok())
    }

    /// Parsed text animation; `None` when the stored token is missing or unknown.
    pub fn text_animation_kind(&self) -> Option<TextAnimation> {
        self.text_animation
            .as_deref()
            .and_then(|t| TextAnimation::parse(t).ok())
    }

    /// Validated auto-advance delay in whole seconds.
    ///
    /// A stored `0` counts as unset and yields the default, like a missing value.
    pub fn auto_advance_delay_secs(&self) -> u32 {
        validate_delay(
            self.auto_advance_delay
                .filter(|d| *d != 0.0)
                .unwrap_or(f64::from(TIMER_DEFAULT_DELAY_SECS)),
        )
    }

    /// Store a validated auto-advance delay.
    pub fn set_auto_advance_delay(&mut self, secs: f64) {
        self.auto_advance_delay = Some(f64::from(validate_delay(secs)));
    }

    /// Point the slide at a custom image and drop the named background.
    pub fn set_custom_image(&mut self, handle: impl Into<String>) {
        self.custom_image = Some(handle.into());
        self.background.clear();
    }

    /// Switch back to a named background, dropping any custom image reference.
    ///
    /// Returns the previous image reference so the caller can release it.
    pub fn set_background(&mut self, token: impl Into<String>) -> Option<String> {
        self.background = token.into();
        self.custom_image.take()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/slide.rs"]
mod tests;
