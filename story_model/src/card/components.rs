//! Nested records that make up a story card.

use serde::{Deserialize, Serialize};

use super::HoverKind;

pub const DEFAULT_TITLE_COLOR: &str = "#041c3d";
pub const DEFAULT_BODY_COLOR: &str = "#667085";
pub const DEFAULT_BULLETS_COLOR: &str = "#1c2c4d";
pub const DEFAULT_ACCENT_COLOR: &str = "#f26c2b";
pub const DEFAULT_SHADOW_COLOR: &str = "#000000";

/// Per-field text colors, each a hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    pub title: String,
    pub body: String,
    pub bullets: String,
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_COLOR.to_string(),
            body: DEFAULT_BODY_COLOR.to_string(),
            bullets: DEFAULT_BULLETS_COLOR.to_string(),
        }
    }
}

/// Signed pixel offset of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Frame size: width as a percentage of the column, height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Font families offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Montserrat,
}

impl FontFamily {
    /// Parse a persisted family key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sans" => Some(FontFamily::Sans),
            "montserrat" => Some(FontFamily::Montserrat),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FontFamily::Sans => "sans",
            FontFamily::Montserrat => "montserrat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSettings {
    pub family: FontFamily,
    /// Size in pixels.
    pub size: f64,
}

impl FontSettings {
    pub fn new(family: FontFamily, size: f64) -> Self {
        Self { family, size }
    }
}

/// The image region of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryImage {
    pub url: String,
    pub alt_text: String,
    /// Round only one corner instead of all four.
    pub single_corner: bool,
    /// Mirror the rounded corner. Only meaningful with `single_corner`.
    pub corner_reversed: bool,
    pub position: Coordinates,
    pub size: FrameSize,
}

impl Default for StoryImage {
    fn default() -> Self {
        Self {
            url: String::new(),
            alt_text: "Story image".to_string(),
            single_corner: false,
            corner_reversed: false,
            position: Coordinates::default(),
            size: FrameSize::new(100.0, 360.0),
        }
    }
}

/// The text region of a card. `size.height` is a minimum height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrame {
    pub position: Coordinates,
    pub size: FrameSize,
    pub title_font: FontSettings,
    pub body_font: FontSettings,
    pub bullet_font: FontSettings,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            position: Coordinates::default(),
            size: FrameSize::new(100.0, 240.0),
            title_font: FontSettings::new(FontFamily::Montserrat, 28.0),
            body_font: FontSettings::new(FontFamily::Sans, 16.0),
            bullet_font: FontSettings::new(FontFamily::Sans, 15.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverShadow {
    pub color: String,
    /// 0.0 - 1.0.
    pub opacity: f64,
    /// Blur radius in pixels.
    pub blur: f64,
}

/// Hover behaviour for one region of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEffectConfig {
    pub enabled: bool,
    /// Transition duration in milliseconds.
    pub duration: f64,
    pub shadow: HoverShadow,
}

impl HoverEffectConfig {
    /// Disabled effect with the defaults for `kind`.
    ///
    /// Text and image defaults differ; never use one for the other.
    pub fn default_for(kind: HoverKind) -> Self {
        let (duration, opacity, blur) = match kind {
            HoverKind::Text => (250.0, 0.15, 25.0),
            HoverKind::Image => (350.0, 0.2, 35.0),
        };
        Self {
            enabled: false,
            duration,
            shadow: HoverShadow {
                color: DEFAULT_SHADOW_COLOR.to_string(),
                opacity,
                blur,
            },
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Shorthand for [`HoverEffectConfig::default_for`].
pub fn default_hover_effect(kind: HoverKind) -> HoverEffectConfig {
    HoverEffectConfig::default_for(kind)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEffects {
    pub text: HoverEffectConfig,
    pub image: HoverEffectConfig,
}

impl HoverEffects {
    pub fn get(&self, kind: HoverKind) -> &HoverEffectConfig {
        match kind {
            HoverKind::Text => &self.text,
            HoverKind::Image => &self.image,
        }
    }

    pub fn get_mut(&mut self, kind: HoverKind) -> &mut HoverEffectConfig {
        match kind {
            HoverKind::Text => &mut self.text,
            HoverKind::Image => &mut self.image,
        }
    }
}

impl Default for HoverEffects {
    fn default() -> Self {
        Self {
            text: HoverEffectConfig::default_for(HoverKind::Text),
            image: HoverEffectConfig::default_for(HoverKind::Image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hover_effects_per_kind() {
        let text = default_hover_effect(HoverKind::Text);
        assert!(!text.enabled);
        assert_eq!(text.duration, 250.0);
        assert_eq!(text.shadow.color, "#000000");
        assert_eq!(text.shadow.opacity, 0.15);
        assert_eq!(text.shadow.blur, 25.0);

        let image = default_hover_effect(HoverKind::Image);
        assert!(!image.enabled);
        assert_eq!(image.duration, 350.0);
        assert_eq!(image.shadow.opacity, 0.2);
        assert_eq!(image.shadow.blur, 35.0);
    }

    #[test]
    fn test_hover_effects_lookup() {
        let mut effects = HoverEffects::default();
        effects.get_mut(HoverKind::Image).enabled = true;

        assert!(effects.get(HoverKind::Image).enabled);
        assert!(!effects.get(HoverKind::Text).enabled);
    }

    #[test]
    fn test_default_text_colors() {
        let colors = TextColors::default();
        assert_eq!(colors.title, "#041c3d");
        assert_eq!(colors.body, "#667085");
        assert_eq!(colors.bullets, "#1c2c4d");
    }

    #[test]
    fn test_font_family_keys() {
        assert_eq!(FontFamily::from_key("montserrat"), Some(FontFamily::Montserrat));
        assert_eq!(FontFamily::from_key("comic"), None);
        assert_eq!(FontFamily::Sans.key(), "sans");
    }

    #[test]
    fn test_image_serializes_camel_case() {
        let value = serde_json::to_value(StoryImage::default()).unwrap();
        assert!(value.get("altText").is_some());
        assert!(value.get("cornerReversed").is_some());
        assert!(value.get("alt_text").is_none());
    }
}
