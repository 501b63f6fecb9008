//! Value ranges offered by the editing surface's sliders.
//!
//! These are editing policy, not schema rules: [`crate::normalize`] never
//! clamps, so stored values outside a range survive untouched until an
//! author edits them.

use serde::{Deserialize, Serialize};

use crate::card::{Coordinates, FontSettings, FrameSize, StoryCard};
use crate::error::ModelResult;

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range. An inverted range pins to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }
}

/// Slider ranges for every numeric card field an author can edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLimits {
    /// Pixel offset range for both frames, on both axes.
    pub offset: ValueRange,
    /// Image width in percent.
    pub image_width: ValueRange,
    /// Image height in pixels.
    pub image_height: ValueRange,
    /// Text frame width in percent.
    pub text_width: ValueRange,
    /// Text frame minimum height in pixels.
    pub text_height: ValueRange,
    /// Font size in pixels.
    pub font_size: ValueRange,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            offset: ValueRange::new(-120.0, 120.0),
            image_width: ValueRange::new(40.0, 120.0),
            image_height: ValueRange::new(200.0, 640.0),
            text_width: ValueRange::new(50.0, 120.0),
            text_height: ValueRange::new(160.0, 600.0),
            font_size: ValueRange::new(12.0, 48.0),
        }
    }
}

impl EditLimits {
    /// Parse limits from TOML. Omitted tables keep their default range.
    pub fn from_toml_str(source: &str) -> ModelResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Copy of `card` with geometry and font sizes pulled into range.
    pub fn clamp_card(&self, card: StoryCard) -> StoryCard {
        card.update_image(|image| {
            image.position = self.clamp_offset(image.position);
            image.size = FrameSize::new(
                self.image_width.clamp(image.size.width),
                self.image_height.clamp(image.size.height),
            );
        })
        .update_text_frame(|frame| {
            frame.position = self.clamp_offset(frame.position);
            frame.size = FrameSize::new(
                self.text_width.clamp(frame.size.width),
                self.text_height.clamp(frame.size.height),
            );
            for font in [
                &mut frame.title_font,
                &mut frame.body_font,
                &mut frame.bullet_font,
            ] {
                *font = self.clamp_font(*font);
            }
        })
    }

    fn clamp_offset(&self, position: Coordinates) -> Coordinates {
        Coordinates::new(self.offset.clamp(position.x), self.offset.clamp(position.y))
    }

    fn clamp_font(&self, font: FontSettings) -> FontSettings {
        FontSettings::new(font.family, self.font_size.clamp(font.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_clamp() {
        let range = ValueRange::new(-120.0, 120.0);
        assert_eq!(range.clamp(-500.0), -120.0);
        assert_eq!(range.clamp(12.5), 12.5);
        assert_eq!(range.clamp(121.0), 120.0);
        assert!(range.contains(0.0));
        assert!(!range.contains(120.5));
    }

    #[test]
    fn test_from_toml_overrides_and_defaults() {
        let limits = EditLimits::from_toml_str(
            r#"
            [font_size]
            min = 10.0
            max = 72.0
            "#,
        )
        .unwrap();

        assert_eq!(limits.font_size, ValueRange::new(10.0, 72.0));
        assert_eq!(limits.offset, ValueRange::new(-120.0, 120.0));
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(EditLimits::from_toml_str("offset = 3").is_err());
    }

    #[test]
    fn test_clamp_card() {
        let card = StoryCard::create_default(0)
            .update_image(|image| {
                image.position = Coordinates::new(-300.0, 10.0);
                image.size = FrameSize::new(10.0, 900.0);
            })
            .update_text_frame(|frame| frame.title_font.size = 96.0);

        let clamped = EditLimits::default().clamp_card(card.clone());

        assert_eq!(clamped.image.position, Coordinates::new(-120.0, 10.0));
        assert_eq!(clamped.image.size, FrameSize::new(40.0, 640.0));
        assert_eq!(clamped.text_frame.title_font.size, 48.0);
        assert_eq!(clamped.text_frame.body_font, card.text_frame.body_font);
        assert_eq!(clamped.id, card.id);
    }
}
