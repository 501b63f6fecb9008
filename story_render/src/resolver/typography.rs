//! Font roles resolved to concrete CSS values.

use serde::{Deserialize, Serialize};
use story_model::{FontFamily, FontSettings, StoryCard};

/// CSS font stacks for each selectable family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStacks {
    pub sans: String,
    pub montserrat: String,
}

impl Default for FontStacks {
    fn default() -> Self {
        Self {
            sans: r#""Segoe UI", "Helvetica Neue", Arial, sans-serif"#.to_string(),
            montserrat: r#""Montserrat", "Segoe UI", sans-serif"#.to_string(),
        }
    }
}

impl FontStacks {
    pub fn stack_for(&self, family: FontFamily) -> &str {
        match family {
            FontFamily::Sans => &self.sans,
            FontFamily::Montserrat => &self.montserrat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFont {
    pub family_css: String,
    pub size_px: f64,
}

/// Fonts for the three text roles of a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTypography {
    pub title: ResolvedFont,
    pub body: ResolvedFont,
    pub bullets: ResolvedFont,
}

pub fn resolve_font(settings: &FontSettings, stacks: &FontStacks) -> ResolvedFont {
    ResolvedFont {
        family_css: stacks.stack_for(settings.family).to_string(),
        size_px: settings.size,
    }
}

pub fn resolve_typography(card: &StoryCard, stacks: &FontStacks) -> ResolvedTypography {
    let frame = &card.text_frame;
    ResolvedTypography {
        title: resolve_font(&frame.title_font, stacks),
        body: resolve_font(&frame.body_font, stacks),
        bullets: resolve_font(&frame.bullet_font, stacks),
    }
}
