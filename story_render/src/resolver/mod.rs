//! Render resolver - turns normalized cards into render-ready values.
//!
//! Resolution for one card runs in a fixed order:
//! 1. **Row side**: the card's index picks which column holds the image
//! 2. **Geometry**: text and image frames become sizes plus translations
//! 3. **Typography**: each font role maps to a CSS stack and pixel size
//! 4. **Markup**: title, body and bullet regions get their final markup
//! 5. **Hover**: enabled effects become a duration and a shadow string

mod hover;
mod layout;
mod typography;

pub use hover::*;
pub use layout::*;
pub use typography::*;

use serde::{Deserialize, Serialize};
use story_model::{ModelResult, StoryCard, StoryCollection, StoryId, TextColors};
use tracing::trace;

/// Markup for the bullet region, honouring `show_bullets`.
pub fn resolve_bullet_markup(card: &StoryCard) -> String {
    card.bullet_markup()
}

/// Title markup, falling back to the plain title as a paragraph.
pub fn resolve_title_markup(card: &StoryCard) -> String {
    card.title_markup()
}

/// Body markup, falling back to the plain content as a paragraph.
pub fn resolve_body_markup(card: &StoryCard) -> String {
    card.body_markup()
}

/// Presentation settings that are not stored per card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub fonts: FontStacks,

    /// Shown in the image frame when a card has no image URL.
    pub image_placeholder: String,

    /// Shown instead of rows when the collection is empty.
    pub empty_state: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fonts: FontStacks::default(),
            image_placeholder: "Upload an image for this story".to_string(),
            empty_state: "Add a story to start designing the dual feature section.".to_string(),
        }
    }
}

impl RenderConfig {
    /// Parse from TOML. Omitted keys keep their defaults.
    pub fn from_toml_str(source: &str) -> ModelResult<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Content of the image frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ImageContent {
    #[serde(rename_all = "camelCase")]
    Image { url: String, alt_text: String },
    Placeholder { message: String },
}

/// Everything the view needs to paint one story row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStory {
    pub id: StoryId,
    pub image_left: bool,

    pub text_frame: TextFrameStyle,
    pub image_frame: ImageFrameStyle,
    pub corner: ImageCornerClass,
    pub image: ImageContent,

    pub typography: ResolvedTypography,
    pub text_colors: TextColors,
    pub accent_color: String,

    pub title_markup: String,
    pub body_markup: String,
    pub bullet_markup: String,
    /// Bullets render as paragraphs without glyphs.
    pub bullets_as_text: bool,

    pub text_hover: Option<HoverVisual>,
    pub image_hover: Option<HoverVisual>,
}

/// A resolved section: its rows in order, or an empty-state message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSection {
    pub stories: Vec<ResolvedStory>,
    pub empty_state: Option<String>,
}

/// Resolves cards against a [`RenderConfig`].
pub struct RenderResolver {
    config: RenderConfig,
}

impl RenderResolver {
    /// Create a new resolver with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Create a resolver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RenderConfig::default())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resolve the card rendered at row `index`.
    pub fn resolve_story(&self, card: &StoryCard, index: usize) -> ResolvedStory {
        let image = if card.image.url.is_empty() {
            ImageContent::Placeholder {
                message: self.config.image_placeholder.clone(),
            }
        } else {
            ImageContent::Image {
                url: card.image.url.clone(),
                alt_text: card.image.alt_text.clone(),
            }
        };

        ResolvedStory {
            id: card.id.clone(),
            image_left: resolve_row_side_is_image_left(index),
            text_frame: resolve_text_frame_style(card),
            image_frame: resolve_image_frame_style(card),
            corner: resolve_image_corner_class(card),
            image,
            typography: resolve_typography(card, &self.config.fonts),
            text_colors: card.text_colors.clone(),
            accent_color: card.accent_color.clone(),
            title_markup: resolve_title_markup(card),
            body_markup: resolve_body_markup(card),
            bullet_markup: resolve_bullet_markup(card),
            bullets_as_text: !card.show_bullets,
            text_hover: resolve_hover_visual(&card.hover_effects.text),
            image_hover: resolve_hover_visual(&card.hover_effects.image),
        }
    }

    /// Resolve every card in render order.
    pub fn resolve_section(&self, collection: &StoryCollection) -> ResolvedSection {
        trace!(cards = collection.len(), "resolving story section");

        if collection.is_empty() {
            return ResolvedSection {
                stories: Vec::new(),
                empty_state: Some(self.config.empty_state.clone()),
            };
        }

        ResolvedSection {
            stories: collection
                .iter()
                .enumerate()
                .map(|(index, card)| self.resolve_story(card, index))
                .collect(),
            empty_state: None,
        }
    }
}
