//! The story card and its seed templates.

use serde::{Deserialize, Serialize};

use super::{
    HoverEffectConfig, HoverEffects, HoverKind, StoryId, StoryImage, TextColors, TextFrame,
    DEFAULT_ACCENT_COLOR,
};
use crate::rich_text::{self, extract_list_items, list_to_markup, strip_markup, to_paragraph};

/// Canned content for a freshly created story.
#[derive(Debug, Clone, Copy)]
pub struct StorySeed {
    pub title: &'static str,
    pub content: &'static str,
    pub bullets: &'static [&'static str],
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

/// The two example stories a new section starts with.
pub const SEED_STORIES: [StorySeed; 2] = [
    StorySeed {
        title: "Lorem ipsum dolor sit amet",
        content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vestibulum elementum nisl ut viverra fringilla.",
        bullets: &[
            "Curabitur vehicula erat eget urna aliquet",
            "Sed venenatis nibh in elementum laoreet",
            "Morbi vitae orci eget neque lobortis",
            "Duis luctus mi a ultrices faucibus",
        ],
        image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e",
        image_alt: "Technology detail showing lorem ipsum art",
    },
    StorySeed {
        title: "Consectetur adipiscing elit lorem",
        content: "Integer at lacus tempus, ultricies neque id, interdum nibh. Aliquam erat volutpat, vivamus at ligula.",
        bullets: &[
            "Praesent nec risus ac nulla gravida",
            "Suspendisse potenti vivamus porta",
            "Donec id libero sed justo gravida",
            "Cras convallis ex vitae dui porta",
        ],
        image_url: "https://images.unsplash.com/photo-1518770660439-4636190af475",
        image_alt: "Abstract industrial lorem ipsum detail",
    },
];

/// Seed used past the end of [`SEED_STORIES`].
pub const GENERIC_SEED: StorySeed = StorySeed {
    title: "New story title",
    content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Pellentesque a pulvinar sapien, sed blandit nisl.",
    bullets: &["Lorem ipsum dolor sit amet", "Consectetur adipiscing elit"],
    image_url: "",
    image_alt: "Story image",
};

impl StorySeed {
    /// Seed for a position, falling back to [`GENERIC_SEED`].
    pub fn for_index(index: usize) -> StorySeed {
        SEED_STORIES.get(index).copied().unwrap_or(GENERIC_SEED)
    }
}

/// One unit of dual-column content.
///
/// Every editor below consumes the card and returns an updated copy; cards
/// are never changed in place once they sit in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryCard {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub bullets: Vec<String>,
    pub accent_color: String,
    pub show_bullets: bool,
    pub text_colors: TextColors,

    // Authoritative for rendering when present; plain fields are the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_rich_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_rich_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets_rich_text: Option<String>,

    pub image: StoryImage,
    pub text_frame: TextFrame,
    pub hover_effects: HoverEffects,
}

impl Default for StoryCard {
    /// A blank card with template layout and no content.
    fn default() -> Self {
        Self {
            id: StoryId::new(),
            title: String::new(),
            content: String::new(),
            bullets: Vec::new(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            show_bullets: true,
            text_colors: TextColors::default(),
            title_rich_text: None,
            body_rich_text: None,
            bullets_rich_text: None,
            image: StoryImage::default(),
            text_frame: TextFrame::default(),
            hover_effects: HoverEffects::default(),
        }
    }
}

impl StoryCard {
    /// Build a fully populated card from the seed at `seed_index`.
    ///
    /// Odd seeds get the single-corner image treatment so consecutive
    /// defaults alternate.
    pub fn create_default(seed_index: usize) -> Self {
        let seed = StorySeed::for_index(seed_index);
        let bullets: Vec<String> = seed.bullets.iter().map(|b| b.to_string()).collect();

        Self {
            id: StoryId::new(),
            title: seed.title.to_string(),
            content: seed.content.to_string(),
            title_rich_text: Some(to_paragraph(seed.title)),
            body_rich_text: Some(to_paragraph(seed.content)),
            bullets_rich_text: Some(list_to_markup(&bullets)),
            bullets,
            image: StoryImage {
                url: seed.image_url.to_string(),
                alt_text: seed.image_alt.to_string(),
                single_corner: seed_index % 2 == 1,
                ..StoryImage::default()
            },
            ..Self::default()
        }
    }

    /// Set the plain title. Stored title markup is left alone.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the plain body. Stored body markup is left alone.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the plain bullets. Stored bullet markup is not regenerated.
    pub fn with_bullets(mut self, bullets: Vec<String>) -> Self {
        self.bullets = bullets;
        self
    }

    /// Set the title markup and refresh the plain title from it.
    pub fn with_title_rich_text(mut self, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        self.title = strip_markup(&markup);
        self.title_rich_text = Some(markup);
        self
    }

    /// Set the body markup and refresh the plain body from it.
    pub fn with_body_rich_text(mut self, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        self.content = strip_markup(&markup);
        self.body_rich_text = Some(markup);
        self
    }

    /// Set the bullet markup and re-derive the plain bullets from it.
    pub fn with_bullets_rich_text(mut self, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        self.bullets = extract_list_items(&markup);
        self.bullets_rich_text = Some(markup);
        self
    }

    pub fn with_show_bullets(mut self, show: bool) -> Self {
        self.show_bullets = show;
        self
    }

    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = color.into();
        self
    }

    /// Apply an edit to the text colors.
    pub fn update_text_colors(mut self, edit: impl FnOnce(&mut TextColors)) -> Self {
        edit(&mut self.text_colors);
        self
    }

    /// Apply an edit to the image region.
    pub fn update_image(mut self, edit: impl FnOnce(&mut StoryImage)) -> Self {
        edit(&mut self.image);
        self
    }

    /// Apply an edit to the text frame.
    pub fn update_text_frame(mut self, edit: impl FnOnce(&mut TextFrame)) -> Self {
        edit(&mut self.text_frame);
        self
    }

    /// Apply an edit to one region's hover effect.
    pub fn update_hover(
        mut self,
        kind: HoverKind,
        edit: impl FnOnce(&mut HoverEffectConfig),
    ) -> Self {
        edit(self.hover_effects.get_mut(kind));
        self
    }

    /// Markup for the title region.
    pub fn title_markup(&self) -> String {
        rich_text::ensure_rich_text(self.title_rich_text.as_deref(), Some(&self.title))
    }

    /// Markup for the body region.
    pub fn body_markup(&self) -> String {
        rich_text::ensure_rich_text(self.body_rich_text.as_deref(), Some(&self.content))
    }

    /// Markup for the bullet region, honouring `show_bullets`.
    pub fn bullet_markup(&self) -> String {
        rich_text::bullet_markup(
            self.show_bullets,
            self.bullets_rich_text.as_deref(),
            &self.bullets,
        )
    }
}
