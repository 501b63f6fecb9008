//! Upgrading persisted story cards of any schema vintage.
//!
//! Cards have picked up fields over several revisions: per-field text
//! colors, a mirrored image corner, and hover effects that started life as a
//! bare boolean per region before becoming structured records. [`normalize`]
//! turns whatever was stored into a current [`StoryCard`].
//!
//! Normalization is total and idempotent:
//! `normalize(&to_value(&normalize(x))) == normalize(x)`.
//!
//! Fields the schema always required (content, layout, fonts) are carried
//! over as stored. Only when they are missing or hold the wrong JSON type do
//! they fall back to the blank template of [`StoryCard::default`].

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::card::{
    Coordinates, FontFamily, FontSettings, FrameSize, HoverEffectConfig, HoverEffects, HoverKind,
    HoverShadow, StoryCard, StoryId, StoryImage, TextColors, TextFrame,
};

/// A stored hover effect, in either of the shapes it has been persisted as.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredHoverEffect {
    /// Early revisions: just an on/off flag.
    Toggle(bool),
    /// Current revision, possibly with sub-fields missing.
    Structured(StoredHoverConfig),
}

/// Structured hover record as found in storage; every field optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StoredHoverConfig {
    pub enabled: Option<Value>,
    pub duration: Option<Value>,
    pub shadow: Option<Value>,
}

impl StoredHoverEffect {
    /// Decode a stored value. Anything that is neither a boolean nor an
    /// object decodes to `None` and is treated as absent.
    ///
    /// Derived struct impls also accept sequences, so arrays are rejected
    /// before serde sees them.
    pub fn decode(value: Option<&Value>) -> Option<Self> {
        value
            .filter(|v| v.is_boolean() || v.is_object())
            .and_then(|v| Self::deserialize(v).ok())
    }

    /// Upgrade to the current shape, filling gaps from the `kind` defaults.
    pub fn into_config(self, kind: HoverKind) -> HoverEffectConfig {
        let defaults = HoverEffectConfig::default_for(kind);
        match self {
            StoredHoverEffect::Toggle(enabled) => {
                debug!(region = kind.key(), enabled, "upgrading legacy boolean hover effect");
                defaults.with_enabled(enabled)
            }
            StoredHoverEffect::Structured(stored) => {
                let shadow = RawObject::new(stored.shadow.as_ref());
                HoverEffectConfig {
                    enabled: stored.enabled.as_ref().is_some_and(is_truthy),
                    duration: stored
                        .duration
                        .as_ref()
                        .and_then(Value::as_f64)
                        .unwrap_or(defaults.duration),
                    shadow: HoverShadow {
                        color: shadow.string("color").unwrap_or(defaults.shadow.color),
                        opacity: shadow.number("opacity").unwrap_or(defaults.shadow.opacity),
                        blur: shadow.number("blur").unwrap_or(defaults.shadow.blur),
                    },
                }
            }
        }
    }
}

/// Normalize one hover region: decode, then upgrade or default.
pub fn normalize_hover_effect(value: Option<&Value>, kind: HoverKind) -> HoverEffectConfig {
    match StoredHoverEffect::decode(value) {
        Some(stored) => stored.into_config(kind),
        None => HoverEffectConfig::default_for(kind),
    }
}

/// Upgrade a persisted card object of unknown vintage to the current shape.
///
/// Never fails. Non-object input yields a blank card with a fresh id.
pub fn normalize(raw: &Value) -> StoryCard {
    let card = RawObject::new(Some(raw));
    let base = StoryCard::default();

    let id = match card.field("id") {
        Some(Value::String(id)) => StoryId::from_string(id.clone()),
        Some(Value::Number(id)) => StoryId::from_string(id.to_string()),
        _ => {
            debug!(fresh_id = %base.id, "stored story has no usable id");
            base.id.clone()
        }
    };

    let bullets = match card.field("bullets") {
        Some(Value::Array(items)) => items.iter().filter_map(bullet_text).collect(),
        _ => base.bullets,
    };

    let hover = card.object("hoverEffects");

    StoryCard {
        id,
        title: card.string("title").unwrap_or(base.title),
        content: card.string("content").unwrap_or(base.content),
        bullets,
        accent_color: card.string("accentColor").unwrap_or(base.accent_color),
        show_bullets: card.boolean("showBullets").unwrap_or(base.show_bullets),
        text_colors: normalize_text_colors(card.object("textColors")),
        title_rich_text: card.string("titleRichText"),
        body_rich_text: card.string("bodyRichText"),
        bullets_rich_text: card.string("bulletsRichText"),
        image: normalize_image(card.object("image"), base.image),
        text_frame: normalize_text_frame(card.object("textFrame"), base.text_frame),
        hover_effects: HoverEffects {
            text: normalize_hover_effect(hover.field("text"), HoverKind::Text),
            image: normalize_hover_effect(hover.field("image"), HoverKind::Image),
        },
    }
}

impl StoryCard {
    /// See [`normalize`].
    pub fn from_raw(raw: &Value) -> Self {
        normalize(raw)
    }
}

fn normalize_text_colors(stored: RawObject<'_>) -> TextColors {
    let defaults = TextColors::default();
    TextColors {
        title: stored.string("title").unwrap_or(defaults.title),
        body: stored.string("body").unwrap_or(defaults.body),
        bullets: stored.string("bullets").unwrap_or(defaults.bullets),
    }
}

fn normalize_image(stored: RawObject<'_>, base: StoryImage) -> StoryImage {
    StoryImage {
        url: stored.string("url").unwrap_or(base.url),
        alt_text: stored.string("altText").unwrap_or(base.alt_text),
        single_corner: stored.boolean("singleCorner").unwrap_or(base.single_corner),
        corner_reversed: stored.boolean("cornerReversed").unwrap_or(false),
        position: normalize_coordinates(stored.object("position"), base.position),
        size: normalize_size(stored.object("size"), base.size),
    }
}

fn normalize_text_frame(stored: RawObject<'_>, base: TextFrame) -> TextFrame {
    TextFrame {
        position: normalize_coordinates(stored.object("position"), base.position),
        size: normalize_size(stored.object("size"), base.size),
        title_font: normalize_font(stored.object("titleFont"), base.title_font),
        body_font: normalize_font(stored.object("bodyFont"), base.body_font),
        bullet_font: normalize_font(stored.object("bulletFont"), base.bullet_font),
    }
}

fn normalize_coordinates(stored: RawObject<'_>, base: Coordinates) -> Coordinates {
    Coordinates {
        x: stored.number("x").unwrap_or(base.x),
        y: stored.number("y").unwrap_or(base.y),
    }
}

fn normalize_size(stored: RawObject<'_>, base: FrameSize) -> FrameSize {
    FrameSize {
        width: stored.number("width").unwrap_or(base.width),
        height: stored.number("height").unwrap_or(base.height),
    }
}

fn normalize_font(stored: RawObject<'_>, base: FontSettings) -> FontSettings {
    FontSettings {
        family: stored
            .field("family")
            .and_then(Value::as_str)
            .and_then(FontFamily::from_key)
            .unwrap_or(base.family),
        size: stored.number("size").unwrap_or(base.size),
    }
}

/// Text of a stored bullet entry. Scalars are kept as their display form;
/// nulls and nested structures carry no text.
fn bullet_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            debug!(entry = %value, "dropping non-scalar bullet entry");
            None
        }
    }
}

/// JavaScript-style truthiness, used for loosely typed legacy flags.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read-only view over an optional JSON object. Missing objects and
/// mistyped fields both read as absent.
#[derive(Clone, Copy)]
struct RawObject<'a>(Option<&'a Map<String, Value>>);

impl<'a> RawObject<'a> {
    fn new(value: Option<&'a Value>) -> Self {
        Self(value.and_then(Value::as_object))
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    fn object(&self, key: &str) -> RawObject<'a> {
        RawObject::new(self.field(key))
    }

    fn string(&self, key: &str) -> Option<String> {
        self.field(key).and_then(Value::as_str).map(str::to_string)
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(Value::as_f64)
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.field(key).and_then(Value::as_bool)
    }
}
