//! Story card definitions.

mod components;
mod story;

pub use components::*;
pub use story::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque story identifier.
///
/// Fresh ids are UUID v4 strings, but persisted ids are kept verbatim
/// whatever their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub String);

impl StoryId {
    /// Create a new random story ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two card regions that carry a hover effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverKind {
    Text,
    Image,
}

impl HoverKind {
    /// Key used for this region in the persisted `hoverEffects` map.
    pub fn key(&self) -> &'static str {
        match self {
            HoverKind::Text => "text",
            HoverKind::Image => "image",
        }
    }
}
