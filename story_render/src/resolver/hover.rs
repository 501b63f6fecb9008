//! Hover effect visuals.

use serde::Serialize;
use story_model::{build_shadow_string, HoverEffectConfig};

/// What the view applies on pointer hover.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverVisual {
    pub duration_ms: f64,
    /// `"<offset>px <blur>px rgba(...)"`.
    pub shadow: String,
}

/// `None` when the effect is disabled.
pub fn resolve_hover_visual(config: &HoverEffectConfig) -> Option<HoverVisual> {
    if !config.enabled {
        return None;
    }
    Some(HoverVisual {
        duration_ms: config.duration,
        shadow: build_shadow_string(
            config.shadow.blur,
            &config.shadow.color,
            config.shadow.opacity,
        ),
    })
}
