//! Errors for the few fallible edges of the model: text parsing.

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// Failures while turning external text into model values.
///
/// Normalization itself never fails; only malformed JSON or TOML text does.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid story JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_display() {
        let err: ModelError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid story JSON:"));
    }

    #[test]
    fn test_config_error_display() {
        let err: ModelError = toml::from_str::<toml::Value>("a = ")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}
