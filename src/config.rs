//! Serializable renderer configuration.
//!
//! A [`RendererConfig`] captures the two process-wide defaults — tint and
//! output form — as an explicit value injected at renderer construction,
//! so they can be loaded from build-tool settings files and threaded
//! through without global state.
//!
//! # Example
//!
//! ```
//! use icontint::{RendererConfig, Tint};
//!
//! let config = RendererConfig::new()
//!     .with_default_tint(Tint::rgb(255, 255, 255))
//!     .with_wrap_url(false);
//!
//! let json = config.to_json().unwrap();
//! let restored = RendererConfig::from_json(&json).unwrap();
//! assert_eq!(restored, config);
//! ```

use serde::{Deserialize, Serialize};

use crate::tint::Tint;

/// Global rendering defaults, injected at renderer construction.
///
/// # JSON Format
///
/// ```json
/// {
///   "defaultTint": { "r": 0.0, "g": 0.0, "b": 0.0, "alpha": 1.0 },
///   "wrapUrl": true
/// }
/// ```
///
/// Both fields carry defaults, so `{}` deserializes to the stock
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct RendererConfig {
    /// Tint applied when a call provides neither a shared tint nor an
    /// explicit fill or stroke.
    #[serde(default)]
    pub default_tint: Tint,

    /// Whether rendered images are wrapped as `url(...)` by default.
    #[serde(default = "default_true")]
    pub wrap_url: bool,
}

/// Opaque black tint, URL-wrapped output.
impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            default_tint: Tint::default(),
            wrap_url: true,
        }
    }
}

impl RendererConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default tint.
    pub fn with_default_tint(mut self, tint: Tint) -> Self {
        self.default_tint = tint;
        self
    }

    /// Sets whether output is wrapped as `url(...)` by default.
    pub fn with_wrap_url(mut self, wrap_url: bool) -> Self {
        self.wrap_url = wrap_url;
        self
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_round_trip() {
        let config = RendererConfig::new()
            .with_default_tint(Tint::rgba(10, 20, 30, 0.5))
            .with_wrap_url(false);

        let json = config.to_json().unwrap();
        let restored = RendererConfig::from_json(&json).unwrap();

        assert_eq!(restored, config);
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = RendererConfig::default().to_json_pretty().unwrap();
        assert!(json.contains("\"defaultTint\""));
        assert!(json.contains("\"wrapUrl\""));
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let config = RendererConfig::from_json("{}").unwrap();
        assert_eq!(config, RendererConfig::default());
        assert!(config.wrap_url);
        assert!(config.default_tint.is_opaque());
    }

    #[test]
    fn missing_alpha_defaults_to_opaque() {
        let config = RendererConfig::from_json(
            r#"{ "defaultTint": { "r": 255.0, "g": 0.0, "b": 0.0 } }"#,
        )
        .unwrap();
        assert!(config.default_tint.is_opaque());
        assert_eq!(config.default_tint.encode(), "rgb%28255%2C0%2C0%29");
    }
}
