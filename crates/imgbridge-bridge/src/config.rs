use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Default name of the field the bridge writes every frame.
pub const DEFAULT_OUTBOUND_FIELD: &str = "image_to_send";

/// Default name of the field the bridge reads payloads from.
pub const DEFAULT_INBOUND_FIELD: &str = "image_received";

/// Controls which host fields the bridge talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Field receiving the encoded upstream frame. Default: `image_to_send`.
    pub outbound_field: String,
    /// Field holding a payload to display. Default: `image_received`.
    pub inbound_field: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            outbound_field: DEFAULT_OUTBOUND_FIELD.to_string(),
            inbound_field: DEFAULT_INBOUND_FIELD.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse and validate a config from a JSON string. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Field names must be non-empty and distinct.
    pub fn validate(&self) -> Result<()> {
        if self.outbound_field.trim().is_empty() {
            return Err(BridgeError::Config(
                "outbound_field must not be empty".to_string(),
            ));
        }
        if self.inbound_field.trim().is_empty() {
            return Err(BridgeError::Config(
                "inbound_field must not be empty".to_string(),
            ));
        }
        if self.outbound_field == self.inbound_field {
            return Err(BridgeError::Config(format!(
                "outbound and inbound fields must differ (both {:?})",
                self.inbound_field
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_host_field_names() {
        let config = BridgeConfig::default();
        assert_eq!(config.outbound_field, "image_to_send");
        assert_eq!(config.inbound_field, "image_received");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = BridgeConfig::from_json(r#"{"inbound_field": "reply"}"#).unwrap();
        assert_eq!(config.inbound_field, "reply");
        assert_eq!(config.outbound_field, DEFAULT_OUTBOUND_FIELD);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = BridgeConfig::from_json(r#"{"inbound": "x"}"#).unwrap_err();
        assert!(matches!(err, BridgeError::Json(_)));
    }

    #[test]
    fn identical_fields_are_rejected() {
        let err = BridgeConfig::from_json(r#"{"outbound_field": "a", "inbound_field": "a"}"#)
            .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn blank_field_is_rejected() {
        let config = BridgeConfig {
            inbound_field: "  ".to_string(),
            ..BridgeConfig::default()
        };
        assert!(matches!(config.validate(), Err(BridgeError::Config(_))));
    }

    #[test]
    fn json_roundtrip() {
        let config = BridgeConfig {
            outbound_field: "out".to_string(),
            inbound_field: "in".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BridgeConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = BridgeConfig::from_json_file(Path::new("/nonexistent/imgbridge.json"))
            .unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }
}
