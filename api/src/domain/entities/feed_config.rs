//! Feed configuration domain model
//!
//! The canonical three-category record backing a feed: free-text fields,
//! media-URL fields, and on/off toggles. Slot indices within each category
//! are arbitrary and never read positionally; only the `key` strings carry
//! meaning downstream.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On/off state of a toggle field.
///
/// Only the literal input string `"on"` ever becomes `On`; everything else
/// coerces to `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    On,
    Off,
}

impl ToggleState {
    /// Coerce a raw input literal to a toggle state.
    pub fn from_literal(raw: &str) -> Self {
        if raw == "on" {
            ToggleState::On
        } else {
            ToggleState::Off
        }
    }
}

impl std::fmt::Display for ToggleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleState::On => write!(f, "on"),
            ToggleState::Off => write!(f, "off"),
        }
    }
}

/// A single key/value entry in the text or media category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub key: String,
    pub value: String,
}

/// A single entry in the toggle category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleEntry {
    pub key: String,
    pub value: ToggleState,
}

/// The canonical stored configuration for one feed.
///
/// Always fully shaped: all three maps are present even when empty. A config
/// is created and replaced wholesale on every save; there are no partial
/// merges. The JSON serialization of this struct is exactly the shape the
/// storage layer persists, so existing stored records stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub text_fields: BTreeMap<String, FieldEntry>,
    #[serde(default)]
    pub media_fields: BTreeMap<String, FieldEntry>,
    #[serde(default)]
    pub toggles: BTreeMap<String, ToggleEntry>,
}

impl FeedConfig {
    /// Serialize to the exact JSON shape persisted by the storage layer.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("FeedConfig serializes to plain JSON maps")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn toggle_state_from_literal() {
        assert_eq!(ToggleState::from_literal("on"), ToggleState::On);
        assert_eq!(ToggleState::from_literal("On"), ToggleState::Off);
        assert_eq!(ToggleState::from_literal("true"), ToggleState::Off);
        assert_eq!(ToggleState::from_literal("1"), ToggleState::Off);
        assert_eq!(ToggleState::from_literal(""), ToggleState::Off);
    }

    #[test]
    fn toggle_state_display() {
        assert_eq!(ToggleState::On.to_string(), "on");
        assert_eq!(ToggleState::Off.to_string(), "off");
    }

    #[test]
    fn toggle_state_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ToggleState::On).unwrap(), json!("on"));
        assert_eq!(
            serde_json::to_value(ToggleState::Off).unwrap(),
            json!("off")
        );
    }

    #[test]
    fn default_config_is_fully_shaped() {
        let value = FeedConfig::default().to_value();
        assert_eq!(
            value,
            json!({"text_fields": {}, "media_fields": {}, "toggles": {}})
        );
    }

    #[test]
    fn config_round_trips_through_stored_shape() {
        let mut config = FeedConfig::default();
        config.text_fields.insert(
            "0".to_string(),
            FieldEntry {
                key: "headline".to_string(),
                value: "Hello".to_string(),
            },
        );
        config.toggles.insert(
            "0".to_string(),
            ToggleEntry {
                key: "live".to_string(),
                value: ToggleState::On,
            },
        );

        let value = config.to_value();
        assert_eq!(
            value,
            json!({
                "text_fields": {"0": {"key": "headline", "value": "Hello"}},
                "media_fields": {},
                "toggles": {"0": {"key": "live", "value": "on"}},
            })
        );

        let back: FeedConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
