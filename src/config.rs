//! Defines the platform configuration block and its declarative validation.
//!
//! The schema IS the types: required fields, optional fields, the non-negative pin and the
//! positive frequency are all carried by the struct shape, so a successfully deserialized
//! configuration needs no further checking downstream.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Configuration of one switch entity.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchConfig {
    /// The display name of the entity.
    pub name: String,
    /// The pin (id) driving the LED.
    pub pin: u8,
    /// The PWM frequency (in Hz) to use on the pin. Defaults to
    /// [`DEFAULT_FREQUENCY`](crate::hardware::DEFAULT_FREQUENCY) when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<NonZeroU32>,
    /// Optional stable identifier. When absent, the host identifies the entity by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
}

/// Configuration block of the whole platform: the list of switch entities to expose.
///
/// The list key is `switchs`, as the platform this plugin targets spells it. Unknown keys at
/// this level are tolerated (the host adds its own), unknown keys inside an entry are rejected.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlatformConfig {
    pub switchs: Vec<SwitchConfig>,
}

impl PlatformConfig {
    /// Validates a platform configuration out of a structured value.
    ///
    /// # Example
    /// ```
    /// use gpio_pwm_switch::config::PlatformConfig;
    ///
    /// let config = PlatformConfig::from_value(serde_json::json!({
    ///     "switchs": [{ "name": "Porch", "pin": 17, "frequency": 1000 }]
    /// })).unwrap();
    /// assert_eq!(config.switchs.len(), 1);
    /// assert_eq!(config.switchs[0].pin, 17);
    /// ```
    ///
    /// # Errors
    /// * `ConfigError`: the value does not match the schema (missing required field, wrong type,
    ///   out-of-range pin or frequency, unknown key inside an entry).
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// Validates a platform configuration out of its JSON text form.
    ///
    /// # Errors
    /// * `ConfigError`: the text is not valid JSON or does not match the schema.
    pub fn from_str(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_entry() {
        let config = PlatformConfig::from_value(serde_json::json!({
            "switchs": [{
                "name": "Porch",
                "pin": 17,
                "frequency": 1000,
                "unique_id": "porch_light"
            }]
        }))
        .unwrap();

        assert_eq!(
            config.switchs,
            vec![SwitchConfig {
                name: String::from("Porch"),
                pin: 17,
                frequency: NonZeroU32::new(1000),
                unique_id: Some(String::from("porch_light")),
            }]
        );
    }

    #[test]
    fn test_minimal_entry() {
        let config = PlatformConfig::from_str(r#"{ "switchs": [{ "name": "Shed", "pin": 4 }] }"#)
            .unwrap();
        assert_eq!(config.switchs[0].frequency, None);
        assert_eq!(config.switchs[0].unique_id, None);
    }

    #[test]
    fn test_host_level_keys_are_tolerated() {
        let config = PlatformConfig::from_value(serde_json::json!({
            "platform": "gpio_pwm_switch",
            "switchs": [{ "name": "Shed", "pin": 4 }]
        }))
        .unwrap();
        assert_eq!(config.switchs.len(), 1);
    }

    #[test]
    fn test_missing_required_fields() {
        assert!(PlatformConfig::from_value(serde_json::json!({})).is_err());
        assert!(
            PlatformConfig::from_value(serde_json::json!({ "switchs": [{ "pin": 4 }] })).is_err()
        );
        assert!(
            PlatformConfig::from_value(serde_json::json!({ "switchs": [{ "name": "Shed" }] }))
                .is_err()
        );
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        // Negative or overlarge pins do not fit the pin type.
        assert!(PlatformConfig::from_value(
            serde_json::json!({ "switchs": [{ "name": "Shed", "pin": -1 }] })
        )
        .is_err());
        assert!(PlatformConfig::from_value(
            serde_json::json!({ "switchs": [{ "name": "Shed", "pin": 500 }] })
        )
        .is_err());
        // Frequency must be strictly positive.
        assert!(PlatformConfig::from_value(
            serde_json::json!({ "switchs": [{ "name": "Shed", "pin": 4, "frequency": 0 }] })
        )
        .is_err());
    }

    #[test]
    fn test_rejects_malformed_lists() {
        assert!(
            PlatformConfig::from_value(serde_json::json!({ "switchs": "not a list" })).is_err()
        );
        assert!(PlatformConfig::from_value(serde_json::json!({ "switchs": [42] })).is_err());
    }

    #[test]
    fn test_rejects_unknown_entry_keys() {
        let error = PlatformConfig::from_value(serde_json::json!({
            "switchs": [{ "name": "Shed", "pin": 4, "brightness": 50 }]
        }))
        .unwrap_err();
        assert!(format!("{}", error).starts_with("Configuration error: "));
    }

    #[test]
    fn test_roundtrip() {
        let config = PlatformConfig {
            switchs: vec![SwitchConfig {
                name: String::from("Porch"),
                pin: 17,
                frequency: None,
                unique_id: None,
            }],
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"switchs":[{"name":"Porch","pin":17}]}"#);
        assert_eq!(PlatformConfig::from_str(&json).unwrap(), config);
    }
}
