//! Runtime configuration loaded from TOML

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use cadence_core::Result;
use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::mouse::MouseButton;

/// Clock configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSettings {
    /// Fixed steps per second
    #[serde(default = "default_fixed_rate")]
    pub fixed_rate: f64,

    /// Upper clamp on a raw frame delta, in seconds
    #[serde(default = "default_max_delta_time")]
    pub max_delta_time: f64,

    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
}

fn default_fixed_rate() -> f64 {
    50.0
}
fn default_max_delta_time() -> f64 {
    1.0 / 3.0
}
fn default_time_scale() -> f64 {
    1.0
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            fixed_rate: default_fixed_rate(),
            max_delta_time: default_max_delta_time(),
            time_scale: default_time_scale(),
        }
    }
}

/// Bindings for one named action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    #[serde(default)]
    pub keys: Vec<Key>,
    #[serde(default)]
    pub mouse_buttons: Vec<MouseButton>,
}

/// Action bindings keyed by action name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub actions: BTreeMap<String, ActionConfig>,
}

/// Top-level runtime configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub clock: ClockSettings,

    /// When absent the default action map is used
    #[serde(default)]
    pub input: Option<InputConfig>,
}

impl RuntimeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file; a missing or malformed file is an error
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded runtime config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no runtime config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::CadenceError;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.clock.fixed_rate, 50.0);
        assert!((config.clock.max_delta_time - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(config.clock.time_scale, 1.0);
        assert!(config.input.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [clock]
            fixed_rate = 120.0

            [input.actions.jump]
            keys = ["Space"]

            [input.actions.fire]
            keys = ["LeftControl"]
            mouse_buttons = ["Left"]
            "#,
        )
        .unwrap();

        assert_eq!(config.clock.fixed_rate, 120.0);
        assert_eq!(config.clock.time_scale, 1.0);

        let input = config.input.unwrap();
        assert_eq!(input.actions["jump"].keys, vec![Key::Space]);
        assert!(input.actions["jump"].mouse_buttons.is_empty());
        assert_eq!(input.actions["fire"].mouse_buttons, vec![MouseButton::Left]);
    }

    #[test]
    fn test_unknown_key_name_is_error() {
        let result = RuntimeConfig::from_toml_str(
            r#"
            [input.actions.jump]
            keys = ["Spacebar"]
            "#,
        );
        assert!(matches!(result, Err(CadenceError::TomlParseError(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut input = InputConfig::default();
        input.actions.insert(
            "jump".into(),
            ActionConfig {
                keys: vec![Key::Space],
                mouse_buttons: vec![],
            },
        );
        let config = RuntimeConfig {
            clock: ClockSettings::default(),
            input: Some(input),
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(RuntimeConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("cadence-missing-config-7f3a.toml");
        let config = RuntimeConfig::load_or_default(&path).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert!(matches!(
            RuntimeConfig::load(&path),
            Err(CadenceError::IoError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("cadence-config-{}.toml", std::process::id()));
        fs::write(&path, "[clock]\ntime_scale = 0.5\n").unwrap();
        let config = RuntimeConfig::load(&path).unwrap();
        assert_eq!(config.clock.time_scale, 0.5);
        let _ = fs::remove_file(&path);
    }
}
