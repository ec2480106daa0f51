//! Configuration for configuration generation

use configgen_llm::protocol::{DEFAULT_TEMPERATURE, DEFAULT_TOP_P};
use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature (0.0-2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling cutoff (0.0-1.0, exclusive of 0)
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

impl GenerationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature {} out of range [0.0, 2.0]", self.temperature));
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(format!("top_p {} out of range (0.0, 1.0]", self.top_p));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_top_p() -> f32 {
    DEFAULT_TOP_P
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.95);
    }

    #[test]
    fn test_invalid_temperature() {
        let config = GenerationConfig {
            temperature: 3.0,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_top_p() {
        let mut config = GenerationConfig::default();
        config.top_p = 0.0;
        assert!(config.validate().is_err());
        config.top_p = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GenerationConfig::from_toml("temperature = 0.2").unwrap();
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.top_p, 0.95);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GenerationConfig {
            temperature: 0.3,
            top_p: 0.8,
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = GenerationConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
