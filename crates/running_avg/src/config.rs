//! Averager configuration

use serde::{Deserialize, Serialize};

/// Running average configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AveragerConfig {
    /// Number of trailing observations to average (default: 3)
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

const fn default_window_size() -> usize {
    3
}

impl Default for AveragerConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AveragerConfig::default();
        assert_eq!(config.window_size, 3);
    }

    #[test]
    fn test_config_missing_field_uses_default() {
        let config: AveragerConfig = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(config.window_size, 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = AveragerConfig { window_size: 12 };

        let json = serde_json::to_string(&config).expect("should serialize");
        let deserialized: AveragerConfig = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized.window_size, 12);
    }
}
