use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query key used by the core when none is configured
pub const DEFAULT_LAYERS_PARAM: &str = "__layers__";
/// Layer id used by the core when none is configured
pub const DEFAULT_LAYER_ID: &str = "layerId";
/// Query key used by the router adapters when none is configured
pub const ADAPTER_LAYERS_PARAM: &str = "layersName";
/// Layer id used by the router adapters when none is configured
pub const ADAPTER_LAYER_ID: &str = "myLayerId";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// When a host re-derives visibility after the URL changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTiming {
    /// Synchronously during render, so the first painted frame is correct
    BeforePaint,
    /// After the render commits (no display surface to paint to)
    AfterCommit,
}

impl EffectTiming {
    pub fn from_paint_surface(has_paint_surface: bool) -> Self {
        if has_paint_surface {
            EffectTiming::BeforePaint
        } else {
            EffectTiming::AfterCommit
        }
    }
}

fn default_layers_param() -> String {
    DEFAULT_LAYERS_PARAM.to_string()
}

fn default_layer_id() -> String {
    DEFAULT_LAYER_ID.to_string()
}

fn default_true() -> bool {
    true
}

/// Names a layer instance watches in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Query key holding the active layer ids
    #[serde(default = "default_layers_param")]
    pub layers_param: String,
    /// Id this instance shows for
    #[serde(default = "default_layer_id")]
    pub layer_id: String,
    /// Whether the host renders to a display surface. Picks the
    /// [`EffectTiming`]; decided once by the host, never probed.
    #[serde(default = "default_true")]
    pub has_paint_surface: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            layers_param: default_layers_param(),
            layer_id: default_layer_id(),
            has_paint_surface: true,
        }
    }
}

impl LayerConfig {
    /// Defaults used by the router adapters.
    pub fn adapter_default() -> Self {
        Self {
            layers_param: ADAPTER_LAYERS_PARAM.to_string(),
            layer_id: ADAPTER_LAYER_ID.to_string(),
            has_paint_surface: true,
        }
    }

    /// Load from a YAML document. Missing fields take the core defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers_param.is_empty() {
            return Err(ConfigError::Config(
                "layers_param must not be empty".to_string(),
            ));
        }
        if self.layer_id.is_empty() {
            return Err(ConfigError::Config("layer_id must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn with_layers_param(mut self, layers_param: impl Into<String>) -> Self {
        self.layers_param = layers_param.into();
        self
    }

    pub fn with_layer_id(mut self, layer_id: impl Into<String>) -> Self {
        self.layer_id = layer_id.into();
        self
    }

    pub fn with_paint_surface(mut self, has_paint_surface: bool) -> Self {
        self.has_paint_surface = has_paint_surface;
        self
    }

    pub fn timing(&self) -> EffectTiming {
        EffectTiming::from_paint_surface(self.has_paint_surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_defaults() {
        let config = LayerConfig::default();
        assert_eq!(config.layers_param, "__layers__");
        assert_eq!(config.layer_id, "layerId");
        assert_eq!(config.timing(), EffectTiming::BeforePaint);
    }

    #[test]
    fn test_adapter_defaults() {
        let config = LayerConfig::adapter_default();
        assert_eq!(config.layers_param, "layersName");
        assert_eq!(config.layer_id, "myLayerId");
    }

    #[test]
    fn test_timing_from_paint_surface() {
        assert_eq!(
            EffectTiming::from_paint_surface(true),
            EffectTiming::BeforePaint
        );
        assert_eq!(
            EffectTiming::from_paint_surface(false),
            EffectTiming::AfterCommit
        );
        let config = LayerConfig::default().with_paint_surface(false);
        assert_eq!(config.timing(), EffectTiming::AfterCommit);
    }

    #[test]
    fn test_from_yaml() {
        let config = LayerConfig::from_yaml(
            "layers_param: dialogs\nlayer_id: settings\nhas_paint_surface: false\n",
        )
        .unwrap();
        assert_eq!(config.layers_param, "dialogs");
        assert_eq!(config.layer_id, "settings");
        assert!(!config.has_paint_surface);
    }

    #[test]
    fn test_from_yaml_missing_fields_use_defaults() {
        let config = LayerConfig::from_yaml("layer_id: drawer\n").unwrap();
        assert_eq!(config.layers_param, "__layers__");
        assert_eq!(config.layer_id, "drawer");
        assert!(config.has_paint_surface);
    }

    #[test]
    fn test_from_yaml_rejects_empty_id() {
        match LayerConfig::from_yaml("layer_id: \"\"\n") {
            Err(ConfigError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_rejects_malformed() {
        match LayerConfig::from_yaml("layer_id: [unclosed\n") {
            Err(ConfigError::Serialization(_)) => {}
            other => panic!("Expected Serialization error, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = LayerConfig::adapter_default().with_layer_id("help");
        let yaml = config.to_yaml().unwrap();
        assert_eq!(LayerConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_empty_param() {
        let config = LayerConfig::default().with_layers_param("");
        assert!(config.validate().is_err());
    }
}
