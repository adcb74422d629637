use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::path::Path;
use crate::class_value::ClassValue;
use crate::errors::{VariantError, Result};

/// Key every variant group is expected to carry.
pub const DEFAULT_KEY: &str = "default";

/// Static description of a component's classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Classes applied unconditionally
    pub base: ClassValue,

    /// Variant name -> classes; expected to contain `"default"`
    pub variant: IndexMap<String, ClassValue>,

    /// Size name -> classes; expected to contain `"default"`
    pub size: IndexMap<String, ClassValue>,
}

impl VariantConfig {
    pub fn builder() -> VariantConfigBuilder {
        VariantConfigBuilder::default()
    }

    /// Check that both groups carry a `"default"` entry.
    pub fn validate(&self) -> Result<()> {
        for (group, entries) in [("variant", &self.variant), ("size", &self.size)] {
            if !entries.contains_key(DEFAULT_KEY) {
                return Err(VariantError::MissingDefault {
                    group: group.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        Self::from_yaml_str(&read_config(path)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        Self::from_json_str(&read_config(path)?)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            Some("json") => Self::from_json_file(path)?,
            _ => {
                return Err(VariantError::ConfigError {
                    message: format!(
                        "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                        path.display()
                    ),
                })
            }
        };

        tracing::debug!(
            path = %path.display(),
            variants = config.variant.len(),
            sizes = config.size.len(),
            "Loaded variant config"
        );
        Ok(config)
    }

    /// Layer another configuration on top of this one.
    ///
    /// A non-empty `base` in `other` replaces ours. Group entries from
    /// `other` override or extend ours; keys already present keep their
    /// position.
    pub fn merge(mut self, other: Self) -> Self {
        if !other.base.is_empty_marker() {
            self.base = other.base;
        }
        self.variant.extend(other.variant);
        self.size.extend(other.size);
        self
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| VariantError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })
}

/// Fluent construction of a [`VariantConfig`]
#[derive(Debug, Clone, Default)]
pub struct VariantConfigBuilder {
    config: VariantConfig,
}

impl VariantConfigBuilder {
    pub fn base(mut self, value: impl Into<ClassValue>) -> Self {
        self.config.base = value.into();
        self
    }

    pub fn variant(mut self, name: impl Into<String>, value: impl Into<ClassValue>) -> Self {
        self.config.variant.insert(name.into(), value.into());
        self
    }

    pub fn size(mut self, name: impl Into<String>, value: impl Into<ClassValue>) -> Self {
        self.config.size.insert(name.into(), value.into());
        self
    }

    /// Finish without checking for `"default"` entries
    pub fn build(self) -> VariantConfig {
        self.config
    }

    /// Finish and reject groups lacking a `"default"` entry
    pub fn try_build(self) -> Result<VariantConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
