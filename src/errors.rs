use thiserror::Error;

/// Main error type for the class-variants crate.
///
/// Merging and variant resolution never fail. These errors come from the
/// surfaces around them: loading configs, strict construction and CLI input.
#[derive(Debug, Error)]
pub enum VariantError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Variant group '{group}' has no \"default\" entry")]
    MissingDefault { group: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, VariantError>;
