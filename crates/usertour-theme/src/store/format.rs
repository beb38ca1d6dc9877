//! Document formats recognised by the store.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use usertour_common::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Json,
    Yaml,
    Toml,
}

impl ThemeFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ThemeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(ThemeError::Parse(format!(
                "unsupported theme file extension '{other}' for {}",
                path.display()
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    /// Parse a document into a JSON value tree.
    pub fn parse(self, content: &str) -> Result<Value, ThemeError> {
        match self {
            Self::Json => serde_json::from_str(content)
                .map_err(|e| ThemeError::Parse(format!("failed to parse JSON: {e}"))),
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ThemeError::Parse(format!("failed to parse YAML: {e}"))),
            Self::Toml => toml::from_str(content)
                .map_err(|e| ThemeError::Parse(format!("failed to parse TOML: {e}"))),
        }
    }

    /// Serialize a value in this format.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ThemeError> {
        match self {
            Self::Json => serde_json::to_string_pretty(value)
                .map_err(|e| ThemeError::Parse(format!("failed to serialize JSON: {e}"))),
            Self::Yaml => serde_yaml::to_string(value)
                .map_err(|e| ThemeError::Parse(format!("failed to serialize YAML: {e}"))),
            Self::Toml => toml::to_string_pretty(value)
                .map_err(|e| ThemeError::Parse(format!("failed to serialize TOML: {e}"))),
        }
    }
}
