//! Read theme documents from disk.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};
use usertour_common::ThemeError;

use super::format::ThemeFormat;
use crate::entity::Theme;
use crate::schema::ThemeSettings;
use crate::validation;

fn read_document(path: &Path) -> Result<Value, ThemeError> {
    let format = ThemeFormat::from_path(path)?;
    if !path.exists() {
        return Err(ThemeError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ThemeError::Io(format!("failed to read {}: {e}", path.display())))?;
    format.parse(&content)
}

/// Load a full theme (id, name, settings, variations) from a file.
///
/// A failed validation is logged and the parsed theme is returned as-is.
pub fn load_theme_from_path(path: &Path) -> Result<Theme, ThemeError> {
    let document = read_document(path)?;
    let theme: Theme = serde_json::from_value(document)
        .map_err(|e| ThemeError::Parse(format!("invalid theme in {}: {e}", path.display())))?;

    if let Err(e) = validation::validate_theme(&theme) {
        warn!("theme '{}' has invalid values: {e}", theme.name);
    }

    info!("loaded theme '{}' from {}", theme.name, path.display());
    Ok(theme)
}

/// Load a bare settings document, merged over the defaults.
///
/// Accepts either a settings object or a full theme document, in which case
/// its `settings` member is used.
pub fn load_settings_from_path(path: &Path) -> Result<ThemeSettings, ThemeError> {
    let document = read_document(path)?;
    if !document.is_object() {
        return Err(ThemeError::Parse(format!(
            "expected an object at the top of {}",
            path.display()
        )));
    }
    let settings = match document.get("settings") {
        Some(inner) if document.get("name").is_some() => inner,
        _ => &document,
    };
    info!("loaded settings from {}", path.display());
    Ok(ThemeSettings::from_partial(settings))
}

/// Load every theme document in a directory, sorted by name.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_themes_dir(dir: &Path) -> Result<Vec<Theme>, ThemeError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| ThemeError::Io(format!("failed to read {}: {e}", dir.display())))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && ThemeFormat::from_path(p).is_ok())
        .collect();
    paths.sort();

    let mut themes = Vec::with_capacity(paths.len());
    for path in paths {
        match load_theme_from_path(&path) {
            Ok(theme) => themes.push(theme),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }
    themes.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(themes)
}
