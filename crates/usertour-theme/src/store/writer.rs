//! Write themes to disk.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated theme behind.

use std::path::Path;

use usertour_common::ThemeError;

use super::format::ThemeFormat;
use crate::entity::Theme;

/// Persisted JSON form of a theme.
pub fn theme_to_json(theme: &Theme) -> Result<String, ThemeError> {
    ThemeFormat::Json.render(theme)
}

/// Parse the persisted JSON form of a theme, merging settings over defaults.
pub fn theme_from_json(json: &str) -> Result<Theme, ThemeError> {
    serde_json::from_str(json).map_err(|e| ThemeError::Parse(format!("invalid theme JSON: {e}")))
}

/// Write a theme to `path` in the format its extension names.
///
/// Creates parent directories if they don't exist.
pub fn save_theme_to_path(theme: &Theme, path: &Path) -> Result<(), ThemeError> {
    let format = ThemeFormat::from_path(path)?;
    let content = format.render(theme)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ThemeError::Io(format!(
                "failed to create theme directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension(format!("{}.tmp", format.extension()));
    std::fs::write(&tmp_path, &content).map_err(|e| {
        ThemeError::Io(format!(
            "failed to write theme to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &content).map_err(|e2| {
            ThemeError::Io(format!("failed to write theme to {}: {e2}", path.display()))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), theme = %theme.name, "theme saved to disk");
    Ok(())
}
