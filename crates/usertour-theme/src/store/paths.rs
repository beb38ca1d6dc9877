//! Theme directory resolution.

use std::path::{Path, PathBuf};

use usertour_common::{ThemeError, ThemeId};

use super::format::ThemeFormat;

/// The user's theme directory (`<config dir>/usertour/themes`).
pub fn default_themes_dir() -> Result<PathBuf, ThemeError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ThemeError::Io("could not determine config directory".into()))?;
    Ok(config_dir.join("usertour").join("themes"))
}

/// Where a theme with `id` lives inside `dir`.
pub fn theme_file_path(dir: &Path, id: &ThemeId, format: ThemeFormat) -> PathBuf {
    dir.join(format!("{id}.{}", format.extension()))
}
