//! Theme file loading and writing.
//!
//! Theme documents may be JSON, YAML or TOML; the format is picked from the
//! file extension. Settings are always merged over the defaults on load.

mod format;
mod loader;
mod paths;
mod writer;


pub use format::ThemeFormat;
pub use loader::{load_settings_from_path, load_theme_from_path, load_themes_dir};
pub use paths::{default_themes_dir, theme_file_path};
pub use writer::{save_theme_to_path, theme_from_json, theme_to_json};
