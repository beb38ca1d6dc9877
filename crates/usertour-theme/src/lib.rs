//! Usertour theme settings model.
//!
//! Provides the settings tree with its global defaults, deep merge of
//! partial documents, `"Auto"` color resolution, CSS custom-property
//! serialization, variation list handling, the settings reducer,
//! validation, file persistence and a live preview pipeline.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use usertour_theme::{render_css, SurfaceType, ThemeSettings};
//! use serde_json::json;
//!
//! let settings = ThemeSettings::from_partial(&json!({
//!     "brandColor": { "background": "#0EA5E9" }
//! }));
//! println!("{}", render_css(&settings, Some(SurfaceType::Tooltip)));
//! ```

pub mod colors;
pub mod css;
pub mod entity;
pub mod merge;
pub mod preview;
pub mod reducer;
pub mod resolve;
pub mod schema;
pub mod store;
pub mod validation;
pub mod variations;
pub mod watcher;

// Re-export core types for convenience
pub use css::{render_css, to_style_tokens, SurfaceType};
pub use entity::{RulesCondition, RulesOperator, Theme, ThemeVariation};
pub use merge::{merge_settings, merge_value};
pub use preview::{PreviewFrame, PreviewPipeline};
pub use reducer::{reduce, SettingsAction};
pub use resolve::resolve;
pub use schema::{ColorSlot, ThemeSettings};
pub use store::{load_settings_from_path, load_theme_from_path, save_theme_to_path};
pub use validation::{validate_settings, validate_theme, validate_theme_name};
pub use variations::VariationDraft;
pub use watcher::{ThemeFileWatcher, ThemeReloader};

/// Serialize settings to a pretty-printed JSON string.
pub fn settings_to_json(settings: &ThemeSettings) -> String {
    serde_json::to_string_pretty(settings)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize settings: {e}\"}}"))
}
