//! Backend seam for theme persistence.
//!
//! The console talks to the theme store only through [`ThemeApi`]. Every
//! call can fail with an [`ApiError`]; `create_theme` and `copy_theme` may
//! also succeed without returning a theme, which callers treat as a soft
//! failure.

mod memory;


pub use memory::{Fault, MemoryThemeApi};

use async_trait::async_trait;
use usertour_common::{ApiError, ThemeId};
use usertour_theme::{Theme, ThemeSettings};

#[async_trait]
pub trait ThemeApi: Send + Sync {
    /// Every theme of the project, default first, then by name.
    async fn list_themes(&self) -> Result<Vec<Theme>, ApiError>;

    async fn get_theme(&self, id: &ThemeId) -> Result<Theme, ApiError>;

    async fn create_theme(
        &self,
        name: &str,
        settings: ThemeSettings,
    ) -> Result<Option<Theme>, ApiError>;

    /// Persist name, settings and variations. Flags and timestamps are
    /// owned by the backend.
    async fn update_theme(&self, theme: &Theme) -> Result<Theme, ApiError>;

    async fn copy_theme(&self, id: &ThemeId, name: &str) -> Result<Option<Theme>, ApiError>;

    /// Make `id` the project default. Exactly one theme is default afterwards.
    async fn set_default_theme(&self, id: &ThemeId) -> Result<(), ApiError>;

    async fn delete_theme(&self, id: &ThemeId) -> Result<(), ApiError>;
}
