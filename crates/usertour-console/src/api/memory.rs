//! In-memory [`ThemeApi`] backend.

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use usertour_common::{ApiError, ThemeId};
use usertour_theme::{Theme, ThemeSettings};

use super::ThemeApi;

/// A failure queued for the next backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The call fails with this error.
    Error(ApiError),
    /// The call succeeds without returning data.
    NoData,
}

#[derive(Debug, Default)]
struct State {
    themes: Vec<Theme>,
    faults: VecDeque<Fault>,
}

impl State {
    fn find(&self, id: &ThemeId) -> Result<usize, ApiError> {
        self.themes
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Theme {id} not found")))
    }

    /// Pop the next injected fault. `NoData` becomes an error for calls
    /// that have no soft-failure shape.
    fn take_fault(&mut self, op: &str) -> Result<bool, ApiError> {
        match self.faults.pop_front() {
            None => Ok(false),
            Some(Fault::Error(err)) => {
                debug!(op, "injected backend error");
                Err(err)
            }
            Some(Fault::NoData) => {
                debug!(op, "injected empty response");
                Ok(true)
            }
        }
    }

    fn take_hard_fault(&mut self, op: &str) -> Result<(), ApiError> {
        if self.take_fault(op)? {
            return Err(ApiError::NoData(op.to_owned()));
        }
        Ok(())
    }

    fn insert(&mut self, mut theme: Theme) -> Theme {
        let now = Utc::now();
        theme.created_at = Some(now);
        theme.updated_at = Some(now);
        theme.is_system = false;
        theme.is_default = !self.themes.iter().any(|t| t.is_default);
        self.themes.push(theme.clone());
        theme
    }
}

/// Theme store kept in process memory.
///
/// Enforces the backend rules the console relies on: system themes are
/// read-only, the default theme cannot be deleted and exactly one theme is
/// the default once any exists. Faults can be queued to exercise error
/// handling.
#[derive(Debug, Default)]
pub struct MemoryThemeApi {
    state: Mutex<State>,
}

impl MemoryThemeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the built-in system theme as the default.
    pub fn with_system_theme() -> Self {
        let mut theme = Theme::new("Default");
        theme.is_system = true;
        theme.is_default = true;
        Self::with_themes(vec![theme])
    }

    pub fn with_themes(themes: Vec<Theme>) -> Self {
        Self {
            state: Mutex::new(State {
                themes,
                faults: VecDeque::new(),
            }),
        }
    }

    /// Queue a fault for the next call.
    pub async fn inject(&self, fault: Fault) {
        self.state.lock().await.faults.push_back(fault);
    }

    /// Snapshot of the stored themes in insertion order.
    pub async fn snapshot(&self) -> Vec<Theme> {
        self.state.lock().await.themes.clone()
    }
}

#[async_trait]
impl ThemeApi for MemoryThemeApi {
    async fn list_themes(&self) -> Result<Vec<Theme>, ApiError> {
        let mut state = self.state.lock().await;
        state.take_hard_fault("listThemes")?;
        let mut themes = state.themes.clone();
        themes.sort_by(|a, b| b.is_default.cmp(&a.is_default).then_with(|| a.name.cmp(&b.name)));
        Ok(themes)
    }

    async fn get_theme(&self, id: &ThemeId) -> Result<Theme, ApiError> {
        let mut state = self.state.lock().await;
        state.take_hard_fault("getTheme")?;
        let index = state.find(id)?;
        Ok(state.themes[index].clone())
    }

    async fn create_theme(
        &self,
        name: &str,
        settings: ThemeSettings,
    ) -> Result<Option<Theme>, ApiError> {
        let mut state = self.state.lock().await;
        if state.take_fault("createTheme")? {
            return Ok(None);
        }
        let theme = state.insert(Theme::with_settings(name, settings));
        info!(id = %theme.id, "theme created");
        Ok(Some(theme))
    }

    async fn update_theme(&self, theme: &Theme) -> Result<Theme, ApiError> {
        let mut state = self.state.lock().await;
        state.take_hard_fault("updateTheme")?;
        let index = state.find(&theme.id)?;
        let stored = &mut state.themes[index];
        if stored.is_system {
            return Err(ApiError::Forbidden(format!(
                "System theme '{}' cannot be edited",
                stored.name
            )));
        }
        stored.name = theme.name.clone();
        stored.settings = theme.settings.clone();
        stored.variations = theme.variations.clone();
        stored.updated_at = Some(Utc::now());
        info!(id = %stored.id, "theme updated");
        Ok(stored.clone())
    }

    async fn copy_theme(&self, id: &ThemeId, name: &str) -> Result<Option<Theme>, ApiError> {
        let mut state = self.state.lock().await;
        if state.take_fault("copyTheme")? {
            return Ok(None);
        }
        let index = state.find(id)?;
        let source = state.themes[index].clone();
        let mut copy = Theme::with_settings(name, source.settings);
        copy.variations = source.variations;
        let copy = state.insert(copy);
        info!(from = %id, id = %copy.id, "theme copied");
        Ok(Some(copy))
    }

    async fn set_default_theme(&self, id: &ThemeId) -> Result<(), ApiError> {
        let mut state = self.state.lock().await;
        state.take_hard_fault("setDefaultTheme")?;
        state.find(id)?;
        for theme in &mut state.themes {
            theme.is_default = &theme.id == id;
        }
        info!(%id, "default theme changed");
        Ok(())
    }

    async fn delete_theme(&self, id: &ThemeId) -> Result<(), ApiError> {
        let mut state = self.state.lock().await;
        state.take_hard_fault("deleteTheme")?;
        let index = state.find(id)?;
        let theme = &state.themes[index];
        if theme.is_system {
            return Err(ApiError::Forbidden(format!(
                "System theme '{}' cannot be deleted",
                theme.name
            )));
        }
        if theme.is_default {
            return Err(ApiError::Forbidden(
                "The default theme cannot be deleted".into(),
            ));
        }
        state.themes.remove(index);
        info!(%id, "theme deleted");
        Ok(())
    }
}
