//! Theme editor session.
//!
//! Holds the last-saved theme and a working draft. Every edit goes through
//! the settings reducer or the variation list operations and only touches
//! the draft; nothing reaches the backend until a save.
//!
//! Saving is split in two so the in-flight state is observable:
//! [`ThemeEditor::begin_save`] hands out the snapshot to persist (or `None`
//! while a save is already running) and [`ThemeEditor::finish_save`] applies
//! the backend's answer.

#[cfg(test)]
mod tests;

use tracing::{debug, info, warn};
use usertour_common::{
    new_correlation_id, ApiError, FieldError, Notification, NotificationQueue, ThemeError,
    VariationError,
};
use usertour_theme::variations;
use usertour_theme::{
    reduce, render_css, validate_theme, SettingsAction, SurfaceType, Theme, ThemeSettings,
    ThemeVariation, VariationDraft,
};

use crate::api::ThemeApi;

pub struct ThemeEditor {
    saved: Theme,
    draft: Theme,
    in_flight: Option<Theme>,
    field_errors: Vec<FieldError>,
}

fn same_content(a: &Theme, b: &Theme) -> bool {
    a.name == b.name && a.settings == b.settings && a.variations == b.variations
}

impl ThemeEditor {
    /// Open an editor on a theme fetched from the backend.
    pub fn new(theme: Theme) -> Self {
        Self {
            draft: theme.clone(),
            saved: theme,
            in_flight: None,
            field_errors: Vec::new(),
        }
    }

    /// The working draft.
    pub fn theme(&self) -> &Theme {
        &self.draft
    }

    pub fn saved(&self) -> &Theme {
        &self.saved
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.draft.settings
    }

    pub fn variations(&self) -> &[ThemeVariation] {
        &self.draft.variations
    }

    /// Inline validation messages from the last save attempt.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn is_read_only(&self) -> bool {
        !self.saved.is_editable()
    }

    /// Apply a settings action to the draft.
    ///
    /// A rejected action leaves the draft untouched.
    pub fn dispatch(&mut self, action: &SettingsAction) -> Result<(), ThemeError> {
        self.draft.settings = reduce(&self.draft.settings, action)?;
        debug!(action = %action.label(), "settings edited");
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn add_variation(&mut self, draft: &VariationDraft) -> Result<(), VariationError> {
        self.draft.variations = variations::add(&self.draft.variations, draft)?;
        Ok(())
    }

    /// Replace the variation at `index` with a validated draft.
    pub fn update_variation(
        &mut self,
        index: usize,
        draft: &VariationDraft,
    ) -> Result<(), VariationError> {
        draft.validate()?;
        let mut variation = draft.to_variation();
        if variation.id.is_empty() {
            if let Some(existing) = self.draft.variations.get(index) {
                variation.id = existing.id.clone();
            }
        }
        self.draft.variations = variations::update(&self.draft.variations, index, variation)?;
        Ok(())
    }

    pub fn remove_variation(&mut self, index: usize) -> Result<(), VariationError> {
        self.draft.variations = variations::remove(&self.draft.variations, index)?;
        Ok(())
    }

    pub fn reorder_variations(&mut self, from: usize, to: usize) -> Result<(), VariationError> {
        self.draft.variations = variations::reorder(&self.draft.variations, from, to)?;
        Ok(())
    }

    /// Whether the draft differs from the last-saved theme.
    pub fn is_dirty(&self) -> bool {
        !same_content(&self.draft, &self.saved)
    }

    /// Navigation guard: leaving is only allowed without unsaved changes.
    pub fn can_leave(&self) -> bool {
        !self.is_dirty()
    }

    /// Drop unsaved changes.
    pub fn discard(&mut self) {
        self.draft = self.saved.clone();
        self.field_errors.clear();
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Style tokens for the live preview of the draft.
    pub fn preview_css(&self, surface: Option<SurfaceType>) -> String {
        render_css(&self.draft.settings, surface)
    }

    /// Start a save.
    ///
    /// Returns `Ok(None)` while another save is in flight. Read-only themes
    /// and drafts that fail validation are rejected; validation messages are
    /// kept in [`field_errors`](Self::field_errors).
    pub fn begin_save(&mut self) -> Result<Option<Theme>, ThemeError> {
        if self.in_flight.is_some() {
            debug!("save already in flight");
            return Ok(None);
        }
        if self.is_read_only() {
            return Err(ThemeError::ReadOnly(self.saved.name.clone()));
        }
        if let Err(e) = validate_theme(&self.draft) {
            if let ThemeError::Validation(errors) = &e {
                self.field_errors = errors.clone();
            }
            return Err(e);
        }
        self.field_errors.clear();
        let snapshot = self.draft.clone();
        self.in_flight = Some(snapshot.clone());
        Ok(Some(snapshot))
    }

    /// Apply the backend's answer to the in-flight save.
    ///
    /// On success the saved theme is replaced; edits made while the save was
    /// running stay in the draft. On failure the draft is kept and an error
    /// toast is queued. Returns whether the save succeeded.
    pub fn finish_save(
        &mut self,
        result: Result<Theme, ApiError>,
        toasts: &mut NotificationQueue,
    ) -> bool {
        let submitted = self.in_flight.take();
        match result {
            Ok(theme) => {
                let untouched = submitted
                    .as_ref()
                    .map(|s| same_content(s, &self.draft))
                    .unwrap_or(true);
                if untouched {
                    self.draft = theme.clone();
                } else {
                    self.draft.updated_at = theme.updated_at;
                }
                info!(id = %theme.id, "theme saved");
                self.saved = theme;
                toasts.push(Notification::info("Theme saved", self.saved.name.clone()));
                true
            }
            Err(err) => {
                warn!("theme save failed: {err}");
                toasts.push(Notification::from_api_error("Failed to save theme", &err));
                false
            }
        }
    }

    /// Save the draft through `api`, reporting the outcome as a toast.
    pub async fn save(&mut self, api: &dyn ThemeApi, toasts: &mut NotificationQueue) -> bool {
        let snapshot = match self.begin_save() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return false,
            Err(ThemeError::Validation(_)) => return false,
            Err(e) => {
                toasts.push(Notification::error("Cannot save theme", e.to_string()));
                return false;
            }
        };
        let correlation = new_correlation_id();
        debug!(%correlation, id = %snapshot.id, "saving theme");
        let result = api.update_theme(&snapshot).await;
        let ok = self.finish_save(result, toasts);
        debug!(%correlation, ok, "save finished");
        ok
    }
}
