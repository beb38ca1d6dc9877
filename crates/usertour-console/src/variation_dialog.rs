//! Variation editor dialog.
//!
//! Works on a [`VariationDraft`] copy so the theme draft is untouched until
//! the dialog is applied. A failed validation keeps the dialog open and
//! exposes the message for inline display.

use serde_json::Value;
use usertour_common::{ThemeError, VariationError};
use usertour_theme::{reduce, RulesCondition, SettingsAction, ThemeSettings, VariationDraft};

use crate::editor::ThemeEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    New,
    Existing(usize),
}

#[derive(Debug, Clone)]
pub struct VariationDialog {
    target: Target,
    draft: VariationDraft,
    error: Option<VariationError>,
}

impl VariationDialog {
    /// Open for a new variation starting from the theme's current settings.
    pub fn create(editor: &ThemeEditor) -> Self {
        Self {
            target: Target::New,
            draft: VariationDraft::new(editor.settings()),
            error: None,
        }
    }

    /// Open on the variation at `index`.
    pub fn edit(editor: &ThemeEditor, index: usize) -> Result<Self, VariationError> {
        let variations = editor.variations();
        let variation = variations
            .get(index)
            .ok_or(VariationError::IndexOutOfRange {
                index,
                len: variations.len(),
            })?;
        Ok(Self {
            target: Target::Existing(index),
            draft: VariationDraft::from_variation(variation),
            error: None,
        })
    }

    pub fn is_new(&self) -> bool {
        self.target == Target::New
    }

    pub fn draft(&self) -> &VariationDraft {
        &self.draft
    }

    /// Message from the last failed apply.
    pub fn error(&self) -> Option<&VariationError> {
        self.error.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.error = None;
    }

    pub fn set_conditions(&mut self, conditions: Vec<RulesCondition>) {
        self.draft.conditions = conditions;
        self.error = None;
    }

    /// Edit the variation's settings through the reducer.
    pub fn dispatch(&mut self, action: &SettingsAction) -> Result<(), ThemeError> {
        self.draft.settings = reduce(&self.draft.settings, action)?;
        Ok(())
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.draft.settings
    }

    /// Conditions as the rule editor's JSON value.
    pub fn conditions_json(&self) -> Value {
        serde_json::to_value(&self.draft.conditions).unwrap_or(Value::Array(Vec::new()))
    }

    /// Validate and commit into the editor's draft.
    ///
    /// On failure the dialog stays open with [`error`](Self::error) set.
    pub fn apply(&mut self, editor: &mut ThemeEditor) -> Result<(), VariationError> {
        let result = match self.target {
            Target::New => editor.add_variation(&self.draft),
            Target::Existing(index) => editor.update_variation(index, &self.draft),
        };
        self.error = result.as_ref().err().cloned();
        result
    }
}
