//! Editable copy of a variation held by the variation dialog.

use usertour_common::VariationError;

use crate::entity::{RulesCondition, ThemeVariation};
use crate::schema::ThemeSettings;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariationDraft {
    /// Empty for a variation that has never been saved.
    pub id: String,
    pub name: String,
    pub conditions: Vec<RulesCondition>,
    pub settings: ThemeSettings,
}

impl VariationDraft {
    /// Draft for a brand-new variation, starting from the parent theme's settings.
    pub fn new(base: &ThemeSettings) -> Self {
        Self {
            settings: base.clone(),
            ..Default::default()
        }
    }

    pub fn from_variation(variation: &ThemeVariation) -> Self {
        Self {
            id: variation.id.clone(),
            name: variation.name.clone(),
            conditions: variation.conditions.clone(),
            settings: variation.settings.clone(),
        }
    }

    /// The first problem blocking a save, if any.
    pub fn validate(&self) -> Result<(), VariationError> {
        if self.name.trim().is_empty() {
            return Err(VariationError::NameRequired);
        }
        if self.conditions.is_empty() {
            return Err(VariationError::ConditionRequired);
        }
        Ok(())
    }

    pub fn to_variation(&self) -> ThemeVariation {
        ThemeVariation {
            id: self.id.clone(),
            name: self.name.trim().to_owned(),
            conditions: self.conditions.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Run the validation gate and hand the variation to `save` only if it passes.
    pub fn submit<F>(&self, save: F) -> Result<(), VariationError>
    where
        F: FnOnce(ThemeVariation),
    {
        self.validate()?;
        save(self.to_variation());
        Ok(())
    }
}
