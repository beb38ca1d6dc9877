//! Ordered list of conditional theme variations.
//!
//! Every operation takes the current list by reference and returns a new
//! `Vec`; the caller's list is never mutated. Order is positional and is
//! persisted as array order when the parent theme is saved.

mod draft;

#[cfg(test)]
mod tests;

pub use draft::VariationDraft;

use usertour_common::{new_id, VariationError};

use crate::entity::ThemeVariation;

fn check_index(index: usize, len: usize) -> Result<(), VariationError> {
    if index < len {
        Ok(())
    } else {
        Err(VariationError::IndexOutOfRange { index, len })
    }
}

/// Validate `draft`, give it a fresh id, and append it.
pub fn add(
    list: &[ThemeVariation],
    draft: &VariationDraft,
) -> Result<Vec<ThemeVariation>, VariationError> {
    draft.validate()?;
    let mut variation = draft.to_variation();
    variation.id = new_id();
    let mut out = list.to_vec();
    out.push(variation);
    Ok(out)
}

/// Replace the variation at `index`, keeping its position.
pub fn update(
    list: &[ThemeVariation],
    index: usize,
    variation: ThemeVariation,
) -> Result<Vec<ThemeVariation>, VariationError> {
    check_index(index, list.len())?;
    let mut out = list.to_vec();
    out[index] = variation;
    Ok(out)
}

/// Remove the variation at `index`; later entries shift down by one.
pub fn remove(
    list: &[ThemeVariation],
    index: usize,
) -> Result<Vec<ThemeVariation>, VariationError> {
    check_index(index, list.len())?;
    let mut out = list.to_vec();
    out.remove(index);
    Ok(out)
}

/// Move the variation at `from` to `to`, shifting the entries in between.
pub fn reorder(
    list: &[ThemeVariation],
    from: usize,
    to: usize,
) -> Result<Vec<ThemeVariation>, VariationError> {
    check_index(from, list.len())?;
    check_index(to, list.len())?;
    let mut out = list.to_vec();
    let moved = out.remove(from);
    out.insert(to, moved);
    Ok(out)
}
