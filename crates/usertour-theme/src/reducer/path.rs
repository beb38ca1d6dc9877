//! Dotted-path navigation over the JSON view of a settings tree.

use serde_json::Value;
use usertour_common::ThemeError;

use crate::merge::{coerce_number, join_path, json_kind};

pub(super) fn segments(path: &str) -> Vec<&str> {
    path.split('.').filter(|s| !s.is_empty()).collect()
}

pub(super) fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    segments(path)
        .into_iter()
        .try_fold(root, |node, key| node.as_object()?.get(key))
}

pub(super) fn lookup_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    segments(path)
        .into_iter()
        .try_fold(root, |node, key| node.as_object_mut()?.get_mut(key))
}

/// Reject patch keys the target does not have and leaves of the wrong kind.
pub(super) fn check_shape(target: &Value, patch: &Value, path: &str) -> Result<(), ThemeError> {
    let (Some(target), Some(patch)) = (target.as_object(), patch.as_object()) else {
        return Ok(());
    };
    for (key, value) in patch {
        let child_path = join_path(path, key);
        let existing = target
            .get(key)
            .ok_or_else(|| ThemeError::InvalidPath(child_path.clone()))?;
        if value.is_null() {
            continue;
        }
        if json_kind(existing) != json_kind(value) && coerce_number(existing, value).is_none() {
            return Err(ThemeError::TypeMismatch {
                path: child_path,
                expected: json_kind(existing).into(),
            });
        }
        check_shape(existing, value, &child_path)?;
    }
    Ok(())
}
