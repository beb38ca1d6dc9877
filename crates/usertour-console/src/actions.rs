//! Theme list actions.
//!
//! Each action wraps one backend call and reports its outcome as a toast.
//! Backend errors never propagate past this module.

use tracing::warn;
use usertour_common::{Notification, NotificationQueue};
use usertour_theme::{validate_theme_name, Theme, ThemeSettings};

use crate::api::ThemeApi;

fn check_name(name: &str, toasts: &mut NotificationQueue) -> bool {
    match validate_theme_name(name) {
        Ok(()) => true,
        Err(e) => {
            toasts.push(Notification::warning("Invalid theme name", e.message));
            false
        }
    }
}

/// Create a theme from the global defaults.
pub async fn create_theme(
    api: &dyn ThemeApi,
    name: &str,
    toasts: &mut NotificationQueue,
) -> Option<Theme> {
    let name = name.trim();
    if !check_name(name, toasts) {
        return None;
    }
    match api.create_theme(name, ThemeSettings::default()).await {
        Ok(Some(theme)) => {
            toasts.push(Notification::info("Theme created", theme.name.clone()));
            Some(theme)
        }
        Ok(None) => {
            toasts.push(Notification::error("Failed to create theme", "No data returned"));
            None
        }
        Err(err) => {
            warn!("create theme failed: {err}");
            toasts.push(Notification::from_api_error("Failed to create theme", &err));
            None
        }
    }
}

/// Default name offered when duplicating `theme`.
pub fn copy_name(theme: &Theme) -> String {
    format!("{} (copy)", theme.name)
}

/// Duplicate `source` under a new name.
pub async fn copy_theme(
    api: &dyn ThemeApi,
    source: &Theme,
    name: &str,
    toasts: &mut NotificationQueue,
) -> Option<Theme> {
    let name = name.trim();
    if !check_name(name, toasts) {
        return None;
    }
    match api.copy_theme(&source.id, name).await {
        Ok(Some(theme)) => {
            toasts.push(Notification::info("Theme duplicated", theme.name.clone()));
            Some(theme)
        }
        Ok(None) => {
            toasts.push(Notification::error("Failed to duplicate theme", "No data returned"));
            None
        }
        Err(err) => {
            warn!("copy theme failed: {err}");
            toasts.push(Notification::from_api_error("Failed to duplicate theme", &err));
            None
        }
    }
}

pub async fn set_default_theme(
    api: &dyn ThemeApi,
    theme: &Theme,
    toasts: &mut NotificationQueue,
) -> bool {
    match api.set_default_theme(&theme.id).await {
        Ok(()) => {
            toasts.push(Notification::info("Default theme updated", theme.name.clone()));
            true
        }
        Err(err) => {
            warn!("set default theme failed: {err}");
            toasts.push(Notification::from_api_error("Failed to set default theme", &err));
            false
        }
    }
}

pub async fn delete_theme(
    api: &dyn ThemeApi,
    theme: &Theme,
    toasts: &mut NotificationQueue,
) -> bool {
    if theme.is_default {
        toasts.push(Notification::warning(
            "Cannot delete theme",
            "Set another theme as default first",
        ));
        return false;
    }
    if theme.is_system {
        toasts.push(Notification::warning(
            "Cannot delete theme",
            "System themes cannot be deleted",
        ));
        return false;
    }
    match api.delete_theme(&theme.id).await {
        Ok(()) => {
            toasts.push(Notification::info("Theme deleted", theme.name.clone()));
            true
        }
        Err(err) => {
            warn!("delete theme failed: {err}");
            toasts.push(Notification::from_api_error("Failed to delete theme", &err));
            false
        }
    }
}
