//! Usertour theme console.
//!
//! The session layer between a theme editor UI and the backend: the
//! [`ThemeApi`] seam with an in-memory implementation, the editor session
//! with its draft and save lifecycle, theme list actions and the variation
//! dialog. Outcomes of backend calls are reported through a
//! [`NotificationQueue`](usertour_common::NotificationQueue).

pub mod actions;
pub mod api;
pub mod editor;
pub mod variation_dialog;

pub use api::{Fault, MemoryThemeApi, ThemeApi};
pub use editor::ThemeEditor;
pub use variation_dialog::VariationDialog;
