//! Tests for the theme editor session.

use super::*;
use crate::api::{Fault, MemoryThemeApi};
use usertour_common::{NotificationLevel, ThemeId};
use usertour_theme::{RulesCondition, RulesOperator};

async fn editor_with_api() -> (MemoryThemeApi, ThemeEditor) {
    let api = MemoryThemeApi::with_system_theme();
    let theme = api
        .create_theme("Ocean", ThemeSettings::default())
        .await
        .unwrap()
        .unwrap();
    (api, ThemeEditor::new(theme))
}

fn named_draft(name: &str) -> VariationDraft {
    VariationDraft {
        name: name.into(),
        conditions: vec![RulesCondition::group(RulesOperator::And, vec![])],
        ..Default::default()
    }
}

#[tokio::test]
async fn edits_mark_dirty_and_block_leaving() {
    let (_, mut editor) = editor_with_api().await;
    assert!(!editor.is_dirty());
    assert!(editor.can_leave());

    editor
        .dispatch(&SettingsAction::set("tooltip.width", 420))
        .unwrap();
    assert!(editor.is_dirty());
    assert!(!editor.can_leave());
    assert_eq!(editor.settings().tooltip.width, 420);
    assert_eq!(editor.saved().settings.tooltip.width, 300);
}

#[tokio::test]
async fn discard_restores_saved() {
    let (_, mut editor) = editor_with_api().await;
    editor.set_name("Renamed");
    editor.add_variation(&named_draft("Pro")).unwrap();
    editor.discard();
    assert!(!editor.is_dirty());
    assert_eq!(editor.theme().name, "Ocean");
    assert!(editor.variations().is_empty());
}

#[tokio::test]
async fn rejected_action_keeps_draft() {
    let (_, mut editor) = editor_with_api().await;
    let err = editor
        .dispatch(&SettingsAction::set("font.fontSize", "big"))
        .unwrap_err();
    assert!(matches!(err, ThemeError::TypeMismatch { .. }));
    assert!(!editor.is_dirty());
}

#[tokio::test]
async fn save_persists_and_clears_dirty() {
    let (api, mut editor) = editor_with_api().await;
    let mut toasts = NotificationQueue::new(5);
    editor
        .dispatch(&SettingsAction::set("modal.width", 800))
        .unwrap();

    assert!(editor.save(&api, &mut toasts).await);
    assert!(!editor.is_dirty());
    assert!(!editor.is_saving());
    assert_eq!(toasts.last().unwrap().level, NotificationLevel::Info);

    let stored = api.get_theme(&editor.theme().id).await.unwrap();
    assert_eq!(stored.settings.modal.width, 800);
}

#[tokio::test]
async fn failed_save_keeps_draft_and_toasts() {
    let (api, mut editor) = editor_with_api().await;
    let mut toasts = NotificationQueue::new(5);
    editor.set_name("Ocean v2");
    api.inject(Fault::Error(ApiError::Server("Database unavailable".into())))
        .await;

    assert!(!editor.save(&api, &mut toasts).await);
    assert!(editor.is_dirty());
    assert_eq!(editor.theme().name, "Ocean v2");
    let toast = toasts.last().unwrap();
    assert_eq!(toast.level, NotificationLevel::Error);
    assert_eq!(toast.body, "Database unavailable");

    assert!(editor.save(&api, &mut toasts).await);
    assert!(!editor.is_dirty());
}

#[tokio::test]
async fn begin_save_blocks_double_submit() {
    let (_, mut editor) = editor_with_api().await;
    let first = editor.begin_save().unwrap();
    assert!(first.is_some());
    assert!(editor.is_saving());
    assert!(editor.begin_save().unwrap().is_none());

    let mut toasts = NotificationQueue::new(5);
    editor.finish_save(Ok(first.unwrap()), &mut toasts);
    assert!(!editor.is_saving());
    assert!(editor.begin_save().unwrap().is_some());
}

#[tokio::test]
async fn edits_during_flight_stay_dirty() {
    let (api, mut editor) = editor_with_api().await;
    let mut toasts = NotificationQueue::new(5);
    editor.set_name("First");
    let snapshot = editor.begin_save().unwrap().unwrap();
    editor.set_name("Second");

    let result = api.update_theme(&snapshot).await;
    assert!(editor.finish_save(result, &mut toasts));
    assert_eq!(editor.saved().name, "First");
    assert_eq!(editor.theme().name, "Second");
    assert!(editor.is_dirty());
}

#[tokio::test]
async fn invalid_draft_reports_inline_errors() {
    let (api, mut editor) = editor_with_api().await;
    let mut toasts = NotificationQueue::new(5);
    editor
        .dispatch(&SettingsAction::set("tooltip.width", 5))
        .unwrap();

    assert!(!editor.save(&api, &mut toasts).await);
    assert!(toasts.is_empty());
    assert_eq!(editor.field_errors()[0].field, "settings.tooltip.width");
    assert!(!editor.is_saving());

    editor.discard();
    assert!(editor.field_errors().is_empty());
}

#[tokio::test]
async fn system_theme_refuses_save() {
    let api = MemoryThemeApi::with_system_theme();
    let system = api.list_themes().await.unwrap().remove(0);
    let mut editor = ThemeEditor::new(system);
    let mut toasts = NotificationQueue::new(5);
    editor.set_name("Hacked");

    assert!(editor.is_read_only());
    assert!(matches!(editor.begin_save(), Err(ThemeError::ReadOnly(_))));
    assert!(!editor.save(&api, &mut toasts).await);
    assert_eq!(toasts.last().unwrap().level, NotificationLevel::Error);
}

#[tokio::test]
async fn variation_ops_flow_through_draft() {
    let (_, mut editor) = editor_with_api().await;
    editor.add_variation(&named_draft("A")).unwrap();
    editor.add_variation(&named_draft("B")).unwrap();
    editor.add_variation(&named_draft("C")).unwrap();
    editor.reorder_variations(2, 0).unwrap();
    let names: Vec<_> = editor.variations().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);

    let id = editor.variations()[1].id.clone();
    editor.update_variation(1, &named_draft("A2")).unwrap();
    assert_eq!(editor.variations()[1].name, "A2");
    assert_eq!(editor.variations()[1].id, id);

    editor.remove_variation(0).unwrap();
    assert_eq!(editor.variations().len(), 2);
    assert!(editor.remove_variation(5).is_err());
    assert_eq!(
        editor.add_variation(&VariationDraft::default()).unwrap_err(),
        VariationError::NameRequired
    );
}

#[tokio::test]
async fn preview_reflects_draft() {
    let (_, mut editor) = editor_with_api().await;
    editor
        .dispatch(&SettingsAction::set("brandColor.background", "#000000"))
        .unwrap();
    let css = editor.preview_css(Some(SurfaceType::Tooltip));
    assert!(css.contains("--usertour-brand-background-color: #000000;"));
}

#[test]
fn editor_over_unknown_theme_id_is_clean() {
    let mut theme = Theme::new("Loose");
    theme.id = ThemeId::from("loose");
    let editor = ThemeEditor::new(theme);
    assert!(editor.can_leave());
}
