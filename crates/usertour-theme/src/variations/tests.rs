//! Tests for variation list operations and the save gate.

use super::*;
use crate::entity::{RulesCondition, RulesOperator};
use crate::schema::ThemeSettings;
use serde_json::json;

fn variation(id: &str) -> ThemeVariation {
    ThemeVariation {
        id: id.into(),
        name: format!("variation {id}"),
        conditions: vec![RulesCondition::leaf("user-attr", json!({ "id": id }))],
        settings: ThemeSettings::default(),
    }
}

fn ids(list: &[ThemeVariation]) -> Vec<&str> {
    list.iter().map(|v| v.id.as_str()).collect()
}

fn four() -> Vec<ThemeVariation> {
    ["v0", "v1", "v2", "v3"].into_iter().map(variation).collect()
}

fn valid_draft() -> VariationDraft {
    VariationDraft {
        name: "Enterprise".into(),
        conditions: vec![RulesCondition::group(RulesOperator::And, vec![])],
        ..VariationDraft::new(&ThemeSettings::default())
    }
}

#[test]
fn reorder_moves_forward() {
    let list = four();
    let out = reorder(&list, 0, 2).unwrap();
    assert_eq!(ids(&out), vec!["v1", "v2", "v0", "v3"]);
    // input untouched
    assert_eq!(ids(&list), vec!["v0", "v1", "v2", "v3"]);
}

#[test]
fn reorder_moves_backward() {
    let out = reorder(&four(), 3, 1).unwrap();
    assert_eq!(ids(&out), vec!["v0", "v3", "v1", "v2"]);
}

#[test]
fn reorder_to_same_index_is_identity() {
    let list = four();
    assert_eq!(reorder(&list, 2, 2).unwrap(), list);
}

#[test]
fn reorder_is_a_permutation() {
    let list = four();
    for from in 0..list.len() {
        for to in 0..list.len() {
            let out = reorder(&list, from, to).unwrap();
            assert_eq!(out.len(), list.len());
            let mut before = ids(&list);
            let mut after = ids(&out);
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
            assert_eq!(out[to].id, list[from].id);
        }
    }
}

#[test]
fn reorder_out_of_range() {
    let err = reorder(&four(), 0, 4).unwrap_err();
    assert_eq!(err, VariationError::IndexOutOfRange { index: 4, len: 4 });
    assert!(reorder(&[], 0, 0).is_err());
}

#[test]
fn add_appends_with_fresh_id() {
    let list = four();
    let draft = valid_draft();
    assert!(draft.id.is_empty());

    let out = add(&list, &draft).unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(out[4].name, "Enterprise");
    assert!(!out[4].id.is_empty());
    assert!(uuid_like(&out[4].id));

    let again = add(&list, &draft).unwrap();
    assert_ne!(again[4].id, out[4].id);
}

fn uuid_like(id: &str) -> bool {
    id.len() == 36 && id.chars().filter(|c| *c == '-').count() == 4
}

#[test]
fn add_rejects_invalid_draft() {
    let mut draft = valid_draft();
    draft.name = "   ".into();
    assert_eq!(add(&[], &draft).unwrap_err(), VariationError::NameRequired);

    let mut draft = valid_draft();
    draft.conditions.clear();
    assert_eq!(
        add(&[], &draft).unwrap_err(),
        VariationError::ConditionRequired
    );
}

#[test]
fn update_replaces_in_place() {
    let list = four();
    let mut replacement = variation("v1");
    replacement.name = "Renamed".into();
    let out = update(&list, 1, replacement).unwrap();
    assert_eq!(ids(&out), ids(&list));
    assert_eq!(out[1].name, "Renamed");
    assert_eq!(list[1].name, "variation v1");
    assert!(update(&list, 9, variation("x")).is_err());
}

#[test]
fn remove_shifts_later_entries() {
    let out = remove(&four(), 1).unwrap();
    assert_eq!(ids(&out), vec!["v0", "v2", "v3"]);
    assert!(remove(&out, 3).is_err());
}

#[test]
fn submit_never_calls_save_for_invalid_draft() {
    let mut called = false;
    let draft = VariationDraft::new(&ThemeSettings::default());
    let err = draft.submit(|_| called = true).unwrap_err();
    assert_eq!(err, VariationError::NameRequired);
    assert_eq!(err.to_string(), "Name is required");
    assert!(!called);

    let mut named = draft.clone();
    named.name = "Beta".into();
    let err = named.submit(|_| called = true).unwrap_err();
    assert_eq!(err.to_string(), "At least one condition is required");
    assert!(!called);
}

#[test]
fn submit_passes_trimmed_variation() {
    let mut draft = valid_draft();
    draft.name = "  Trial users ".into();
    let mut saved = None;
    draft.submit(|v| saved = Some(v)).unwrap();
    assert_eq!(saved.unwrap().name, "Trial users");
}

#[test]
fn draft_from_variation_keeps_identity() {
    let v = variation("v7");
    let draft = VariationDraft::from_variation(&v);
    assert_eq!(draft.to_variation(), v);
}
