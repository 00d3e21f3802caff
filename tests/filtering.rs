//! Integration tests for the filter engine over a loaded catalog.

use std::collections::BTreeSet;
use toolshelf::catalog::{Catalog, CatalogStore};
use toolshelf::filter::{self, FilterState};

fn catalog() -> Catalog {
    serde_json::from_str(
        r#"{
            "tools": [
                {
                    "id": "beta",
                    "name": "Beta",
                    "category": "Backup",
                    "platforms": ["windows"],
                    "developer": "Initech",
                    "shortDescription": "Backup tool"
                },
                {
                    "id": "alpha",
                    "name": "Alpha",
                    "category": "Notes",
                    "platforms": ["linux", "macos"],
                    "developer": "Acme",
                    "shortDescription": {"de": "Notiz-App", "en": "Notes app"}
                },
                {
                    "id": "almanac",
                    "name": "Almanac",
                    "category": "Notes",
                    "platforms": ["linux"],
                    "developer": "Acme",
                    "shortDescription": "Calendar notes"
                }
            ]
        }"#,
    )
    .unwrap()
}

fn store() -> CatalogStore {
    CatalogStore::new(catalog(), BTreeSet::new())
}

#[test]
fn no_filters_yields_full_catalog_sorted_by_name() {
    let store = store();
    let names: Vec<&str> = filter::apply(&store, &FilterState::default())
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["Almanac", "Alpha", "Beta"]);
}

#[test]
fn search_al_matches_alpha_and_almanac() {
    let store = store();
    let state = FilterState {
        search: "al".to_string(),
        ..Default::default()
    };
    let names: Vec<&str> = filter::apply(&store, &state).iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Almanac", "Alpha"]);
}

#[test]
fn search_is_case_insensitive() {
    let store = store();
    let lower = FilterState {
        search: "alpha".to_string(),
        ..Default::default()
    };
    let upper = FilterState {
        search: "ALPHA".to_string(),
        ..Default::default()
    };
    let a: Vec<&str> = filter::apply(&store, &lower).iter().map(|t| t.id.as_str()).collect();
    let b: Vec<&str> = filter::apply(&store, &upper).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(a, b);
    assert_eq!(a, vec!["alpha"]);
}

#[test]
fn result_is_subset_satisfying_every_active_predicate() {
    let mut store = store();
    store.toggle_favorite("alpha");
    store.toggle_favorite("beta");

    let state = FilterState {
        search: "a".to_string(),
        category: Some("Notes".to_string()),
        platform: Some("linux".to_string()),
        developer: Some("Acme".to_string()),
        favorites_only: true,
    };

    let view = filter::apply(&store, &state);
    for tool in &view {
        assert!(tool.name.to_lowercase().contains("a"));
        assert_eq!(tool.category, "Notes");
        assert!(tool.platforms.contains(&"linux".to_string()));
        assert_eq!(tool.developer, "Acme");
        assert!(store.is_favorite(&tool.id));
    }
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "alpha");
}

#[test]
fn filtering_is_idempotent() {
    let store = store();
    let state = FilterState {
        search: "a".to_string(),
        category: Some("Notes".to_string()),
        ..Default::default()
    };
    let first: Vec<String> = filter::apply(&store, &state).iter().map(|t| t.id.clone()).collect();
    let second: Vec<String> = filter::apply(&store, &state).iter().map(|t| t.id.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn empty_result_is_a_valid_terminal_state() {
    let store = store();
    let state = FilterState {
        search: "zzz".to_string(),
        ..Default::default()
    };
    assert!(filter::apply(&store, &state).is_empty());
}

#[test]
fn favorites_only_with_no_favorites_is_empty() {
    let store = store();
    let state = FilterState {
        favorites_only: true,
        ..Default::default()
    };
    assert!(filter::apply(&store, &state).is_empty());
}

#[test]
fn toggling_a_favorite_twice_restores_the_set() {
    let mut store = store();
    let before = store.favorites().clone();
    store.toggle_favorite("almanac");
    assert_ne!(store.favorites(), &before);
    store.toggle_favorite("almanac");
    assert_eq!(store.favorites(), &before);
}

#[test]
fn suggestions_respect_threshold_and_cap() {
    let store = store();
    assert!(filter::suggest(&store, "a").is_empty());

    let suggestions = filter::suggest(&store, "al");
    assert_eq!(suggestions, vec!["Alpha", "Almanac"]);
    assert!(suggestions.len() <= filter::MAX_SUGGESTIONS);
}
