//! Integration tests for settings persistence.

use std::collections::BTreeSet;
use toolshelf::catalog::{Catalog, CatalogStore};
use toolshelf::i18n::Language;
use toolshelf::settings::{Settings, SettingsStore};
use toolshelf::theme::Theme;

fn catalog() -> Catalog {
    serde_json::from_str(
        r#"{"tools": [{"id": "alpha", "name": "Alpha", "category": "Notes",
            "platforms": ["linux"], "developer": "Acme"}]}"#,
    )
    .unwrap()
}

#[test]
fn settings_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));

    let mut settings = Settings {
        theme: Theme::Light,
        language: Language::En,
        ..Default::default()
    };
    settings.favorites.insert("alpha".to_string());

    store.save(&settings).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.theme, Theme::Light);
    assert_eq!(loaded.language, Language::En);
    assert!(loaded.favorites.contains("alpha"));
}

#[test]
fn fresh_store_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));

    let settings = store.load();
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.language, Language::De);
    assert!(settings.favorites.is_empty());
}

#[test]
fn favorite_mutations_write_through() {
    let dir = tempfile::tempdir().unwrap();
    let settings_store = SettingsStore::new(dir.path().join("settings.json"));
    let mut settings = settings_store.load();

    let mut catalog_store = CatalogStore::new(catalog(), settings.favorites.clone());

    // Favorite: mutate and persist
    catalog_store.add_favorite("alpha").unwrap();
    settings.favorites = catalog_store.favorites().clone();
    settings_store.save(&settings).unwrap();
    assert!(settings_store.load().favorites.contains("alpha"));

    // Unfavorite: the file reflects the change again
    catalog_store.remove_favorite("alpha");
    settings.favorites = catalog_store.favorites().clone();
    settings_store.save(&settings).unwrap();
    assert!(settings_store.load().favorites.is_empty());
}

#[test]
fn double_toggle_roundtrips_to_original_file_state() {
    let dir = tempfile::tempdir().unwrap();
    let settings_store = SettingsStore::new(dir.path().join("settings.json"));
    let mut settings = settings_store.load();
    let mut catalog_store = CatalogStore::new(catalog(), BTreeSet::new());

    let before = settings_store.load();

    catalog_store.toggle_favorite("alpha");
    settings.favorites = catalog_store.favorites().clone();
    settings_store.save(&settings).unwrap();

    catalog_store.toggle_favorite("alpha");
    settings.favorites = catalog_store.favorites().clone();
    settings_store.save(&settings).unwrap();

    assert_eq!(settings_store.load().favorites, before.favorites);
}
