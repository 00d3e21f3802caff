//! TUI application.
//!
//! `App` wires the catalog store, filter engine, settings persistence, and
//! language pack together and dispatches keyboard input per mode. The
//! visible list is recomputed from (catalog, filter state) only.

use super::state::{AppState, DetailState, Mode};
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::filter::{self, Debouncer};
use crate::i18n::{Language, LanguagePack, PackSet};
use crate::settings::{Settings, SettingsStore};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Main TUI application.
pub struct App {
    /// Catalog plus favorite set
    store: CatalogStore,
    /// Persisted view settings
    settings: Settings,
    /// Settings file backing
    settings_store: SettingsStore,
    /// Language packs resolved at startup
    packs: PackSet,
    /// Search input debouncer
    debouncer: Debouncer,
    /// Mutable UI state
    state: AppState,
}

impl App {
    /// Create the application from loaded components.
    pub fn new(
        store: CatalogStore,
        settings: Settings,
        settings_store: SettingsStore,
        packs: PackSet,
        config: &Config,
    ) -> Self {
        let debouncer = Debouncer::new(Duration::from_millis(config.ui.debounce_ms));
        let mut app = Self {
            store,
            settings,
            settings_store,
            packs,
            debouncer,
            state: AppState::new(),
        };
        app.recompute_view();
        app
    }

    /// Immutable view state for rendering.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The catalog store.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Current settings (theme, language, favorites).
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Active language pack.
    pub fn pack(&self) -> &LanguagePack {
        self.packs.get(self.settings.language)
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// Recompute the visible list from the catalog and filter state.
    pub fn recompute_view(&mut self) {
        let view = filter::apply(&self.store, &self.state.filter);
        self.state.visible = view.into_iter().map(|t| t.id.clone()).collect();
        self.state.clamp_selection();
    }

    /// Periodic tick: fire the debouncer when its deadline passed.
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.fire(now) {
            self.commit_search();
        }
    }

    /// Commit the search buffer into the filter and refresh suggestions.
    fn commit_search(&mut self) {
        self.state.filter.search = self.state.search.content().to_string();
        self.state.suggestions = filter::suggest(&self.store, self.state.search.content());
        self.state.suggestion_selected = None;
        self.recompute_view();
    }

    /// Persist current settings, carrying the favorite set along.
    fn persist_settings(&mut self) {
        self.settings.favorites = self.store.favorites().clone();
        if let Err(e) = self.settings_store.save(&self.settings) {
            log::error!("Failed to save settings: {}", e);
            self.state.status_message = Some(format!("Settings not saved: {}", e));
        }
    }

    /// Toggle the favorite state of the currently relevant tool.
    fn toggle_favorite(&mut self) {
        let id = match &self.state.detail {
            Some(detail) => Some(detail.tool_id.clone()),
            None => self.state.selected_id().map(String::from),
        };
        if let Some(id) = id {
            let now_favorite = self.store.toggle_favorite(&id);
            log::info!("Favorite {} -> {}", id, now_favorite);
            self.persist_settings();
            // Favorites-only views change shape when a favorite is dropped
            self.recompute_view();
        }
    }

    /// Switch theme and persist.
    fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggle();
        self.persist_settings();
    }

    /// Switch language and persist.
    fn toggle_language(&mut self) {
        self.settings.language = self.settings.language.toggle();
        self.persist_settings();
    }

    /// Advance a facet filter through None → each value → None.
    fn cycle_facet(current: &mut Option<String>, choices: &[String]) {
        if choices.is_empty() {
            return;
        }
        *current = match current.take() {
            None => Some(choices[0].clone()),
            Some(value) => {
                let next = choices.iter().position(|c| *c == value).map(|i| i + 1);
                match next {
                    Some(i) if i < choices.len() => Some(choices[i].clone()),
                    _ => None,
                }
            }
        };
    }

    /// Handle a key event. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return true;
        }

        match self.state.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Detail => self.handle_detail_key(key),
            Mode::Help => self.handle_help_key(key),
        }

        self.state.should_quit
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('/') => self.state.mode = Mode::Search,
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Enter => {
                if let Some(id) = self.state.selected_id() {
                    self.state.detail = Some(DetailState::new(id));
                    self.state.mode = Mode::Detail;
                }
            }
            KeyCode::Char('f') => self.toggle_favorite(),
            KeyCode::Char('F') => {
                self.state.filter.favorites_only = !self.state.filter.favorites_only;
                self.recompute_view();
            }
            KeyCode::Char('c') => {
                let choices = self.store.catalog().categories();
                Self::cycle_facet(&mut self.state.filter.category, &choices);
                self.recompute_view();
            }
            KeyCode::Char('p') => {
                let choices = self.store.catalog().platforms();
                Self::cycle_facet(&mut self.state.filter.platform, &choices);
                self.recompute_view();
            }
            KeyCode::Char('d') => {
                let choices = self.store.catalog().developers();
                Self::cycle_facet(&mut self.state.filter.developer, &choices);
                self.recompute_view();
            }
            KeyCode::Char('x') => {
                self.state.filter.clear();
                self.state.search.clear();
                self.state.suggestions.clear();
                self.recompute_view();
            }
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('?') => self.state.mode = Mode::Help,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.suggestions.clear();
                self.state.suggestion_selected = None;
                self.state.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                if let Some(i) = self.state.suggestion_selected {
                    if let Some(name) = self.state.suggestions.get(i).cloned() {
                        self.state.search.set(&name);
                    }
                }
                self.commit_search();
                self.state.suggestions.clear();
                self.state.suggestion_selected = None;
                self.state.mode = Mode::Browse;
            }
            KeyCode::Down => self.state.suggestion_next(),
            KeyCode::Up => self.state.suggestion_prev(),
            KeyCode::Backspace => {
                self.state.search.backspace();
                self.debouncer.touch(Instant::now());
            }
            KeyCode::Char(c) => {
                self.state.search.insert(c);
                self.debouncer.touch(Instant::now());
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        let screenshot_total = self
            .state
            .detail
            .as_ref()
            .and_then(|d| self.store.get(&d.tool_id))
            .map(|t| t.screenshots.len())
            .unwrap_or(0);

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state.detail = None;
                self.state.mode = Mode::Browse;
            }
            KeyCode::Right => {
                if let Some(detail) = &mut self.state.detail {
                    detail.next_screenshot(screenshot_total);
                }
            }
            KeyCode::Left => {
                if let Some(detail) = &mut self.state.detail {
                    detail.prev_screenshot(screenshot_total);
                }
            }
            KeyCode::Char('f') => self.toggle_favorite(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            self.state.mode = Mode::Browse;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, LocalizedText, Tool};
    use std::collections::{BTreeMap, BTreeSet};

    fn tool(id: &str, name: &str, category: &str) -> Tool {
        Tool {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            platforms: vec!["linux".to_string()],
            developer: "Acme".to_string(),
            license: String::new(),
            release_date: String::new(),
            short_description: LocalizedText::default(),
            description: LocalizedText::default(),
            pricing: Vec::new(),
            screenshots: vec!["a.png".to_string(), "b.png".to_string()],
            links: BTreeMap::new(),
            logo: String::new(),
            personal_usage: false,
        }
    }

    fn app() -> (App, tempfile::TempDir) {
        let catalog = Catalog {
            tools: vec![
                tool("beta", "Beta", "Backup"),
                tool("alpha", "Alpha", "Notes"),
            ],
        };
        let dir = tempfile::tempdir().unwrap();
        let settings_store = SettingsStore::new(dir.path().join("settings.json"));
        let app = App::new(
            CatalogStore::new(catalog, BTreeSet::new()),
            Settings::default(),
            settings_store,
            PackSet::builtin(),
            &Config::default(),
        );
        (app, dir)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_view_sorted() {
        let (app, _dir) = app();
        assert_eq!(app.state().visible, vec!["alpha", "beta"]);
        assert_eq!(app.state().selected, Some(0));
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _dir) = app();
        assert!(app.handle_key(press(KeyCode::Char('q'))));

        let (mut app, _dir) = self::app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_open_and_close_detail() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.state().mode, Mode::Detail);
        assert_eq!(app.state().detail.as_ref().unwrap().tool_id, "alpha");

        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.state().mode, Mode::Browse);
        assert!(app.state().detail.is_none());
    }

    #[test]
    fn test_detail_screenshot_paging() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.state().detail.as_ref().unwrap().screenshot_index, 1);
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.state().detail.as_ref().unwrap().screenshot_index, 0);
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.state().detail.as_ref().unwrap().screenshot_index, 1);
    }

    #[test]
    fn test_favorite_toggle_and_favorites_filter() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('f')));
        assert!(app.store().is_favorite("alpha"));

        app.handle_key(press(KeyCode::Char('F')));
        assert_eq!(app.state().visible, vec!["alpha"]);

        // Unfavorite while the favorites-only view is active
        app.handle_key(press(KeyCode::Char('f')));
        assert!(app.state().visible.is_empty());
        assert!(app.state().selected.is_none());
    }

    #[test]
    fn test_category_cycle() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('c')));
        assert_eq!(app.state().filter.category.as_deref(), Some("Backup"));
        assert_eq!(app.state().visible, vec!["beta"]);

        app.handle_key(press(KeyCode::Char('c')));
        assert_eq!(app.state().filter.category.as_deref(), Some("Notes"));

        app.handle_key(press(KeyCode::Char('c')));
        assert!(app.state().filter.category.is_none());
        assert_eq!(app.state().visible.len(), 2);
    }

    #[test]
    fn test_search_debounce_commits_on_tick() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('/')));
        assert_eq!(app.state().mode, Mode::Search);

        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Char('l')));
        // Not committed until the debounce fires
        assert_eq!(app.state().visible.len(), 2);

        app.tick(Instant::now() + Duration::from_millis(500));
        assert_eq!(app.state().visible, vec!["alpha"]);
        assert_eq!(app.state().suggestions, vec!["Alpha"]);
    }

    #[test]
    fn test_search_enter_commits_immediately() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Char('b')));
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.state().mode, Mode::Browse);
        assert_eq!(app.state().visible, vec!["beta"]);
    }

    #[test]
    fn test_suggestion_selection_adopted() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Char('l')));
        app.tick(Instant::now() + Duration::from_millis(500));
        app.handle_key(press(KeyCode::Char('/')));

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.state().filter.search, "Alpha");
        assert_eq!(app.state().visible, vec!["alpha"]);
    }

    #[test]
    fn test_clear_filters() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('c')));
        app.handle_key(press(KeyCode::Char('F')));
        app.handle_key(press(KeyCode::Char('x')));
        assert!(app.state().filter.is_empty());
        assert_eq!(app.state().visible.len(), 2);
    }

    #[test]
    fn test_theme_and_language_toggle_persist() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.theme(), Theme::Light);

        app.handle_key(press(KeyCode::Char('l')));
        assert_eq!(app.language(), Language::En);
        assert_eq!(app.pack().get("no-results-title"), "No tools found");
    }

    #[test]
    fn test_help_overlay() {
        let (mut app, _dir) = app();
        app.handle_key(press(KeyCode::Char('?')));
        assert_eq!(app.state().mode, Mode::Help);
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.state().mode, Mode::Browse);
    }

    #[test]
    fn test_cycle_facet_empty_choices() {
        let mut current = None;
        App::cycle_facet(&mut current, &[]);
        assert!(current.is_none());
    }
}
