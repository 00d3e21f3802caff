//! Application state for the TUI.
//!
//! This module defines the state types that drive the TUI:
//! - `AppState`: all mutable UI state
//! - `Mode`: current input mode (browse, search entry, detail, help)
//! - `SearchBox`: cursor-aware buffer for the search field

use crate::filter::FilterState;

/// The primary application state.
///
/// Owned by `App` and updated in response to events. The `visible` list is
/// always a pure function of (catalog, filter state) — nothing renders
/// tools from any other source.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current input mode
    pub mode: Mode,
    /// Active filter criteria
    pub filter: FilterState,
    /// Search field buffer (committed into `filter.search` on debounce)
    pub search: SearchBox,
    /// Ids of tools in the current filtered view, in display order
    pub visible: Vec<String>,
    /// Selected row in the visible list
    pub selected: Option<usize>,
    /// Current search suggestions
    pub suggestions: Vec<String>,
    /// Highlighted suggestion index
    pub suggestion_selected: Option<usize>,
    /// Open detail overlay, if any
    pub detail: Option<DetailState>,
    /// Transient status line message
    pub status_message: Option<String>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the currently selected tool, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.and_then(|i| self.visible.get(i)).map(String::as_str)
    }

    /// Move selection down, wrapping.
    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) if i + 1 >= self.visible.len() => 0,
            Some(i) => i + 1,
        });
    }

    /// Move selection up, wrapping.
    pub fn select_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => self.visible.len() - 1,
            Some(0) => self.visible.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Clamp the selection after the visible list changed.
    pub fn clamp_selection(&mut self) {
        match self.selected {
            Some(i) if i >= self.visible.len() => {
                self.selected = if self.visible.is_empty() {
                    None
                } else {
                    Some(self.visible.len() - 1)
                };
            }
            None if !self.visible.is_empty() => {
                self.selected = Some(0);
            }
            _ => {}
        }
    }

    /// Move suggestion highlight down, wrapping.
    pub fn suggestion_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.suggestion_selected = Some(match self.suggestion_selected {
            None => 0,
            Some(i) => (i + 1) % self.suggestions.len(),
        });
    }

    /// Move suggestion highlight up, wrapping.
    pub fn suggestion_prev(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.suggestion_selected = Some(match self.suggestion_selected {
            None | Some(0) => self.suggestions.len() - 1,
            Some(i) => i - 1,
        });
    }
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the tool list
    #[default]
    Browse,
    /// Typing in the search field
    Search,
    /// Detail overlay open
    Detail,
    /// Help overlay visible
    Help,
}

/// State of the detail overlay for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    /// Id of the tool being shown
    pub tool_id: String,
    /// Index into the tool's screenshot list
    pub screenshot_index: usize,
}

impl DetailState {
    /// Open the detail overlay for a tool.
    pub fn new(tool_id: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            screenshot_index: 0,
        }
    }

    /// Advance to the next screenshot, wrapping.
    pub fn next_screenshot(&mut self, total: usize) {
        if total > 0 {
            self.screenshot_index = (self.screenshot_index + 1) % total;
        }
    }

    /// Go back to the previous screenshot, wrapping.
    pub fn prev_screenshot(&mut self, total: usize) {
        if total > 0 {
            self.screenshot_index = (self.screenshot_index + total - 1) % total;
        }
    }
}

/// Minimal cursor-aware text buffer for the search field.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    content: String,
    cursor: usize,
}

impl SearchBox {
    /// Current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor byte position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let mut idx = self.cursor - 1;
            while idx > 0 && !self.content.is_char_boundary(idx) {
                idx -= 1;
            }
            self.content.remove(idx);
            self.cursor = idx;
        }
    }

    /// Replace the content, placing the cursor at the end.
    pub fn set(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}
