//! toolshelf - a terminal catalog browser for software tools
//!
//! Loads a static catalog of tools, filters and searches it, tracks
//! favorites, and renders the result in a TUI with theme and language
//! switching. Settings persist to a JSON file; everything else is
//! derived from (catalog, filter state).

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod settings;
pub mod theme;
pub mod tui;

pub use error::{Result, ToolshelfError};
