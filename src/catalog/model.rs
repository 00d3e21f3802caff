//! Tool record types.
//!
//! Mirrors the shape of the catalog JSON document: a top-level `tools` array
//! of records with localized descriptions and a free-form link map.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// The default language key used as fallback for localized text.
pub const FALLBACK_LANGUAGE: &str = "de";

/// One catalog entry describing a software utility.
///
/// Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Stable identifier, used for favorites
    pub id: String,
    /// Display name
    pub name: String,
    /// Single category, e.g. "Notes"
    pub category: String,
    /// One or more platform tags, e.g. "macos", "windows"
    pub platforms: Vec<String>,
    /// Developer/vendor name
    pub developer: String,
    /// License string, e.g. "MIT", "Proprietary"
    #[serde(default)]
    pub license: String,
    /// ISO date string (YYYY-MM-DD)
    #[serde(default)]
    pub release_date: String,
    /// Short description shown in the list view
    #[serde(default)]
    pub short_description: LocalizedText,
    /// Long description shown in the detail view
    #[serde(default)]
    pub description: LocalizedText,
    /// Pricing tags, e.g. "Free", "Subscription"
    #[serde(default)]
    pub pricing: Vec<String>,
    /// Screenshot paths or URLs
    #[serde(default)]
    pub screenshots: Vec<String>,
    /// Link map: website, github, documentation, app stores
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    /// Logo path or URL
    #[serde(default)]
    pub logo: String,
    /// Whether the catalog author uses this tool personally
    #[serde(default)]
    pub personal_usage: bool,
}

/// Text that is either a plain string or a per-language map.
///
/// The catalog JSON uses both forms. Lookup falls back to the
/// [`FALLBACK_LANGUAGE`] entry, then to any entry at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    ByLanguage(HashMap<String, String>),
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl LocalizedText {
    /// Resolve the text for a language code.
    pub fn get(&self, lang: &str) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::ByLanguage(map) => map
                .get(lang)
                .or_else(|| map.get(FALLBACK_LANGUAGE))
                .or_else(|| map.values().next())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }
}

/// The full catalog as loaded from the catalog JSON document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    /// All tool records
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl Catalog {
    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.tools.iter().map(|t| t.category.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distinct platform tags across all tools, sorted.
    pub fn platforms(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .tools
            .iter()
            .flat_map(|t| t.platforms.iter().map(String::as_str))
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distinct developers, sorted.
    pub fn developers(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.tools.iter().map(|t| t.developer.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }
}
