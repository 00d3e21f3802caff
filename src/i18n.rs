//! Language packs and localization.
//!
//! A language pack is a flat JSON key→string map used to relabel UI text.
//! Built-in de/en packs are compiled in; a pack directory or URL can
//! override them. Load failures degrade to the built-in pack.

use crate::error::{Result, ToolshelfError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German (catalog default)
    #[default]
    De,
    /// English
    En,
}

impl Language {
    /// Language code as used in pack filenames and localized descriptions.
    pub fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Cycle to the other language.
    pub fn toggle(self) -> Self {
        match self {
            Self::De => Self::En,
            Self::En => Self::De,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "de" => Ok(Self::De),
            "en" => Ok(Self::En),
            other => Err(ToolshelfError::Language(format!("Unknown language: {}", other))),
        }
    }
}

/// A key→string mapping consumed to relabel UI text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LanguagePack(HashMap<String, String>);

impl LanguagePack {
    /// Built-in pack for a language, compiled into the binary.
    pub fn builtin(lang: Language) -> Self {
        let raw = match lang {
            Language::De => include_str!("../lang/de.json"),
            Language::En => include_str!("../lang/en.json"),
        };
        // Built-in packs are static assets; a parse failure here is a build defect.
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Parse a pack from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| ToolshelfError::Language(e.to_string()))?;
        Ok(Self(map))
    }

    /// Load a pack for `lang` from `<dir>/<code>.json`.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P, lang: Language) -> Result<Self> {
        let path = dir.as_ref().join(format!("{}.json", lang.code()));
        let content = fs::read_to_string(&path)
            .map_err(|e| ToolshelfError::Language(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Fetch a pack from a URL.
    pub async fn fetch_from_url(url: &str) -> Result<Self> {
        let response = reqwest::get(url).await?.error_for_status()?;
        let map: HashMap<String, String> = response.json().await?;
        Ok(Self(map))
    }

    /// Resolve a pack: directory override first, built-in fallback.
    ///
    /// This is the startup path: a broken pack must not prevent the UI
    /// from opening.
    pub fn load_or_builtin<P: AsRef<Path>>(dir: Option<P>, lang: Language) -> Self {
        if let Some(dir) = dir {
            match Self::load_from_dir(&dir, lang) {
                Ok(pack) => {
                    log::info!("Loaded {} language pack from {}", lang, dir.as_ref().display());
                    return pack;
                }
                Err(e) => {
                    log::error!("Failed to load language pack: {}", e);
                }
            }
        }
        Self::builtin(lang)
    }

    /// Look up a label. Unknown keys fall back to the key itself so
    /// missing translations stay visible instead of blanking the UI.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Number of entries in the pack.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pack has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Packs for every supported language, resolved once at startup.
///
/// Resolution order per language: URL template (when configured), pack
/// directory, built-in. The fetch suspends initialization; afterwards
/// language switching is a pure lookup.
#[derive(Debug, Clone)]
pub struct PackSet {
    de: LanguagePack,
    en: LanguagePack,
}

impl Default for PackSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PackSet {
    /// Built-in packs only.
    pub fn builtin() -> Self {
        Self {
            de: LanguagePack::builtin(Language::De),
            en: LanguagePack::builtin(Language::En),
        }
    }

    /// Resolve packs from the configured sources.
    ///
    /// `url` is a template with a `{lang}` placeholder, e.g.
    /// `https://example.com/lang/{lang}.json`.
    pub async fn resolve(url: Option<&str>, dir: Option<&Path>) -> Self {
        Self {
            de: resolve_pack(url, dir, Language::De).await,
            en: resolve_pack(url, dir, Language::En).await,
        }
    }

    /// The pack for a language.
    pub fn get(&self, lang: Language) -> &LanguagePack {
        match lang {
            Language::De => &self.de,
            Language::En => &self.en,
        }
    }
}

/// Resolve one language's pack: URL first, then directory, then built-in.
async fn resolve_pack(url: Option<&str>, dir: Option<&Path>, lang: Language) -> LanguagePack {
    if let Some(template) = url {
        let url = template.replace("{lang}", lang.code());
        match LanguagePack::fetch_from_url(&url).await {
            Ok(pack) => {
                log::info!("Fetched {} language pack from {}", lang, url);
                return pack;
            }
            Err(e) => {
                log::error!("Failed to fetch language pack from {}: {}", url, e);
            }
        }
    }
    LanguagePack::load_or_builtin(dir, lang)
}

/// Format an ISO date (YYYY-MM-DD) per language convention.
///
/// German uses DD.MM.YYYY, English MM/DD/YYYY. Unparseable input is
/// returned unchanged.
pub fn format_date(iso_date: &str, lang: Language) -> String {
    match chrono::NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => match lang {
            Language::De => date.format("%d.%m.%Y").to_string(),
            Language::En => date.format("%m/%d/%Y").to_string(),
        },
        Err(_) => iso_date.to_string(),
    }
}
