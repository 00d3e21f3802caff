//! Theme selection and TUI color palettes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ToolshelfError;

/// UI theme choice. Persisted; affects rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The color palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                text: Color::White,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                highlight_bg: Color::DarkGray,
                favorite: Color::Red,
                category: Color::Magenta,
                badge: Color::Yellow,
            },
            Self::Light => Palette {
                text: Color::Black,
                dim: Color::Gray,
                accent: Color::Blue,
                highlight_bg: Color::LightBlue,
                favorite: Color::Red,
                category: Color::Magenta,
                badge: Color::LightYellow,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ToolshelfError::Settings(format!("Unknown theme: {}", other))),
        }
    }
}

/// Named colors used by the views.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub favorite: Color,
    pub category: Color,
    pub badge: Color,
}
