//! Day/night colour schemes for the settings overlay.
//!
//! Each mode maps to the two RGB triples written into the `--color-light`
//! and `--color-dark` custom properties.
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const COLOR_LIGHT_PROPERTY: &str = "--color-light";
pub const COLOR_DARK_PROPERTY: &str = "--color-dark";

const WHITE: &str = "255, 255, 255";
const INK: &str = "10, 10, 20";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub color_light: &'static str,
    pub color_dark: &'static str,
}

impl ThemePalette {
    pub fn css_properties(&self) -> [(&'static str, &'static str); 2] {
        [
            (COLOR_LIGHT_PROPERTY, self.color_light),
            (COLOR_DARK_PROPERTY, self.color_dark),
        ]
    }
}

impl ThemeMode {
    pub fn from_system_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Night
        } else {
            ThemeMode::Day
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            ThemeMode::Day => ThemePalette {
                color_light: WHITE,
                color_dark: INK,
            },
            ThemeMode::Night => ThemePalette {
                color_light: INK,
                color_dark: WHITE,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Day => "day",
            ThemeMode::Night => "night",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = CatalogError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "day" => Ok(ThemeMode::Day),
            "night" => Ok(ThemeMode::Night),
            other => Err(CatalogError::invalid(format!(
                "unknown theme '{}', expected 'day' or 'night'",
                other
            ))),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
