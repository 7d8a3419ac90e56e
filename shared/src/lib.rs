use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ===== THEME =====

/// Visual theme of the site. There is no third state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value used for the `color-scheme` style property and the literal storage encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme '{0}'")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

// ===== STORAGE ENCODING =====

/// How a [`Theme`] is written to persistent key-value storage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageEncoding {
    /// The literal strings `"light"` and `"dark"`.
    #[default]
    Literal,
    /// A JSON boolean, `true` meaning dark.
    JsonBool,
}

impl StorageEncoding {
    pub fn encode(self, theme: Theme) -> String {
        match self {
            StorageEncoding::Literal => theme.as_str().to_string(),
            StorageEncoding::JsonBool => theme.is_dark().to_string(),
        }
    }

    /// Returns `None` for anything that is not a valid value in this encoding.
    pub fn decode(self, raw: &str) -> Option<Theme> {
        match self {
            StorageEncoding::Literal => raw.parse().ok(),
            StorageEncoding::JsonBool => serde_json::from_str::<bool>(raw)
                .ok()
                .map(Theme::from_is_dark),
        }
    }
}

// ===== CONFIG TYPES =====

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const LEGACY_STORAGE_KEY: &str = "darkMode";
pub const SYSTEM_THEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Theme subsystem settings, usually embedded as TOML.
///
/// Every field is optional in the TOML source. An empty `legacy_key`
/// disables the migration of the legacy boolean preference.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub encoding: StorageEncoding,
    pub legacy_key: Option<String>,
    pub system_query: String,
    pub dark_class: String,
    pub bootstrap_fallback: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            encoding: StorageEncoding::Literal,
            legacy_key: Some(LEGACY_STORAGE_KEY.to_string()),
            system_query: SYSTEM_THEME_QUERY.to_string(),
            dark_class: DARK_CLASS.to_string(),
            bootstrap_fallback: Theme::Dark,
        }
    }
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Legacy key to migrate from, if migration is enabled and distinct from the primary key.
    pub fn legacy_key(&self) -> Option<&str> {
        self.legacy_key
            .as_deref()
            .filter(|key| !key.is_empty() && *key != self.storage_key)
    }
}
