//! Platform light/dark preference, queried live and never persisted.

use shared::{Theme, ThemeConfig};

use super::ThemeError;

/// Media query evaluation, `window.matchMedia` in the browser.
pub trait ColorSchemeQuery {
    fn matches(&self, query: &str) -> Result<bool, ThemeError>;
}

pub struct SystemPreferenceDetector {
    query: Option<Box<dyn ColorSchemeQuery>>,
    media_query: String,
}

impl SystemPreferenceDetector {
    pub fn new(query: Option<Box<dyn ColorSchemeQuery>>, config: &ThemeConfig) -> Self {
        Self {
            query,
            media_query: config.system_query.clone(),
        }
    }

    /// `Dark` only when the platform explicitly reports a dark preference.
    pub fn get_system_theme(&self) -> Theme {
        self.try_get_system_theme().unwrap_or_else(|error| {
            log::warn!("Failed to detect system theme: {error}");
            Theme::Light
        })
    }

    pub fn try_get_system_theme(&self) -> Result<Theme, ThemeError> {
        let query = self.query.as_deref().ok_or_else(|| {
            ThemeError::MediaQuery("media queries are not available".to_string())
        })?;
        query.matches(&self.media_query).map(Theme::from_is_dark)
    }
}
