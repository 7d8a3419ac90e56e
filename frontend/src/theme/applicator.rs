//! Pushes the effective theme onto the root element.
//!
//! Two things are kept in sync: the presence of the dark marker class and the
//! `color-scheme` style property. Each is only written when it differs from
//! what is already there, so repeated applies cause no DOM mutations.

use shared::{Theme, ThemeConfig};

use super::ThemeError;

/// The top-level rendering node, `document.documentElement` in the browser.
pub trait RootElement {
    fn has_class(&self, class: &str) -> bool;
    fn set_class(&self, class: &str, present: bool) -> Result<(), ThemeError>;
    fn color_scheme(&self) -> Option<String>;
    fn set_color_scheme(&self, scheme: &str) -> Result<(), ThemeError>;
}

pub struct ThemeApplicator {
    root: Option<Box<dyn RootElement>>,
    dark_class: String,
}

impl ThemeApplicator {
    pub fn new(root: Option<Box<dyn RootElement>>, config: &ThemeConfig) -> Self {
        Self {
            root,
            dark_class: config.dark_class.clone(),
        }
    }

    /// Whether a root element is available to apply to.
    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.root.is_some()
    }

    pub fn apply(&self, theme: Theme) {
        // No DOM yet, nothing to do.
        let Some(root) = self.root.as_deref() else {
            return;
        };

        let is_dark = theme.is_dark();
        if root.has_class(&self.dark_class) != is_dark {
            if let Err(error) = root.set_class(&self.dark_class, is_dark) {
                log::warn!("Failed to update '{}' marker: {error}", self.dark_class);
            }
        }

        if root.color_scheme().as_deref() != Some(theme.as_str()) {
            if let Err(error) = root.set_color_scheme(theme.as_str()) {
                log::warn!("Failed to set color-scheme: {error}");
            }
        }
    }
}
