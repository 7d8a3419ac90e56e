//! The application-scoped theme state and the resolver operations.
//!
//! One [`ThemeRuntime`] exists per page life. It owns the three environment
//! seams, the effective theme and the initialized flag that keeps the
//! bootstrapper and the provider's mount from applying twice.

use std::cell::Cell;

use shared::{Theme, ThemeConfig};

use super::{
    ColorSchemeQuery, PreferenceStorage, PreferenceStore, RootElement, SystemPreferenceDetector,
    ThemeApplicator,
};

pub struct ThemeRuntime {
    config: ThemeConfig,
    store: PreferenceStore,
    detector: SystemPreferenceDetector,
    applicator: ThemeApplicator,
    initialized: Cell<bool>,
    effective: Cell<Option<Theme>>,
}

impl ThemeRuntime {
    pub fn new(
        config: ThemeConfig,
        storage: Option<Box<dyn PreferenceStorage>>,
        query: Option<Box<dyn ColorSchemeQuery>>,
        root: Option<Box<dyn RootElement>>,
    ) -> Self {
        Self {
            store: PreferenceStore::new(storage, &config),
            detector: SystemPreferenceDetector::new(query, &config),
            applicator: ThemeApplicator::new(root, &config),
            config,
            initialized: Cell::new(false),
            effective: Cell::new(None),
        }
    }

    /// Runtime with no storage, no media queries and no DOM.
    pub fn headless(config: ThemeConfig) -> Self {
        Self::new(config, None, None, None)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn for_current_platform(config: ThemeConfig) -> Self {
        super::browser::runtime(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_current_platform(config: ThemeConfig) -> Self {
        Self::headless(config)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub(super) fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub(super) fn detector(&self) -> &SystemPreferenceDetector {
        &self.detector
    }

    pub(super) fn applicator(&self) -> &ThemeApplicator {
        &self.applicator
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Theme currently applied to the root element, once anything was applied.
    pub fn effective_theme(&self) -> Option<Theme> {
        self.effective.get()
    }

    /// Stored preference if there is a valid one, the platform preference otherwise.
    pub fn resolve(&self) -> Theme {
        self.store
            .get_stored()
            .unwrap_or_else(|| self.detector.get_system_theme())
    }

    /// Applies and persists `theme`. The only mutation path after startup,
    /// reached through [`ThemeContext`](super::ThemeContext) so the live value follows.
    pub(super) fn change(&self, theme: Theme) -> Theme {
        self.applicator.apply(theme);
        self.store.set_stored(theme);
        self.effective.set(Some(theme));
        log::debug!("Theme changed to {theme}");
        theme
    }

    pub(super) fn mark_initialized(&self, theme: Theme) {
        self.effective.set(Some(theme));
        self.initialized.set(true);
    }
}

/// The opposite theme.
pub fn toggle(current: Theme) -> Theme {
    current.toggled()
}
