//! Early theme application.
//!
//! [`bootstrap`] runs synchronously from `main` before `start_app`, so the
//! marker class is on `<html>` before the first render and there is no flash
//! of the wrong theme. It resolves like [`ThemeRuntime::resolve`] with one
//! difference: when the platform preference cannot be read and nothing valid
//! is stored, it applies the configured fallback (dark by default) instead of
//! light.
//!
//! The resolved theme is never persisted. The one write bootstrap may do is
//! moving a legacy boolean preference under the primary key, which keeps the
//! user's earlier explicit choice and nothing else.

use shared::Theme;

use super::ThemeRuntime;

/// Resolves and applies the theme once per page life. Later calls return the
/// effective theme without touching the environment.
pub fn bootstrap(runtime: &ThemeRuntime) -> Theme {
    if runtime.is_initialized() {
        return runtime
            .effective_theme()
            .unwrap_or_else(|| runtime.resolve());
    }

    let theme = resolve_for_bootstrap(runtime);
    runtime.applicator().apply(theme);
    runtime.mark_initialized(theme);
    runtime.store().migrate_legacy();
    log::debug!("Theme bootstrapped as {theme}");
    theme
}

fn resolve_for_bootstrap(runtime: &ThemeRuntime) -> Theme {
    let stored = runtime.store().try_get_stored().unwrap_or_else(|error| {
        log::warn!("Failed to read theme preference during bootstrap: {error}");
        None
    });
    if let Some(theme) = stored {
        return theme;
    }

    runtime
        .detector()
        .try_get_system_theme()
        .unwrap_or_else(|error| {
            let fallback = runtime.config().bootstrap_fallback;
            log::warn!("Failed to detect system theme during bootstrap, using {fallback}: {error}");
            fallback
        })
}
