//! The live theme shared by the whole view tree.
//!
//! [`ThemeProvider::mount`] creates the single [`ThemeContext`] for the page
//! and registers it so views can reach it with [`use_theme`]. Every clone of
//! the context shares one `Mutable<Theme>`, so all consumers see a change in
//! the same update.
//!
//! ```rust,ignore
//! let runtime = Rc::new(ThemeRuntime::for_current_platform(config));
//! bootstrap(&runtime);
//! ThemeProvider::mount(runtime);
//!
//! // anywhere in a view
//! let theme = use_theme();
//! Button::new().label_signal(theme.is_dark_signal().map(|dark| if dark { "Light" } else { "Dark" }))
//!     .on_press(move || theme.toggle());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use shared::Theme;
use zoon::{Mutable, Signal, SignalExt};

use super::{ThemeError, ThemeRuntime, bootstrap, toggle};

thread_local! {
    static THEME_CONTEXT: RefCell<Option<ThemeContext>> = const { RefCell::new(None) };
}

/// Live theme handed to views.
///
/// Changes go through [`toggle`](Self::toggle) and [`set_theme`](Self::set_theme)
/// only; the runtime behind it is not reachable from views.
///
/// ```compile_fail
/// use frontend::theme::use_theme;
/// use shared::Theme;
///
/// use_theme().runtime().change(Theme::Dark);
/// ```
#[derive(Clone)]
pub struct ThemeContext {
    runtime: Rc<ThemeRuntime>,
    theme: Mutable<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    pub fn toggle(&self) {
        self.set_theme(toggle(self.theme()));
    }

    pub fn set_theme(&self, theme: Theme) {
        let applied = self.runtime.change(theme);
        self.theme.set_neq(applied);
    }

    pub fn theme_signal(&self) -> impl Signal<Item = Theme> + use<> {
        self.theme.signal()
    }

    pub fn is_dark_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.theme.signal().map(Theme::is_dark)
    }

    /// Whether the theme has been applied to the environment.
    pub fn is_ready(&self) -> bool {
        self.runtime.is_initialized()
    }

    #[cfg(test)]
    fn runtime(&self) -> &ThemeRuntime {
        &self.runtime
    }
}

pub struct ThemeProvider;

impl ThemeProvider {
    /// Mounts the page-wide context.
    ///
    /// Bootstraps the runtime if `main` did not. Mounting again returns the
    /// context that is already registered.
    pub fn mount(runtime: Rc<ThemeRuntime>) -> ThemeContext {
        if let Ok(existing) = try_use_theme() {
            log::warn!("ThemeProvider already mounted - reusing the existing context");
            return existing;
        }

        let theme = bootstrap(&runtime);
        let context = ThemeContext {
            runtime,
            theme: Mutable::new(theme),
        };
        THEME_CONTEXT.with(|slot| *slot.borrow_mut() = Some(context.clone()));
        context
    }

    pub fn is_mounted() -> bool {
        THEME_CONTEXT.with(|slot| slot.borrow().is_some())
    }
}

pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    THEME_CONTEXT
        .with(|slot| slot.borrow().clone())
        .ok_or(ThemeError::ProviderMissing)
}

/// The mounted [`ThemeContext`].
///
/// # Panics
///
/// Panics when no [`ThemeProvider`] has been mounted. That is a wiring bug,
/// not something to recover from.
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(context) => context,
        Err(error) => panic!("{error}"),
    }
}
