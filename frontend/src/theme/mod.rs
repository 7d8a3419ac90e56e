//! Light/dark theme resolution, persistence and application.
//!
//! # Flow
//!
//! - **Startup** - [`bootstrap()`] resolves (stored preference, then platform
//!   preference, then the configured fallback) and applies the result to
//!   `<html>` before the first render.
//! - **Mount** - [`ThemeProvider::mount`] wraps the runtime in the single
//!   [`ThemeContext`], bootstrapping first if `main` did not.
//! - **Changes** - [`ThemeContext::toggle`] and [`ThemeContext::set_theme`]
//!   apply to the root element, persist, and then update the reactive value.
//!   The runtime's change path is private to this module.
//!
//! Views reach the context only through [`use_theme`]; nothing else reads
//! storage or media queries.
//!
//! # Seams
//!
//! [`PreferenceStorage`], [`ColorSchemeQuery`] and [`RootElement`] abstract
//! `localStorage`, `matchMedia` and `document.documentElement`. The browser
//! implementations live in `browser` (wasm32 only); other targets get a
//! headless runtime where reads are empty and writes are no-ops.

mod applicator;
mod bootstrap;
#[cfg(target_arch = "wasm32")]
mod browser;
mod context;
mod error;
mod runtime;
mod store;
mod system;
#[cfg(test)]
pub(crate) mod testing;

pub use applicator::RootElement;
pub use bootstrap::bootstrap;
pub use context::{ThemeContext, ThemeProvider, try_use_theme, use_theme};
pub use error::ThemeError;
pub use runtime::{ThemeRuntime, toggle};
pub use store::PreferenceStorage;
pub use system::ColorSchemeQuery;

use applicator::ThemeApplicator;
use store::PreferenceStore;
use system::SystemPreferenceDetector;
