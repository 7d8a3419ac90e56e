//! Portfolio frontend entry point

use std::rc::Rc;

use shared::ThemeConfig;

use frontend::theme::{self, ThemeProvider, ThemeRuntime};
use frontend::views;

const THEME_CONFIG: &str = include_str!("../theme.toml");

fn theme_config() -> ThemeConfig {
    ThemeConfig::from_toml_str(THEME_CONFIG).unwrap_or_else(|error| {
        log::error!("{error} - using default theme settings");
        ThemeConfig::default()
    })
}

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        zoon::eprintln!("Failed to install console logger: {error}");
    }
}

pub fn main() {
    init_logging();

    let runtime = Rc::new(ThemeRuntime::for_current_platform(theme_config()));
    // Synchronously, before the first render.
    let theme = theme::bootstrap(&runtime);
    log::info!("Starting with {theme} theme");

    ThemeProvider::mount(runtime);
    zoon::start_app("app", views::root);
}
