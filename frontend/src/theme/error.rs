/// Failures inside the theme subsystem.
///
/// Only [`ThemeError::ProviderMissing`] ever escapes to callers; everything
/// else is absorbed by the component that hit it and degrades to a safe theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("preference storage is not available")]
    StorageUnavailable,
    #[error("failed to read preference storage: {0}")]
    StorageRead(String),
    #[error("failed to write preference storage: {0}")]
    StorageWrite(String),
    #[error("color scheme query failed: {0}")]
    MediaQuery(String),
    #[error("failed to update root element: {0}")]
    RootElement(String),
    #[error("use_theme must be used within a ThemeProvider")]
    ProviderMissing,
}
