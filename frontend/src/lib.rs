//! Portfolio site frontend: theme handling and shared page chrome.

pub mod theme;
pub mod views;
