//! `web-sys` bindings for the three environment seams.

use shared::ThemeConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use super::{ColorSchemeQuery, PreferenceStorage, RootElement, ThemeError, ThemeRuntime};

pub fn runtime(config: ThemeConfig) -> ThemeRuntime {
    let root = DocumentRoot::detect().map(|root| Box::new(root) as Box<dyn RootElement>);
    ThemeRuntime::new(
        config,
        Some(Box::new(LocalStorage)),
        Some(Box::new(MatchMedia)),
        root,
    )
}

fn js_error(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}

/// `window.localStorage`, looked up on every call since access itself can throw.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .ok_or(ThemeError::StorageUnavailable)?
            .local_storage()
            .map_err(|error| ThemeError::StorageRead(js_error(&error)))?
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|error| ThemeError::StorageRead(js_error(&error)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|error| ThemeError::StorageWrite(js_error(&error)))
    }
}

pub struct MatchMedia;

impl ColorSchemeQuery for MatchMedia {
    fn matches(&self, query: &str) -> Result<bool, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::MediaQuery("no window".to_string()))?;
        let list = window
            .match_media(query)
            .map_err(|error| ThemeError::MediaQuery(js_error(&error)))?;
        Ok(list.is_some_and(|list| list.matches()))
    }
}

pub struct DocumentRoot {
    element: HtmlElement,
}

impl DocumentRoot {
    pub fn detect() -> Option<Self> {
        let element = web_sys::window()?
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self { element })
    }
}

impl RootElement for DocumentRoot {
    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), ThemeError> {
        let class_list = self.element.class_list();
        let result = if present {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
        result.map_err(|error| ThemeError::RootElement(js_error(&error)))
    }

    fn color_scheme(&self) -> Option<String> {
        self.element
            .style()
            .get_property_value("color-scheme")
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_color_scheme(&self, scheme: &str) -> Result<(), ThemeError> {
        self.element
            .style()
            .set_property("color-scheme", scheme)
            .map_err(|error| ThemeError::RootElement(js_error(&error)))
    }
}
