//! In-memory stand-ins for the browser seams.
//!
//! Fakes share their state through `Rc`, so a test keeps one clone for
//! inspection and hands another to the runtime.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use shared::ThemeConfig;

use super::{ColorSchemeQuery, PreferenceStorage, RootElement, ThemeError, ThemeRuntime};

#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that throws on every call, like a disabled `localStorage`.
    pub fn failing() -> Self {
        let storage = Self::new();
        storage.fail_reads(true);
        storage.fail_writes(true);
        storage
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.fail_reads.get() {
            return Err(ThemeError::StorageRead("SecurityError: storage disabled".to_string()));
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.fail_writes.get() {
            return Err(ThemeError::StorageWrite("QuotaExceededError".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone)]
pub struct FixedScheme {
    dark: Rc<Cell<Option<bool>>>,
    last_query: Rc<RefCell<Option<String>>>,
}

impl FixedScheme {
    fn new(dark: Option<bool>) -> Self {
        Self {
            dark: Rc::new(Cell::new(dark)),
            last_query: Rc::default(),
        }
    }

    pub fn dark() -> Self {
        Self::new(Some(true))
    }

    pub fn light() -> Self {
        Self::new(Some(false))
    }

    pub fn failing() -> Self {
        Self::new(None)
    }

    pub fn set_dark(&self, dark: bool) {
        self.dark.set(Some(dark));
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.borrow().clone()
    }
}

impl ColorSchemeQuery for FixedScheme {
    fn matches(&self, query: &str) -> Result<bool, ThemeError> {
        *self.last_query.borrow_mut() = Some(query.to_string());
        self.dark
            .get()
            .ok_or_else(|| ThemeError::MediaQuery("matchMedia is not a function".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct FakeRoot {
    classes: Rc<RefCell<Vec<String>>>,
    color_scheme: Rc<RefCell<Option<String>>>,
    mutations: Rc<Cell<usize>>,
    failing: bool,
}

impl FakeRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let root = Self::new();
        root.classes
            .borrow_mut()
            .extend(classes.iter().map(|class| class.to_string()));
        root
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn has(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    pub fn scheme(&self) -> Option<String> {
        self.color_scheme.borrow().clone()
    }

    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }
}

impl RootElement for FakeRoot {
    fn has_class(&self, class: &str) -> bool {
        self.has(class)
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), ThemeError> {
        if self.failing {
            return Err(ThemeError::RootElement("detached".to_string()));
        }
        self.mutations.set(self.mutations.get() + 1);
        let mut classes = self.classes.borrow_mut();
        classes.retain(|c| c != class);
        if present {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn color_scheme(&self) -> Option<String> {
        self.scheme()
    }

    fn set_color_scheme(&self, scheme: &str) -> Result<(), ThemeError> {
        if self.failing {
            return Err(ThemeError::RootElement("detached".to_string()));
        }
        self.mutations.set(self.mutations.get() + 1);
        *self.color_scheme.borrow_mut() = Some(scheme.to_string());
        Ok(())
    }
}

/// Runtime wired to the given fakes with the default configuration.
pub fn runtime(storage: &MemoryStorage, scheme: &FixedScheme, root: &FakeRoot) -> ThemeRuntime {
    ThemeRuntime::new(
        ThemeConfig::default(),
        Some(Box::new(storage.clone())),
        Some(Box::new(scheme.clone())),
        Some(Box::new(root.clone())),
    )
}
