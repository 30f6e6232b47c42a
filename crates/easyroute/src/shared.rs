use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::expander::Expander;
use crate::options::ExpandOptions;

/// Thread-safe handle to one expander
///
/// Writers take the lock exclusively for `set_entry`; expansions share the
/// read lock and see the table as it was when they started. Clones point
/// at the same expander.
///
/// # Examples
///
/// ```
/// use easyroute::{Expander, SharedExpander};
///
/// let shared = SharedExpander::new(Expander::new());
/// let reader = shared.clone();
///
/// shared.set_entry("yy", r"\d{2}");
/// assert_eq!(reader.expand("<year:yy>"), r"^(?P<year>\d{2})/$");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedExpander {
    inner: Arc<RwLock<Expander>>,
}

impl SharedExpander {
    pub fn new(expander: Expander) -> Self {
        Self {
            inner: Arc::new(RwLock::new(expander)),
        }
    }

    // The only write is a single table insert, so a poisoned lock still
    // guards a consistent expander.
    fn read(&self) -> RwLockReadGuard<'_, Expander> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Expander> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_entry(&self, name: impl Into<String>, fragment: impl Into<String>) {
        self.write().set_entry(name, fragment);
    }

    pub fn expand(&self, template: &str) -> String {
        self.read().expand(template)
    }

    pub fn expand_with(&self, template: &str, options: &ExpandOptions) -> String {
        self.read().expand_with(template, options)
    }

    /// Owned copy of the expander as it is right now
    pub fn snapshot(&self) -> Expander {
        self.read().clone()
    }
}

impl From<Expander> for SharedExpander {
    fn from(expander: Expander) -> Self {
        Self::new(expander)
    }
}
