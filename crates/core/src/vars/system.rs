//! Built-in system variables.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

/// A zero-argument provider returning a calendar date.
pub type DateProvider = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Reserved variable names mapped to date providers.
///
/// The default set contains only `DATE`, today's date in UTC.
#[derive(Clone)]
pub struct SystemVariables {
    providers: HashMap<String, DateProvider>,
}

impl SystemVariables {
    /// Name of the current-date variable.
    pub const DATE: &'static str = "DATE";

    /// A set with no providers at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { providers: HashMap::new() }
    }

    /// Add or replace a provider.
    #[must_use]
    pub fn with_provider<F>(mut self, name: impl Into<String>, provider: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        self.providers.insert(name.into(), Arc::new(provider));
        self
    }

    /// Add or replace a provider that always returns `date`.
    #[must_use]
    pub fn with_fixed_date(self, name: impl Into<String>, date: NaiveDate) -> Self {
        self.with_provider(name, move || date)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Invoke the provider for `name`, if there is one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        self.providers.get(name).map(|provider| provider())
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SystemVariables {
    fn default() -> Self {
        Self::empty().with_provider(Self::DATE, || Utc::now().date_naive())
    }
}

impl fmt::Debug for SystemVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemVariables").field("names", &self.names()).finish()
    }
}
