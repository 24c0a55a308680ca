//! The engine's configuration surface for multi-tenancy.
//!
//! Settings are a map of well-known keys to loosely-typed values. The engine
//! bootstrap accepts values programmatically (already typed) as well as from
//! property files (strings), so [`SettingValue`] admits both shapes; a key
//! that is simply absent from the map is the third shape resolution has to
//! handle.

use std::collections::HashMap;

use crate::strategy::MultiTenancyStrategy;

/// Configuration key selecting the multi-tenancy strategy.
///
/// Accepted values: a [`MultiTenancyStrategy`], or a string holding one
/// strategy name (case-insensitive) or a comma-separated list of names.
pub const MULTI_TENANCY: &str = "strata.multi_tenancy";

/// A raw configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// An already-typed strategy, set programmatically.
    Strategy(MultiTenancyStrategy),

    /// Free-form text, as read from a property file or the environment.
    Text(String),
}

impl From<MultiTenancyStrategy> for SettingValue {
    fn from(strategy: MultiTenancyStrategy) -> Self {
        SettingValue::Strategy(strategy)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

/// A collection of engine settings keyed by well-known property names.
#[derive(Debug, Clone, Default)]
pub struct Settings(HashMap<String, SettingValue>);

impl Settings {
    /// Creates an empty settings map.
    pub fn new() -> Self {
        Settings(HashMap::new())
    }

    /// Sets a value, replacing any previous value under the same key.
    pub fn set(&mut self, key: &str, value: impl Into<SettingValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    ///
    /// ```
    /// use strata_multitenancy::settings::{Settings, MULTI_TENANCY};
    ///
    /// let settings = Settings::new().with(MULTI_TENANCY, "database");
    /// assert!(settings.contains_key(MULTI_TENANCY));
    /// ```
    pub fn with(mut self, key: &str, value: impl Into<SettingValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Looks up the value under the given key.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.0.get(key)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of settings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no settings are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
