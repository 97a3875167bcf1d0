//! I/O boundary traits for testability
//!
//! The dispatcher reads optional settings through [`ConfigProvider`] so it can
//! run with a real config file, an in-memory map, or nothing at all.

use std::collections::BTreeMap;

/// Read-only key-value configuration source.
pub trait ConfigProvider: Send + Sync {
    /// String value for `key`, if configured.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory configuration, mainly for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    values: BTreeMap<String, String>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_map_config_when_key_present_then_returns_value() {
        let cfg = MapConfig::new().with("username", "ada");
        assert_eq!(cfg.get("username").as_deref(), Some("ada"));
        assert_eq!(cfg.get("missing"), None);
    }
}
