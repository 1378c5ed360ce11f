//! # Kennel configuration
//!
//! A plain string key/value store with dotted keys (`http.port`), plus typed
//! getters on an immutable snapshot.
//!
//! ```rust
//! use kennel_core::KennelConfig;
//!
//! let mut config = KennelConfig::new();
//! config.set("http.port", "3000");
//!
//! assert_eq!(config.get("http.port"), Some("3000"));
//! assert_eq!(config.snapshot().get_u16("http.port"), Some(3000));
//! ```
//!
//! ## Environment overrides
//! `load_vars` folds prefixed variables into dotted keys, so
//! `KENNEL__HTTP__PORT=8080` becomes `http.port = "8080"`:
//!
//! ```rust
//! use kennel_core::KennelConfig;
//!
//! let mut config = KennelConfig::new();
//! config.load_vars("KENNEL__", [("KENNEL__HTTP__PORT".to_string(), "8080".to_string())]);
//!
//! assert_eq!(config.get("http.port"), Some("8080"));
//! ```

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct KennelConfig {
    values: HashMap<String, String>,
}

impl KennelConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Overlay `(key, value)` pairs starting with `prefix`, typically
    /// `std::env::vars()`.
    /// `PREFIX__HTTP__HOST` maps to `http.host`.
    pub fn load_vars<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                if !normalized.is_empty() {
                    self.set(normalized, value);
                }
            }
        }
    }

    pub fn snapshot(&self) -> KennelConfigSnapshot {
        KennelConfigSnapshot::new(self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KennelConfigSnapshot {
    map: HashMap<String, String>,
}

impl KennelConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.get(key).and_then(|v| v.trim().parse::<u16>().ok())
    }
}
