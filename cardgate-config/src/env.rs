// Environment variable loading

use crate::Result;
use std::collections::HashMap;
use std::env;

/// Default prefix for gateway environment variables (`CARDGATE_GATE_URL`, ...).
pub const DEFAULT_PREFIX: &str = "CARDGATE";

/// Environment variable loader
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    /// Create a new environment loader
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Load every variable carrying the prefix, keyed by the lowercased
    /// remainder (`CARDGATE_MERCHANT_ID` -> `merchant_id`).
    pub fn load(&self) -> Result<HashMap<String, String>> {
        Ok(self.collect(env::vars()))
    }

    fn collect<I>(&self, vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = HashMap::new();

        for (key, value) in vars {
            if let Some(ref prefix) = self.prefix {
                if let Some(rest) = key.strip_prefix(prefix.as_str()) {
                    let trimmed_key = rest.trim_start_matches('_');
                    if !trimmed_key.is_empty() {
                        config.insert(trimmed_key.to_lowercase(), value);
                    }
                }
            } else {
                config.insert(key.to_lowercase(), value);
            }
        }

        config
    }

    /// Name of the variable that backs `key`.
    pub fn full_key(&self, key: &str) -> String {
        if let Some(ref prefix) = self.prefix {
            format!("{}_{}", prefix, key.to_uppercase())
        } else {
            key.to_uppercase()
        }
    }
}

/// Map a dotenv key onto a settings key: strip the `CARDGATE_` prefix if
/// present and lowercase the rest.
pub(crate) fn normalize_key(key: &str) -> String {
    let key = key
        .strip_prefix(DEFAULT_PREFIX)
        .map(|k| k.trim_start_matches('_'))
        .unwrap_or(key);
    key.to_lowercase()
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PREFIX.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // std::env::set_var is unsafe on edition 2024, so prefix handling is
    // exercised through `collect` with synthetic variables.

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_strips_prefix() {
        let loader = EnvLoader::default();
        let map = loader.collect(vars(&[
            ("CARDGATE_MERCHANT_ID", "M1MIPS0000"),
            ("CARDGATE_GATE_URL", "https://gate.example/api/v1.7"),
            ("PATH", "/usr/bin"),
        ]));

        assert_eq!(map.get("merchant_id").map(String::as_str), Some("M1MIPS0000"));
        assert_eq!(
            map.get("gate_url").map(String::as_str),
            Some("https://gate.example/api/v1.7")
        );
        assert!(!map.contains_key("path"));
    }

    #[test]
    fn test_collect_ignores_bare_prefix() {
        let loader = EnvLoader::default();
        let map = loader.collect(vars(&[("CARDGATE", "x"), ("CARDGATE_", "y")]));
        assert!(map.is_empty());
    }

    #[test]
    fn test_collect_without_prefix_keeps_everything() {
        let loader = EnvLoader::new(None);
        let map = loader.collect(vars(&[("FOO", "1"), ("BAR_BAZ", "2")]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("bar_baz").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_full_key() {
        assert_eq!(EnvLoader::default().full_key("gate_url"), "CARDGATE_GATE_URL");
        assert_eq!(EnvLoader::new(None).full_key("gate_url"), "GATE_URL");
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("CARDGATE_MERCHANT_ID"), "merchant_id");
        assert_eq!(normalize_key("GATE_URL"), "gate_url");
    }
}
