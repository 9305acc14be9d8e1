//! Layered settings loading for cardgate.
//!
//! Gateway settings are merged from up to four layers, later layers winning:
//!
//! 1. a configuration file (`.toml`, `.json` or `.env`, picked by extension)
//! 2. a dotenv file read through `dotenvy`
//! 3. process environment variables carrying the `CARDGATE_` prefix
//! 4. explicit overrides set on the loader
//!
//! ```no_run
//! use cardgate_config::SettingsLoader;
//!
//! let settings = SettingsLoader::new()
//!     .file("cardgate.toml")
//!     .default_dotenv()
//!     .load()?;
//! # Ok::<(), cardgate_config::ConfigError>(())
//! ```

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use settings::GatewaySettings;
pub use validation::{ConfigValidator, Validate};

use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
enum DotenvSource {
    #[default]
    Disabled,
    /// `.env` in the working directory or a parent; absence is not an error
    Discover,
    Path(PathBuf),
}

/// Builder that merges settings layers into a [`GatewaySettings`].
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    dotenv: DotenvSource,
    env_prefix: Option<String>,
    overrides: Map<String, Value>,
}

impl SettingsLoader {
    /// Create a loader reading `CARDGATE_*` environment variables only
    pub fn new() -> Self {
        Self {
            file: None,
            dotenv: DotenvSource::Disabled,
            env_prefix: Some(env::DEFAULT_PREFIX.to_string()),
            overrides: Map::new(),
        }
    }

    /// Read a configuration file as the base layer
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Read the given dotenv file
    pub fn dotenv_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv = DotenvSource::Path(path.into());
        self
    }

    /// Look for a `.env` file the way `dotenvy::dotenv` does
    pub fn default_dotenv(mut self) -> Self {
        self.dotenv = DotenvSource::Discover;
        self
    }

    /// Change the environment variable prefix
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Skip the process environment layer
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Set a value that overrides every other layer
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.overrides
            .insert(key.to_lowercase(), Value::String(value.into()));
        self
    }

    /// Merge all layers without resolving key files or validating
    pub fn load_raw(&self) -> Result<GatewaySettings> {
        let mut merged = Map::new();

        if let Some(ref path) = self.file {
            let loader = ConfigLoader::auto(path)?;
            if let Value::Object(map) = loader.load_file(path)? {
                merged.extend(map);
            }
        }

        for (key, value) in self.dotenv_entries()? {
            merged.insert(key, Value::String(value));
        }

        if let Some(ref prefix) = self.env_prefix {
            let vars = EnvLoader::new(Some(prefix.clone())).load()?;
            for (key, value) in vars {
                merged.insert(key, Value::String(value));
            }
        }

        merged.extend(self.overrides.clone());

        serde_json::from_value(Value::Object(merged))
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Merge all layers, read PEM files and validate the result
    pub fn load(&self) -> Result<GatewaySettings> {
        let mut settings = self.load_raw()?;
        settings.resolve_keys()?;
        settings.validate()?;
        Ok(settings)
    }

    fn dotenv_entries(&self) -> Result<Vec<(String, String)>> {
        let iter = match self.dotenv {
            DotenvSource::Disabled => return Ok(Vec::new()),
            DotenvSource::Discover => match dotenvy::dotenv_iter() {
                Ok(iter) => iter,
                Err(e) if e.not_found() => return Ok(Vec::new()),
                Err(e) => return Err(ConfigError::LoadError(e.to_string())),
            },
            DotenvSource::Path(ref path) => dotenvy::from_path_iter(path)
                .map_err(|e| ConfigError::LoadError(e.to_string()))?,
        };

        let mut entries = Vec::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::ParseError(e.to_string()))?;
            entries.push((env::normalize_key(&key), value));
        }
        Ok(entries)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
