//! # MSProxy Configuration Module
//!
//! Configuration management for MSProxy facades and tools:
//! - Loading configuration from YAML files
//! - Merging with the embedded default configuration
//! - Environment variable overrides
//! - Typed getters and setters for configuration values
//! - Process-wide singleton access
//!
//! The queue controller itself never reads configuration; facades apply the
//! relevant settings when they are built.
//!
//! ## Usage
//!
//! ```no_run
//! use mspconfig::get_config;
//!
//! let config = get_config();
//! let mode = config.get_play_mode()?;
//! let timeout = config.get_http_timeout_secs()?;
//!
//! config.set_play_mode("SHUFFLE")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_yaml::{Mapping, Number, Value};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{info, warn};

const DEFAULT_CONFIG: &str = include_str!("msproxy.yaml");

lazy_static! {
    static ref CONFIG: Arc<Config> = Arc::new(Config::load_config("").unwrap_or_else(|err| {
        warn!(error = %err, "Failed to load MSProxy configuration, using embedded defaults");
        Config::from_defaults()
    }));
}

const ENV_CONFIG_DIR: &str = "MSPROXY_CONFIG";
const ENV_PREFIX: &str = "MSPROXY_CONFIG__";
const CONFIG_DIR_NAME: &str = ".msproxy";

const DEFAULT_PLAY_MODE: &str = "NORMAL";
const DEFAULT_EXPLICIT_FILTER: &str = "DISALLOW";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;
const DEFAULT_RESOLVE_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_RESOLVE_CACHE_CAPACITY: usize = 1000;
const DEFAULT_LOG_MIN_LEVEL: &str = "INFO";

/// Macro to generate getter/setter for u64 values with default
macro_rules! impl_u64_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<u64> {
            match self.get_value($path).unwrap_or(Value::Null) {
                Value::Number(n) => Ok(n.as_u64().unwrap_or($default)),
                Value::String(s) => Ok(s.trim().parse().unwrap_or($default)),
                _ => Ok($default),
            }
        }

        pub fn $setter(&self, value: u64) -> Result<()> {
            self.set_value($path, Value::Number(Number::from(value)))
        }
    };
}

/// Macro to generate getter/setter for usize values with default
macro_rules! impl_usize_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<usize> {
            match self.get_value($path).unwrap_or(Value::Null) {
                Value::Number(n) => Ok(n.as_u64().map_or($default, |v| v as usize)),
                _ => Ok($default),
            }
        }

        pub fn $setter(&self, size: usize) -> Result<()> {
            self.set_value($path, Value::Number(Number::from(size)))
        }
    };
}

/// Macro to generate getter/setter for string values with default
macro_rules! impl_string_config {
    ($getter:ident, $setter:ident, $path:expr, $default:expr) => {
        pub fn $getter(&self) -> Result<String> {
            match self.get_value($path).unwrap_or(Value::Null) {
                Value::String(s) if !s.trim().is_empty() => Ok(s),
                _ => Ok($default.to_string()),
            }
        }

        pub fn $setter(&self, value: &str) -> Result<()> {
            self.set_value($path, Value::String(value.to_string()))
        }
    };
}

/// Configuration manager for MSProxy
///
/// Holds the merged YAML tree (defaults, user file, environment) and writes
/// it back to `config.yaml` whenever a setter is used.
#[derive(Debug)]
pub struct Config {
    config_dir: String,
    path: String,
    data: Mutex<Value>,
}

impl Clone for Config {
    fn clone(&self) -> Self {
        let data = self.data.lock().unwrap().clone();
        Self {
            config_dir: self.config_dir.clone(),
            path: self.path.clone(),
            data: Mutex::new(data),
        }
    }
}

impl Config {
    /// Finds a config directory by trying different locations in order
    fn find_config_dir(directory: &str) -> String {
        if !directory.is_empty() {
            return directory.to_string();
        }

        if let Ok(env_path) = env::var(ENV_CONFIG_DIR) {
            info!(env_var = ENV_CONFIG_DIR, path = %env_path, "Trying to load config from env");
            return env_path;
        }

        if Path::new(CONFIG_DIR_NAME).exists() {
            return CONFIG_DIR_NAME.to_string();
        }

        if let Some(home) = home_dir() {
            let home_config = home.join(CONFIG_DIR_NAME);
            if home_config.exists() {
                return home_config.to_string_lossy().to_string();
            }
        }

        CONFIG_DIR_NAME.to_string()
    }

    /// Creates the directory if needed and checks it is writable
    fn validate_config_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        if !path.is_dir() {
            return Err(anyhow!("{} is not a directory", path.display()));
        }

        let test_file = path.join(".write_test");
        fs::write(&test_file, b"test")?;
        fs::remove_file(&test_file)?;

        fs::read_dir(path)?;
        Ok(())
    }

    /// Determines and validates the configuration directory
    ///
    /// The directory is searched in the following order:
    /// 1. The provided `directory` parameter if not empty
    /// 2. The `MSPROXY_CONFIG` environment variable
    /// 3. `.msproxy` in the current directory
    /// 4. `.msproxy` in the user's home directory
    ///
    /// The directory is created if it doesn't exist.
    pub fn config_dir(directory: &str) -> Result<String> {
        let dir_path = Self::find_config_dir(directory);
        Self::validate_config_dir(Path::new(&dir_path))?;
        Ok(dir_path)
    }

    /// Loads the configuration from the specified directory
    ///
    /// The embedded defaults are merged with `<dir>/config.yaml` when it
    /// exists, keys are lower-cased, `MSPROXY_CONFIG__*` variables are
    /// applied, and the result is written back to `config.yaml`.
    pub fn load_config(directory: &str) -> Result<Self> {
        let config_dir = Self::config_dir(directory)?;
        info!(config_dir = %config_dir, "Using config directory");

        let path = Path::new(&config_dir)
            .join("config.yaml")
            .to_string_lossy()
            .to_string();

        let mut config_value: Value = serde_yaml::from_str(DEFAULT_CONFIG)?;

        match fs::read(&path) {
            Ok(data) => {
                info!(config_file = %path, "Loaded config file");
                let external: Value = serde_yaml::from_slice(&data)?;
                // An empty file parses as null and must not wipe the defaults.
                if !external.is_null() {
                    merge_yaml(&mut config_value, &lower_keys_value(external));
                }
            }
            Err(_) => {
                info!(config_file = %path, "Config file not found, using default embedded config");
            }
        }

        let mut config_value = lower_keys_value(config_value);
        apply_overrides(&mut config_value, env::vars());

        let config = Config {
            config_dir,
            path,
            data: Mutex::new(config_value),
        };

        config.save()?;
        Ok(config)
    }

    /// In-memory configuration holding the embedded defaults only.
    ///
    /// Nothing is read from or written to disk; setters only update memory.
    pub fn from_defaults() -> Self {
        let data = serde_yaml::from_str(DEFAULT_CONFIG)
            .map(lower_keys_value)
            .unwrap_or_else(|_| Value::Mapping(Mapping::new()));
        Config {
            config_dir: String::new(),
            path: String::new(),
            data: Mutex::new(data),
        }
    }

    /// Directory holding `config.yaml` (empty for in-memory configurations)
    pub fn directory(&self) -> &str {
        &self.config_dir
    }

    /// Saves the current configuration to the config.yaml file
    pub fn save(&self) -> Result<()> {
        if self.path.is_empty() {
            return Ok(());
        }
        let data = self.data.lock().unwrap();
        let yaml = serde_yaml::to_string(&*data)?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Sets a configuration value at the specified path and saves it
    ///
    /// # Arguments
    ///
    /// * `path` - Array of keys representing the path (e.g., `&["queue", "play_mode"]`)
    /// * `value` - The YAML value to set
    pub fn set_value(&self, path: &[&str], value: Value) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        set_value_internal(&mut data, path, value)?;
        drop(data);
        self.save()
    }

    /// Gets a configuration value at the specified path
    ///
    /// Returns an error if the path doesn't exist.
    pub fn get_value(&self, path: &[&str]) -> Result<Value> {
        let data = self.data.lock().unwrap();
        get_value_internal(&data, path)
    }

    impl_string_config!(
        get_play_mode,
        set_play_mode,
        &["queue", "play_mode"],
        DEFAULT_PLAY_MODE
    );

    impl_string_config!(
        get_explicit_filter,
        set_explicit_filter,
        &["queue", "explicit_filter"],
        DEFAULT_EXPLICIT_FILTER
    );

    impl_u64_config!(
        get_http_timeout_secs,
        set_http_timeout_secs,
        &["http", "timeout_secs"],
        DEFAULT_HTTP_TIMEOUT_SECS
    );

    impl_u64_config!(
        get_resolve_cache_ttl_secs,
        set_resolve_cache_ttl_secs,
        &["resolve_cache", "ttl_secs"],
        DEFAULT_RESOLVE_CACHE_TTL_SECS
    );

    impl_usize_config!(
        get_resolve_cache_capacity,
        set_resolve_cache_capacity,
        &["resolve_cache", "capacity"],
        DEFAULT_RESOLVE_CACHE_CAPACITY
    );

    impl_string_config!(
        get_log_min_level,
        set_log_min_level,
        &["log", "min_level"],
        DEFAULT_LOG_MIN_LEVEL
    );

    /// Path of the catalog file, if one is configured
    ///
    /// Relative paths are resolved against the configuration directory.
    pub fn get_catalog_path(&self) -> Result<Option<PathBuf>> {
        match self.get_value(&["catalog", "path"]) {
            Ok(Value::String(s)) if !s.trim().is_empty() => {
                let path = Path::new(s.trim());
                if path.is_absolute() || self.config_dir.is_empty() {
                    Ok(Some(path.to_path_buf()))
                } else {
                    Ok(Some(Path::new(&self.config_dir).join(path)))
                }
            }
            _ => Ok(None),
        }
    }

    pub fn set_catalog_path(&self, path: &str) -> Result<()> {
        self.set_value(&["catalog", "path"], Value::String(path.to_string()))
    }

    /// Reads a provider-specific setting (`providers.<provider>.<key>`)
    ///
    /// Scalars are returned in their textual form; a missing key is `None`.
    pub fn get_provider_setting(&self, provider: &str, key: &str) -> Result<Option<String>> {
        match self.get_value(&["providers", provider, key]) {
            Ok(Value::String(s)) => Ok(Some(s)),
            Ok(Value::Number(n)) => Ok(Some(n.to_string())),
            Ok(Value::Bool(b)) => Ok(Some(b.to_string())),
            Ok(Value::Null) | Err(_) => Ok(None),
            Ok(other) => Err(anyhow!(
                "providers.{provider}.{key} is not a scalar: {other:?}"
            )),
        }
    }

    pub fn set_provider_setting(&self, provider: &str, key: &str, value: &str) -> Result<()> {
        self.set_value(&["providers", provider, key], Value::String(value.to_string()))
    }
}

/// Returns the global configuration instance
///
/// Loaded lazily on first access. When the configuration directory cannot
/// be used, the embedded defaults are served from memory.
pub fn get_config() -> Arc<Config> {
    CONFIG.clone()
}

fn set_value_internal(data: &mut Value, path: &[&str], value: Value) -> Result<()> {
    if path.is_empty() {
        *data = value;
        return Ok(());
    }
    // An empty section in a user file (`providers:`) parses as null.
    if data.is_null() {
        *data = Value::Mapping(Mapping::new());
    }
    if let Value::Mapping(map) = data {
        let key = Value::String(path[0].to_lowercase());
        if path.len() == 1 {
            map.insert(key, value);
        } else {
            let entry = map.entry(key).or_insert(Value::Mapping(Mapping::new()));
            set_value_internal(entry, &path[1..], value)?;
        }
        Ok(())
    } else {
        Err(anyhow!("Current node is not a map"))
    }
}

fn get_value_internal(data: &Value, path: &[&str]) -> Result<Value> {
    let mut current = data;
    for (i, key) in path.iter().enumerate() {
        if let Value::Mapping(map) = current {
            match map.get(&Value::String(key.to_lowercase())) {
                Some(next) => current = next,
                None => return Err(anyhow!("Path {} does not exist", path[..=i].join("."))),
            }
        } else {
            return Err(anyhow!("Path {} is not a map", path[..i].join(".")));
        }
    }
    Ok(current.clone())
}

/// Applies `MSPROXY_CONFIG__SECTION__KEY=value` pairs to the tree
fn apply_overrides(config: &mut Value, vars: impl IntoIterator<Item = (String, String)>) {
    for (key, value) in vars {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let key_path = rest
            .split("__")
            .map(str::to_lowercase)
            .collect::<Vec<_>>();
        let key_path = key_path.iter().map(String::as_str).collect::<Vec<_>>();
        if let Err(err) = set_value_internal(config, &key_path, convert_env_value(&value)) {
            warn!(variable = %key, error = %err, "Ignoring configuration override");
        }
    }
}

fn convert_env_value(value: &str) -> Value {
    serde_yaml::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

fn lower_keys_value(value: Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut new_map = Mapping::new();
            for (k, v) in map {
                let k = match k {
                    Value::String(s) => Value::String(s.to_lowercase()),
                    other => other,
                };
                new_map.insert(k, lower_keys_value(v));
            }
            Value::Mapping(new_map)
        }
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(lower_keys_value).collect()),
        _ => value,
    }
}

/// Merges external YAML configuration into default configuration
///
/// Mappings are merged key by key; scalars and sequences from `external`
/// replace the default ones.
fn merge_yaml(default: &mut Value, external: &Value) {
    match (default, external) {
        (Value::Mapping(dmap), Value::Mapping(emap)) => {
            for (k, v) in emap {
                match dmap.get_mut(k) {
                    Some(dv) => merge_yaml(dv, v),
                    None => {
                        dmap.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (d, e) => *d = e.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_are_served_from_memory() {
        let config = Config::from_defaults();
        assert_eq!(config.get_play_mode().unwrap(), "NORMAL");
        assert_eq!(config.get_explicit_filter().unwrap(), "DISALLOW");
        assert_eq!(config.get_http_timeout_secs().unwrap(), 5);
        assert_eq!(config.get_resolve_cache_ttl_secs().unwrap(), 300);
        assert_eq!(config.get_resolve_cache_capacity().unwrap(), 1000);
        assert_eq!(config.get_log_min_level().unwrap(), "INFO");
        assert_eq!(config.get_catalog_path().unwrap(), None);
        assert_eq!(config.get_provider_setting("spotify", "market").unwrap(), None);
    }

    #[test]
    fn env_overrides_follow_the_double_underscore_path() {
        let mut tree: Value = serde_yaml::from_str(DEFAULT_CONFIG).unwrap();
        apply_overrides(
            &mut tree,
            vars(&[
                ("MSPROXY_CONFIG__QUEUE__PLAY_MODE", "SHUFFLE"),
                ("MSPROXY_CONFIG__HTTP__TIMEOUT_SECS", "12"),
                ("MSPROXY_CONFIG__PROVIDERS__SPOTIFY__MARKET", "FR"),
                ("HOME", "/root"),
            ]),
        );

        assert_eq!(
            get_value_internal(&tree, &["queue", "play_mode"]).unwrap(),
            Value::String("SHUFFLE".into())
        );
        assert_eq!(
            get_value_internal(&tree, &["http", "timeout_secs"]).unwrap(),
            Value::Number(12.into())
        );
        assert_eq!(
            get_value_internal(&tree, &["providers", "spotify", "market"]).unwrap(),
            Value::String("FR".into())
        );
        assert!(get_value_internal(&tree, &["home"]).is_err());
    }

    #[test]
    fn merge_keeps_unspecified_defaults() {
        let mut tree: Value = serde_yaml::from_str(DEFAULT_CONFIG).unwrap();
        let user: Value = serde_yaml::from_str("queue:\n  play_mode: SHUFFLE\n").unwrap();
        merge_yaml(&mut tree, &user);

        assert_eq!(
            get_value_internal(&tree, &["queue", "play_mode"]).unwrap(),
            Value::String("SHUFFLE".into())
        );
        assert_eq!(
            get_value_internal(&tree, &["queue", "explicit_filter"]).unwrap(),
            Value::String("DISALLOW".into())
        );
    }

    #[test]
    fn keys_are_lower_cased() {
        let tree: Value = serde_yaml::from_str("Queue:\n  Play_Mode: SHUFFLE\n").unwrap();
        let tree = lower_keys_value(tree);
        assert!(get_value_internal(&tree, &["queue", "play_mode"]).is_ok());
    }

    #[test]
    fn mixed_case_user_keys_merge_into_default_sections() {
        let mut tree = lower_keys_value(serde_yaml::from_str(DEFAULT_CONFIG).unwrap());
        let user: Value = serde_yaml::from_str("Queue:\n  Play_Mode: SHUFFLE\n").unwrap();
        merge_yaml(&mut tree, &lower_keys_value(user));

        assert_eq!(
            get_value_internal(&tree, &["queue", "play_mode"]).unwrap(),
            Value::String("SHUFFLE".into())
        );
        assert_eq!(
            get_value_internal(&tree, &["queue", "explicit_filter"]).unwrap(),
            Value::String("DISALLOW".into())
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::from_defaults();
        config.set_value(&["queue"], Value::Null).unwrap();
        config.set_value(&["http"], Value::Null).unwrap();
        config.set_value(&["resolve_cache"], Value::Null).unwrap();

        assert_eq!(config.get_play_mode().unwrap(), "NORMAL");
        assert_eq!(config.get_explicit_filter().unwrap(), "DISALLOW");
        assert_eq!(config.get_http_timeout_secs().unwrap(), 5);
        assert_eq!(config.get_resolve_cache_capacity().unwrap(), 1000);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = Config::from_defaults();
        config
            .set_value(&["http", "timeout_secs"], Value::String("soon".into()))
            .unwrap();
        assert_eq!(config.get_http_timeout_secs().unwrap(), 5);

        config.set_http_timeout_secs(9).unwrap();
        assert_eq!(config.get_http_timeout_secs().unwrap(), 9);
    }
}
