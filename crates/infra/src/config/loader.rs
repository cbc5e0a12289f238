//! Configuration loader
//!
//! Loads application configuration from environment variables and files.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file (JSON or TOML)
//! 2. Fall back to built-in defaults when no file exists
//! 3. Apply environment variables on top; they always win
//!
//! ## Environment Variables
//! - `CHRONEY_UTC_OFFSET`: Fixed reference offset (`-07:00`, `+0530`, `Z`)
//! - `CHRONEY_TEXT_ONLY`: Default output mode is text (true/false)
//! - `CHRONEY_LOG_LEVEL`: Default `EnvFilter` directive
//! - `CHRONEY_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./chroney.json` or `./chroney.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../` and `../../` variants of the above
//! 4. The same names relative to the executable location

use std::path::{Path, PathBuf};

use chroney_common::{CommonError, ReferenceOffset};
use chroney_domain::constants::{ENV_LOG_JSON, ENV_LOG_LEVEL, ENV_TEXT_ONLY, ENV_UTC_OFFSET};
use chroney_domain::{Config, Result};

const CONFIG_FILE_NAMES: &[&str] = &["chroney.json", "chroney.toml", "config.json", "config.toml"];
const PROBE_DIRS: &[&str] = &[".", "..", "../.."];

/// Load configuration with automatic fallback strategy
///
/// Starts from the first config file found by [`probe_config_paths`] (or
/// defaults if there is none) and applies environment overrides on top.
///
/// # Errors
/// Returns `ChroneyError::Config` if:
/// - A config file exists but cannot be read or parsed
/// - An environment variable has an invalid value
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    tracing::info!(utc_offset = %config.reference.utc_offset, "Configuration loaded");
    Ok(config)
}

/// Load a `.env` file into the process environment, if one exists
///
/// Variables already set in the environment are left untouched.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Loaded .env");
            Some(path)
        }
        Err(e) => {
            tracing::debug!(error = %e, "No .env file loaded");
            None
        }
    }
}

/// Load configuration from environment variables alone
///
/// Unset variables keep their default values.
///
/// # Errors
/// Returns `ChroneyError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overwrite fields of `config` with any `CHRONEY_*` variables that are set
///
/// # Errors
/// Returns `ChroneyError::Config` if `CHRONEY_UTC_OFFSET` is not a fixed
/// offset.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(raw) = env_var(ENV_UTC_OFFSET) {
        config.reference.utc_offset = raw
            .parse::<ReferenceOffset>()
            .map_err(|e| CommonError::config_field(ENV_UTC_OFFSET, e.to_string()))?;
    }

    config.projection.default_text_only =
        env_bool(ENV_TEXT_ONLY, config.projection.default_text_only);

    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `ChroneyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(
                    CommonError::config(format!("Config file not found: {}", p.display())).into()
                );
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CommonError::config("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CommonError::config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`). Missing
/// sections and fields take their default values.
///
/// # Errors
/// Returns `ChroneyError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let parsed = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CommonError::config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CommonError::config(format!("Invalid JSON format: {e}"))),
        _ => Err(CommonError::config(format!("Unsupported config format: {extension}"))),
    };
    Ok(parsed?)
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory and its two parents, then the
/// executable's directory and its two parents.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let roots = [
        std::env::current_dir().ok(),
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)),
    ];

    roots
        .into_iter()
        .flatten()
        .flat_map(|root| {
            PROBE_DIRS.iter().flat_map(move |dir| {
                let base = root.join(dir);
                CONFIG_FILE_NAMES.iter().map(move |name| base.join(name))
            })
        })
        .find(|path| path.exists())
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    env_var(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chroney_domain::ChroneyError;
    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 4] = [ENV_UTC_OFFSET, ENV_TEXT_ONLY, ENV_LOG_LEVEL, ENV_LOG_JSON];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for value in ["1", "true", "yes", "on", "TRUE"] {
            std::env::set_var("CHRONEY_TEST_BOOL", value);
            assert!(env_bool("CHRONEY_TEST_BOOL", false), "{value}");
        }
        for value in ["0", "false", "no", "off"] {
            std::env::set_var("CHRONEY_TEST_BOOL", value);
            assert!(!env_bool("CHRONEY_TEST_BOOL", true), "{value}");
        }

        // Blank counts as unset
        std::env::set_var("CHRONEY_TEST_BOOL", "  ");
        assert!(env_bool("CHRONEY_TEST_BOOL", true));

        std::env::remove_var("CHRONEY_TEST_BOOL");
        assert!(env_bool("CHRONEY_TEST_BOOL", true));
        assert!(!env_bool("CHRONEY_TEST_BOOL", false));
    }

    #[test]
    fn test_load_from_env_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_UTC_OFFSET, "+05:30");
        std::env::set_var(ENV_TEXT_ONLY, "false");
        std::env::set_var(ENV_LOG_LEVEL, "chroney_core=debug");
        std::env::set_var(ENV_LOG_JSON, "yes");

        let config = load_from_env().unwrap();
        assert_eq!(config.reference.utc_offset.seconds_east(), 19_800);
        assert!(!config.projection.default_text_only);
        assert_eq!(config.logging.level, "chroney_core=debug");
        assert!(config.logging.json);

        clear_env();
    }

    #[test]
    fn test_invalid_offset_is_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_UTC_OFFSET, "America/Phoenix");
        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ChroneyError::Config(ref msg) if msg.contains(ENV_UTC_OFFSET)));

        clear_env();
    }

    #[test]
    fn test_parse_config_by_extension() {
        let json = r#"{"reference": {"utc_offset": "Z"}}"#;
        let config = parse_config(json, Path::new("chroney.json")).unwrap();
        assert_eq!(config.reference.utc_offset, ReferenceOffset::utc());

        let toml = "[logging]\nlevel = \"warn\"\n";
        let config = parse_config(toml, Path::new("chroney.toml")).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.reference.utc_offset, ReferenceOffset::default());

        let err = parse_config("", Path::new("chroney.yaml")).unwrap_err();
        assert!(matches!(err, ChroneyError::Config(_)));
    }

    #[test]
    fn test_parse_config_invalid_json() {
        let err = parse_config(r#"{ "this is": "not valid json" "#, Path::new("c.json"));
        assert!(matches!(err, Err(ChroneyError::Config(ref msg)) if msg.contains("Invalid JSON")));
    }

    #[test]
    fn test_config_errors_carry_common_wording() {
        let err = parse_config("", Path::new("chroney.yaml")).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Unsupported config format: yaml");

        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        std::env::set_var(ENV_UTC_OFFSET, "+25:00");
        let err = load_from_env().unwrap_err();
        clear_env();

        assert!(err.to_string().starts_with(&format!("Configuration error: {ENV_UTC_OFFSET}: ")));
    }
}
