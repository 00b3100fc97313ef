/// Service configuration loader - parses service.toml with environment
/// overrides.
///
/// Keeps deployment knobs (bind address, port, seed file location, worker
/// count) out of the code. The file is optional: a missing service.toml
/// just means defaults, but a malformed one aborts startup rather than
/// silently serving with settings nobody asked for.
///
/// Precedence, lowest to highest:
///   built-in defaults < service.toml < HINDEX_* environment variables

use serde::Deserialize;
use std::env;
use std::fs;

/// Default configuration file, looked up in the current working directory.
pub const CONFIG_PATH: &str = "service.toml";

// ---------------------------------------------------------------------------
// Configuration model
// ---------------------------------------------------------------------------

/// Runtime settings for the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Interface the HTTP endpoint binds to.
    pub bind_address: String,
    /// TCP port for the HTTP endpoint.
    pub port: u16,
    /// Path to the JSON seed file loaded at startup.
    pub seed_path: String,
    /// Worker threads serving queries. Must be at least 1.
    pub workers: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            seed_path: "happiness-index-seed-data.json".to_string(),
            workers: 4,
        }
    }
}

/// TOML shape: every key optional under a single [service] table.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    service: Option<ServiceTable>,
}

#[derive(Debug, Deserialize)]
struct ServiceTable {
    bind_address: Option<String>,
    port: Option<u16>,
    seed_path: Option<String>,
    workers: Option<usize>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file exists but does not parse.
    ParseFailed(String, String),
    /// A setting holds a value of the wrong shape.
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ParseFailed(path, detail) => {
                write!(
                    f,
                    "Failed to parse {}: {}\n\n  \
                     Fix the file, or remove it to fall back to the built-in defaults.",
                    path, detail
                )
            }
            ConfigError::InvalidValue {
                name,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value for {}: \"{}\" (expected {})",
                    name, value, expected
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads service configuration from service.toml in the working directory,
/// then applies HINDEX_* environment overrides (a local .env is honored).
pub fn load_config() -> Result<ServiceConfig, ConfigError> {
    let mut config = load_config_file(CONFIG_PATH)?;
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Reads one configuration file over the defaults. A missing file is not
/// an error. Split out from [`load_config`] so tests can parse files
/// without touching the working directory or the environment.
pub fn load_config_file(path: &str) -> Result<ServiceConfig, ConfigError> {
    let mut config = ServiceConfig::default();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Ok(config),
    };

    let file: ConfigFile = toml::from_str(&contents)
        .map_err(|e| ConfigError::ParseFailed(path.to_string(), e.to_string()))?;

    if let Some(table) = file.service {
        if let Some(bind_address) = table.bind_address {
            config.bind_address = bind_address;
        }
        if let Some(port) = table.port {
            config.port = port;
        }
        if let Some(seed_path) = table.seed_path {
            config.seed_path = seed_path;
        }
        if let Some(workers) = table.workers {
            config.workers = workers;
        }
    }

    Ok(config)
}

/// Applies HINDEX_* environment variables on top of `config`.
fn apply_env_overrides(config: &mut ServiceConfig) -> Result<(), ConfigError> {
    // Pull in a local .env if present, same as the rest of the tooling.
    dotenv::dotenv().ok();

    if let Ok(bind_address) = env::var("HINDEX_BIND_ADDRESS") {
        config.bind_address = bind_address;
    }
    if let Ok(raw) = env::var("HINDEX_PORT") {
        match raw.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(_) => {
                return Err(ConfigError::InvalidValue {
                    name: "HINDEX_PORT",
                    value: raw,
                    expected: "a TCP port number",
                });
            }
        }
    }
    if let Ok(seed_path) = env::var("HINDEX_SEED_PATH") {
        config.seed_path = seed_path;
    }
    if let Ok(raw) = env::var("HINDEX_WORKERS") {
        match raw.parse::<usize>() {
            Ok(workers) => config.workers = workers,
            Err(_) => {
                return Err(ConfigError::InvalidValue {
                    name: "HINDEX_WORKERS",
                    value: raw,
                    expected: "a positive worker count",
                });
            }
        }
    }

    Ok(())
}

/// Cross-field checks that hold no matter where a value came from.
fn validate(config: &ServiceConfig) -> Result<(), ConfigError> {
    // The worker pool panics on zero threads; catch it at config time.
    if config.workers == 0 {
        return Err(ConfigError::InvalidValue {
            name: "workers",
            value: "0".to_string(),
            expected: "a positive worker count",
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Writes `contents` to a uniquely named file under the system temp
    /// directory and returns its path.
    fn write_temp_config(label: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "hindex_config_{}_{}.toml",
            label,
            std::process::id()
        ));
        fs::write(&path, contents).expect("temp config should be writable");
        path
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.seed_path, "happiness-index-seed-data.json");
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config_file("/nonexistent/service.toml")
            .expect("a missing file is not an error");
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_shipped_config_parses() {
        // cargo test runs with the project root as the working directory,
        // where the checked-in service.toml lives.
        let config = load_config_file(CONFIG_PATH).expect("shipped service.toml should parse");
        assert_eq!(config.port, 5000);
        assert_eq!(config.seed_path, "happiness-index-seed-data.json");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let path = write_temp_config(
            "overrides",
            r#"
            [service]
            port = 8080
            seed_path = "data/custom-seed.json"
            "#,
        );

        let config =
            load_config_file(path.to_str().expect("temp path is UTF-8")).expect("should parse");

        assert_eq!(config.port, 8080);
        assert_eq!(config.seed_path, "data/custom-seed.json");
        // Untouched keys keep their defaults.
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.workers, 4);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_empty_file_means_defaults() {
        let path = write_temp_config("empty", "");
        let config =
            load_config_file(path.to_str().expect("temp path is UTF-8")).expect("should parse");
        assert_eq!(config, ServiceConfig::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = write_temp_config("malformed", "[service\nport = not a number");
        let result = load_config_file(path.to_str().expect("temp path is UTF-8"));

        match result {
            Err(ConfigError::ParseFailed(reported_path, _)) => {
                assert!(
                    reported_path.contains("hindex_config_malformed"),
                    "error should name the offending file, got {}",
                    reported_path
                );
            }
            other => panic!("expected ParseFailed, got {:?}", other),
        }

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let config = ServiceConfig {
            workers: 0,
            ..ServiceConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidValue { name: "workers", .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_setting() {
        let error = ConfigError::InvalidValue {
            name: "HINDEX_PORT",
            value: "not-a-port".to_string(),
            expected: "a TCP port number",
        };
        let message = error.to_string();
        assert!(message.contains("HINDEX_PORT"));
        assert!(message.contains("not-a-port"));
    }
}
