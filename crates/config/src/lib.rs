use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API_PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid STORE_BACKEND '{0}', expected 'file' or 'memory'")]
    InvalidBackend(String),
}

/// Where records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// The JSON data file at `Config::data_file`.
    #[default]
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::InvalidBackend(value.to_string())),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::File => write!(f, "file"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: String,
    pub api_host: String,
    pub api_port: u16,
    pub store_backend: StoreBackend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: "data.json".to_string(),
            api_host: "0.0.0.0".to_string(),
            api_port: 5000,
            store_backend: StoreBackend::File,
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file first
    /// if one exists. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_port = match lookup("API_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            None => defaults.api_port,
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(backend) => backend.parse()?,
            None => defaults.store_backend,
        };

        Ok(Config {
            data_file: lookup("DATA_FILE").unwrap_or(defaults.data_file),
            api_host: lookup("API_HOST").unwrap_or(defaults.api_host),
            api_port,
            store_backend,
        })
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_all_interfaces_port_5000() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_address(), "0.0.0.0:5000");
        assert_eq!(config.data_file, "data.json");
        assert_eq!(config.store_backend, StoreBackend::File);
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATA_FILE", "/tmp/hbnb.json"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "8080"),
            ("STORE_BACKEND", "Memory"),
        ]))
        .unwrap();

        assert_eq!(config.data_file, "/tmp/hbnb.json");
        assert_eq!(config.api_address(), "127.0.0.1:8080");
        assert_eq!(config.store_backend, StoreBackend::Memory);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("API_PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let err = Config::from_lookup(lookup(&[("STORE_BACKEND", "redis")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBackend("redis".to_string()));
    }

    #[test]
    fn only_file_and_memory_backends_are_accepted() {
        assert_eq!("FILE".parse::<StoreBackend>(), Ok(StoreBackend::File));
        assert_eq!("memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        for rejected in ["json", "in-memory", ""] {
            assert_eq!(
                rejected.parse::<StoreBackend>(),
                Err(ConfigError::InvalidBackend(rejected.to_string()))
            );
        }
    }
}
