/// Server configuration
use crate::error::{Result, ServerError};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_cors")]
    pub cors: CorsSettings,

    #[serde(default = "default_realtime")]
    pub realtime: RealtimeSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    /// The single origin allowed to call the API
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RealtimeSettings {
    /// Signals buffered per client before a slow client starts skipping
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to [`DEFAULT_CONFIG_FILE`]; a missing default file is
    /// skipped, a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. KIOSK_SERVER__PORT=5001
        settings = settings.add_source(
            config::Environment::with_prefix("KIOSK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set KIOSK_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        self.cors.origin_header()?;

        if self.realtime.channel_capacity == 0 {
            return Err(ServerError::Config(
                "Realtime channel capacity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl CorsSettings {
    /// The allowed origin as a header value
    pub fn origin_header(&self) -> Result<HeaderValue> {
        let origin = self.allowed_origin.trim();
        if origin.is_empty() {
            return Err(ServerError::Config("CORS origin is required".to_string()));
        }

        HeaderValue::from_str(origin)
            .map_err(|e| ServerError::Config(format!("Invalid CORS origin {:?}: {}", origin, e)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./users.db".to_string()
}

fn default_cors() -> CorsSettings {
    CorsSettings {
        allowed_origin: default_allowed_origin(),
    }
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_realtime() -> RealtimeSettings {
    RealtimeSettings {
        channel_capacity: default_channel_capacity(),
    }
}

fn default_channel_capacity() -> usize {
    64
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            cors: default_cors(),
            realtime: default_realtime(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.storage.database_url, "sqlite://./users.db");
        assert_eq!(config.cors.allowed_origin, "http://localhost:5173");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_fills_missing_sections() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 6000\n\n[cors]\nallowed_origin = \"https://kiosk.example\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origin, "https://kiosk.example");
        assert_eq!(config.storage.database_url, "sqlite://./users.db");
        assert_eq!(config.realtime.channel_capacity, 64);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = ServerConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_origin() {
        let mut config = ServerConfig::default();
        config.cors.allowed_origin = "http://bad\norigin".to_string();
        assert!(config.validate().is_err());

        config.cors.allowed_origin = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut config = ServerConfig::default();
        config.realtime.channel_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_database_url() {
        let mut config = ServerConfig::default();
        config.storage.database_url = String::new();
        assert!(config.validate().is_err());
    }
}
