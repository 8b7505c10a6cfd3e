//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::AgentConfig;

impl AgentConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("LOGTAG_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/logtag/agent.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Ok(socket) = std::env::var("DOCKER_SOCKET") {
            config.docker_socket = socket;
        }
        if let Some(window) = std::env::var("LOGTAG_EVENT_WINDOW_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.event_window_secs = window;
        }
        if let Some(backoff) = std::env::var("LOGTAG_RECONNECT_BACKOFF_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.reconnect_backoff_secs = backoff;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: AgentConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            docker_socket: std::env::var("DOCKER_SOCKET").unwrap_or_else(|_| "".to_string()),
            event_window_secs: std::env::var("LOGTAG_EVENT_WINDOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            reconnect_backoff_secs: std::env::var("LOGTAG_RECONNECT_BACKOFF_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}
