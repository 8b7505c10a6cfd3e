//! Model — AgentConfig.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub docker_socket: String,
    /// How far back (seconds) the event subscription starts, covering the
    /// gap while bootstrap enumeration runs.
    pub event_window_secs: i64,
    pub reconnect_backoff_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            docker_socket: "".to_string(),
            event_window_secs: 60,
            reconnect_backoff_secs: 5,
        }
    }
}

impl AgentConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.event_window_secs < 0 {
            return Err("event_window_secs must be >= 0".to_string());
        }
        if self.reconnect_backoff_secs == 0 {
            return Err("reconnect_backoff_secs must be > 0".to_string());
        }
        Ok(())
    }
}
