//! Boot — logging init, config load, Docker connection, state creation.

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::AgentConfig;
use crate::docker::client::DockerClient;
use crate::labels::watch;
use crate::state::{AgentState, SharedState};

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logtag_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load config, connect to Docker, build shared state, and spawn the label
/// watch task. Returns as soon as the task is spawned; stream failures are
/// the watch task's problem, never the caller's.
pub async fn boot() -> Result<SharedState, Box<dyn std::error::Error>> {
    info!("Starting logtag agent v0.0.1");

    let config = AgentConfig::load()?;
    config.validate()?;
    info!(
        "Loaded configuration: event_window_secs={}, reconnect_backoff_secs={}",
        config.event_window_secs, config.reconnect_backoff_secs
    );

    info!(
        "Connecting to Docker daemon at: {}",
        if config.docker_socket.is_empty() {
            "default socket"
        } else {
            &config.docker_socket
        }
    );

    let docker_client = DockerClient::new(&config.docker_socket).map_err(|e| {
        error!("Failed to connect to Docker: {}", e);
        e
    })?;

    info!("Successfully connected to Docker daemon");

    let state = Arc::new(AgentState::new(docker_client, config));
    tokio::spawn(watch::run(Arc::clone(&state)));
    info!("Label watch task started");

    Ok(state)
}
