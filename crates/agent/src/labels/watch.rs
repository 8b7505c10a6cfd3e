//! Watch task — bootstrap reconciliation plus the live event subscription.
//!
//! Bootstrap and the event loop run sequentially on one task, so every
//! store mutation is serialized; `resolve` reads concurrently through the
//! store's own sharding.

use futures_util::stream::StreamExt;
use tracing::{info, warn};

use super::event::{self, LabelEvent};
use crate::docker::inventory::ContainerInfo;
use crate::state::SharedState;

/// Unix-seconds start of the subscription window. Computed before
/// bootstrap so events racing the enumeration are replayed; replay is safe
/// because merges and evicts are idempotent.
fn window_start(window_secs: i64) -> i64 {
    chrono::Utc::now().timestamp() - window_secs
}

/// Synthesize the create event bootstrap feeds through the interpreter,
/// folding the image reference in as an `image` attribute when the labels
/// do not already carry one.
fn seed_event(container: ContainerInfo) -> Option<LabelEvent> {
    if container.id.is_empty() {
        return None;
    }
    let mut attributes = container.labels;
    if !container.image.is_empty() {
        attributes
            .entry("image".to_string())
            .or_insert(container.image);
    }
    Some(LabelEvent::create(container.id, attributes))
}

/// Seed the store from the currently-running containers. Failure leaves
/// the store cold; the live subscription still starts.
async fn bootstrap(state: &SharedState) {
    match state.docker.list_containers().await {
        Ok(containers) => {
            let listed = containers.len();
            for container in containers {
                if let Some(seed) = seed_event(container) {
                    event::apply(&state.labels, &seed);
                }
            }
            info!(
                containers = listed,
                groups = state.labels.group_count(),
                "Bootstrap reconciliation complete"
            );
        }
        Err(e) => warn!("Container enumeration failed, store starts cold: {}", e),
    }
}

/// Run bootstrap once, then consume the engine event stream indefinitely,
/// resubscribing with backoff when the transport drops. Never fatal to the
/// host process.
pub async fn run(state: SharedState) {
    let window = state.config.event_window_secs;
    let mut since = window_start(window);

    bootstrap(&state).await;

    loop {
        let stream = state.docker.stream_container_events(since);
        futures_util::pin_mut!(stream);

        while let Some(item) = stream.next().await {
            match item {
                Ok(msg) => {
                    let ev = LabelEvent::from(msg);
                    event::apply(&state.labels, &ev);
                }
                // One bad payload is dropped; the stream continues.
                Err(e) => warn!("Dropping undecodable engine event: {}", e),
            }
        }

        warn!(
            backoff_secs = state.config.reconnect_backoff_secs,
            "Engine event stream ended, resubscribing"
        );
        tokio::time::sleep(std::time::Duration::from_secs(
            state.config.reconnect_backoff_secs,
        ))
        .await;
        since = window_start(window);
    }
}
