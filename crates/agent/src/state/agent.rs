//! Agent state — AgentState struct, shared state type alias.

use std::sync::Arc;

use crate::conf::AgentConfig;
use crate::docker::client::DockerClient;
use crate::labels::LabelStore;

pub struct AgentState {
    pub docker: DockerClient,
    pub config: AgentConfig,
    /// The label-correlation store, written by the watch task and read by
    /// the per-log-line resolve path.
    pub labels: LabelStore,
}

impl AgentState {
    pub fn new(docker: DockerClient, config: AgentConfig) -> Self {
        Self {
            docker,
            config,
            labels: LabelStore::new(),
        }
    }
}

pub type SharedState = Arc<AgentState>;
