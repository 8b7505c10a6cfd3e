//! Inventory — the container facts bootstrap needs from the list API.

use bollard::models::ContainerSummary;
use std::collections::HashMap;

/// Basic container information derived from Docker's list API.
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    pub id: String,
    pub image: String,
    pub labels: HashMap<String, String>,
}

impl From<ContainerSummary> for ContainerInfo {
    fn from(s: ContainerSummary) -> Self {
        Self {
            id: s.id.unwrap_or_default(),
            image: s.image.unwrap_or_default(),
            labels: s.labels.unwrap_or_default(),
        }
    }
}
