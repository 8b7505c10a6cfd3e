//! Correlation store — container→group links and group→label-set tables.
//!
//! Container ids and group ids share a value space (a sandbox's group id is
//! its own container id) but are distinct entities, so they get distinct
//! key types and physically separate tables.

use dashmap::DashMap;
use std::collections::HashMap;

use super::filter::image_tag;

/// Identifier of a single runtime-managed instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(pub String);

/// Identifier of the sandbox grouping that owns one or more containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(pub String);

pub type LabelSet = HashMap<String, String>;

/// Two tables: which group a container belongs to, and the label set
/// accumulated for each group. Mutations arrive from the single watch
/// task; `resolve` is called from arbitrary callers on the log hot path,
/// so lookups must stay cheap and never block behind a store-wide lock.
#[derive(Debug, Default)]
pub struct LabelStore {
    links: DashMap<ContainerId, GroupId>,
    groups: DashMap<GroupId, LabelSet>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge filtered labels into a group. Keys already present are never
    /// overwritten — a container's declared metadata does not change after
    /// creation. An empty `filtered` does not create an empty entry.
    pub fn merge(&self, group: GroupId, filtered: LabelSet) {
        if filtered.is_empty() && !self.groups.contains_key(&group) {
            return;
        }
        let mut labels = self.groups.entry(group).or_default();
        for (key, value) in filtered {
            labels.entry(key).or_insert(value);
        }
    }

    /// Record a group's image tag, once. The raw reference is reduced to
    /// its last colon-delimited segment before storage.
    pub fn merge_image(&self, group: GroupId, reference: &str) {
        let mut labels = self.groups.entry(group).or_default();
        labels
            .entry("image".to_string())
            .or_insert_with(|| image_tag(reference).to_string());
    }

    /// Point a container at the sandbox group that owns it.
    pub fn link(&self, container: ContainerId, group: GroupId) {
        self.links.insert(container, group);
    }

    /// Drop all state recorded under an identifier, in both tables.
    /// Absence is not an error, so evicts replayed after a reconnect are
    /// harmless no-ops.
    pub fn evict(&self, id: &str) {
        self.links.remove(&ContainerId(id.to_string()));
        self.groups.remove(&GroupId(id.to_string()));
    }

    /// Resolve a container id to its group's label set. A container that
    /// was never sandbox-linked is its own group. `None` covers both an
    /// unknown id and a linked container whose group has no labels yet
    /// (create ordering is not guaranteed).
    pub fn resolve(&self, container_id: &str) -> Option<LabelSet> {
        let group = match self.links.get(&ContainerId(container_id.to_string())) {
            Some(link) => link.value().clone(),
            None => GroupId(container_id.to_string()),
        };
        self.groups.get(&group).map(|entry| entry.value().clone())
    }

    /// Number of groups currently holding labels.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
