//! Event interpreter — classifies engine lifecycle events and drives the
//! correlation store.
//!
//! Create events arrive for both pod-sandbox objects and application
//! containers; the sandbox-identity attribute is the signal telling the two
//! apart, so labels declared at either level converge onto one group.

use std::collections::HashMap;

use bollard::models::EventMessage;

use super::filter::{important_labels, SANDBOX_ID_KEY};
use super::store::{ContainerId, GroupId, LabelStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Create,
    Destroy,
    Other,
}

/// One runtime lifecycle notification, reduced to the fields the store
/// cares about. Not retained after `apply`.
#[derive(Debug, Clone)]
pub struct LabelEvent {
    pub status: EventStatus,
    pub id: String,
    pub attributes: HashMap<String, String>,
}

impl LabelEvent {
    pub fn create(id: impl Into<String>, attributes: HashMap<String, String>) -> Self {
        Self {
            status: EventStatus::Create,
            id: id.into(),
            attributes,
        }
    }

    pub fn destroy(id: impl Into<String>) -> Self {
        Self {
            status: EventStatus::Destroy,
            id: id.into(),
            attributes: HashMap::new(),
        }
    }
}

impl From<EventMessage> for LabelEvent {
    fn from(msg: EventMessage) -> Self {
        let status = match msg.action.as_deref() {
            Some("create") => EventStatus::Create,
            Some("destroy") => EventStatus::Destroy,
            _ => EventStatus::Other,
        };
        // A partial payload degrades to an empty event, never an error.
        let (id, attributes) = match msg.actor {
            Some(actor) => (
                actor.id.unwrap_or_default(),
                actor.attributes.unwrap_or_default(),
            ),
            None => (String::new(), HashMap::new()),
        };
        Self {
            status,
            id,
            attributes,
        }
    }
}

/// Apply one lifecycle event to the store.
pub fn apply(store: &LabelStore, event: &LabelEvent) {
    match event.status {
        EventStatus::Create => {
            if event.id.is_empty() {
                return;
            }
            if let Some(sandbox) = event.attributes.get(SANDBOX_ID_KEY) {
                // Sandbox-linking record: the sandbox id, not the event's
                // own id, is the label group.
                store.link(ContainerId(event.id.clone()), GroupId(sandbox.clone()));
                if let Some(image) = event.attributes.get("image") {
                    store.merge_image(GroupId(sandbox.clone()), image);
                }
            } else {
                store.merge(
                    GroupId(event.id.clone()),
                    important_labels(&event.attributes),
                );
                // The raw reference is blacklisted by the filter; only the
                // reduced tag is worth keeping.
                if let Some(image) = event.attributes.get("image") {
                    store.merge_image(GroupId(event.id.clone()), image);
                }
            }
        }
        EventStatus::Destroy => store.evict(&event.id),
        EventStatus::Other => {}
    }
}
