//! Labels module — the label-correlation core: attribute filtering, the
//! correlation store, event interpretation, the watch task, and filename
//! resolution.

pub mod event;
pub mod filter;
pub mod resolve;
pub mod store;
pub mod watch;

pub use store::{ContainerId, GroupId, LabelSet, LabelStore};
