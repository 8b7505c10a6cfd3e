//! Docker module — engine client, container listing, event streaming.

pub mod client;
pub mod container;
pub mod event;
pub mod inventory;
