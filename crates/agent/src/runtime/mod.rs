//! Runtime module — process lifecycle: boot.

pub mod boot;
