// Domain-driven module structure for the logtag agent.

// Core infrastructure
pub mod docker;
pub mod state;

// Domain modules
pub mod conf;
pub mod labels;
pub mod runtime;
