use std::sync::Arc;

use crate::agent::Agent;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis agent. Backend chosen at startup via AGENT_BACKEND.
    /// Carries its own audit instruction text as the system message.
    pub agent: Arc<dyn Agent>,
    pub config: Config,
}
