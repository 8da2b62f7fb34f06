/// Analysis agent boundary — the single point of entry for all LLM calls.
///
/// ARCHITECTURAL RULE: no other module may talk to a model provider directly.
/// The core hands a composed prompt to `Agent::run` and renders whatever text
/// comes back; everything model-side is opaque behind this trait.
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::{AgentBackend, Config};

mod ollama;
mod openai;
pub mod prompts;

pub use ollama::OllamaAgent;
pub use openai::OpenAiAgent;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Agent returned empty content")]
    EmptyContent,
}

/// The agent's reply. The core treats `content` as unstructured text and
/// renders it verbatim.
#[derive(Debug)]
pub struct AgentReply {
    pub content: String,
}

/// One prompt in, one free-text reply out. Backends may search the web or
/// reason in multiple steps internally; none of that is visible here.
#[async_trait]
pub trait Agent: Send + Sync {
    async fn run(&self, prompt: &str) -> Result<AgentReply, AgentError>;

    fn name(&self) -> &'static str;
}

/// Constructs the agent backend selected by configuration.
pub fn build_agent(config: &Config) -> Result<Arc<dyn Agent>> {
    let instructions = load_instructions(config)?;
    let agent: Arc<dyn Agent> = match config.agent_backend {
        AgentBackend::OpenAi => Arc::new(OpenAiAgent::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            instructions,
        )),
        AgentBackend::Ollama => Arc::new(OllamaAgent::new(
            config.ollama_url.clone(),
            config.ollama_model.clone(),
            instructions,
        )),
    };
    info!("Agent backend initialized: {}", agent.name());
    Ok(agent)
}

/// Resolves the audit instruction text: the built-in default, or the contents
/// of AGENT_INSTRUCTIONS_PATH so the prompt can be edited without a rebuild.
pub fn load_instructions(config: &Config) -> Result<Arc<str>> {
    match &config.agent_instructions_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read agent instructions from '{path}'"))?;
            info!("Loaded agent instructions from {path}");
            Ok(Arc::from(text.as_str()))
        }
        None => Ok(Arc::from(prompts::ATS_AUDIT_INSTRUCTIONS)),
    }
}
