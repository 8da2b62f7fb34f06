use anyhow::{Context, Result};

/// Which external agent backend serves analysis requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentBackend {
    OpenAi,
    Ollama,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub agent_backend: AgentBackend,
    /// Required when the backend is OpenAI; unused for Ollama.
    pub openai_api_key: String,
    pub openai_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    /// Optional file whose contents replace the built-in audit instructions.
    pub agent_instructions_path: Option<String>,
    /// When true, the job description is passed through the ASCII normalizer
    /// before prompt composition. Mirrors the two reference deployments.
    pub normalize_job_description: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let agent_backend = match std::env::var("AGENT_BACKEND")
            .unwrap_or_else(|_| "openai".to_string())
            .to_lowercase()
            .as_str()
        {
            "openai" => AgentBackend::OpenAi,
            "ollama" => AgentBackend::Ollama,
            other => anyhow::bail!("AGENT_BACKEND must be 'openai' or 'ollama', got '{other}'"),
        };

        let openai_api_key = match agent_backend {
            AgentBackend::OpenAi => require_env("OPENAI_API_KEY")?,
            AgentBackend::Ollama => std::env::var("OPENAI_API_KEY").unwrap_or_default(),
        };

        Ok(Config {
            agent_backend,
            openai_api_key,
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: std::env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| "deepseek-r1".to_string()),
            agent_instructions_path: std::env::var("AGENT_INSTRUCTIONS_PATH").ok(),
            normalize_job_description: std::env::var("NORMALIZE_JOB_DESCRIPTION")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
