//! Ollama backend — local models via the /api/chat endpoint.
//! No auth and no retry loop; the only common failure mode is the daemon
//! not running, which retries would not fix.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Agent, AgentError, AgentReply};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

pub struct OllamaAgent {
    client: Client,
    base_url: String,
    model: String,
    instructions: Arc<str>,
}

impl OllamaAgent {
    pub fn new(base_url: String, model: String, instructions: Arc<str>) -> Self {
        Self {
            // Local models can be slow; allow 5 minutes per call.
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(300))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            instructions,
        }
    }
}

#[async_trait]
impl Agent for OllamaAgent {
    async fn run(&self, prompt: &str) -> Result<AgentReply, AgentError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &*self.instructions,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        debug!("Ollama call succeeded (model: {})", self.model);

        if chat.message.content.is_empty() {
            return Err(AgentError::EmptyContent);
        }

        Ok(AgentReply {
            content: chat.message.content,
        })
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
