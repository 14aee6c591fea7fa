//! Marketplace listing descriptions.
//!
//! The prompt is composed from the normalized catalog lookups and sent to a
//! chat-completion backend. Generation failures come back as readable text,
//! never as errors, so the agent can decide what to do next.

mod prompt;

pub use prompt::{compose_prompt, DescriptionPrompt, SYSTEM_INSTRUCTION};

use tracing::warn;

use crate::catalog::{ArticleSummary, OemNumber, SimplifiedEnvelope, VehicleApplicability};
use crate::config::DEFAULT_MODEL;
use crate::llm::{ChatMessage, CompletionOptions, LlmClient};

/// Sampling temperature for description generation.
pub const DESCRIPTION_TEMPERATURE: f64 = 0.7;

/// Output cap for description generation.
pub const DESCRIPTION_MAX_TOKENS: u32 = 4000;

/// Model and sampling settings for description generation.
#[derive(Debug, Clone)]
pub struct DescriptionSettings {
    pub model: String,
    pub options: CompletionOptions,
}

impl Default for DescriptionSettings {
    fn default() -> Self {
        Self::with_model(DEFAULT_MODEL)
    }
}

impl DescriptionSettings {
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            options: CompletionOptions {
                temperature: DESCRIPTION_TEMPERATURE,
                max_tokens: DESCRIPTION_MAX_TOKENS,
            },
        }
    }
}

/// Send a composed prompt to the model and return its text.
pub async fn generate_from_prompt(
    llm: &dyn LlmClient,
    settings: &DescriptionSettings,
    prompt: &DescriptionPrompt,
) -> String {
    let messages = [
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(prompt.as_str()),
    ];

    match llm
        .chat_completion(&settings.model, &messages, settings.options)
        .await
    {
        Ok(content) => content,
        Err(e) => {
            warn!(error = %e, "Description generation failed");
            format!("Description generation failed: {}", e)
        }
    }
}

/// Compose the listing prompt and generate the description in one step.
pub async fn generate_description(
    llm: &dyn LlmClient,
    settings: &DescriptionSettings,
    brand: &str,
    original_part: &str,
    search: &SimplifiedEnvelope<ArticleSummary>,
    applicability: &SimplifiedEnvelope<VehicleApplicability>,
    oem: &SimplifiedEnvelope<OemNumber>,
) -> String {
    let prompt = compose_prompt(brand, original_part, search, applicability, oem);
    generate_from_prompt(llm, settings, &prompt).await
}
