//! Agent construction and tool dispatch.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::description::DescriptionSettings;
use crate::llm::{LlmClient, OpenAiClient};
use crate::tools::{ToolError, ToolOutput, ToolRegistry};

use super::prompt::{build_system_prompt, PREAMBLE};

/// Agent type the tool contracts are written for: zero-shot ReAct with
/// `Action:` / `Action Input:` steps.
pub const ZERO_SHOT_REACT_DESCRIPTION: &str = "zero-shot-react-description";

/// Settings the external agent runtime should be constructed with.
#[derive(Debug, Clone, Serialize)]
pub struct AgentSettings {
    /// Model that selects tools
    pub model: String,

    /// Sampling temperature for tool selection
    pub temperature: f64,

    /// Iteration cap for the loop
    pub max_iterations: usize,

    /// Agent type identifier
    pub agent_type: String,

    /// Whether malformed model output is fed back instead of aborting
    pub handle_parsing_errors: bool,
}

impl AgentSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.agent_model.clone(),
            temperature: 0.0,
            max_iterations: config.max_iterations,
            agent_type: ZERO_SHOT_REACT_DESCRIPTION.to_string(),
            handle_parsing_errors: true,
        }
    }
}

/// Tools, preamble and settings bundled for an agent runtime.
pub struct Agent {
    settings: AgentSettings,
    tools: ToolRegistry,
}

impl Agent {
    /// Create an agent with the catalog and OpenAI clients from `config`.
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(CatalogClient::new(config.catalog_url.clone()));
        let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(
            config.api_key.clone(),
            config.completions_url.clone(),
        ));
        let description = DescriptionSettings::with_model(config.description_model.clone());

        Self {
            settings: AgentSettings::from_config(&config),
            tools: ToolRegistry::new(catalog, llm, description),
        }
    }

    /// Create an agent around an existing registry.
    pub fn with_tools(settings: AgentSettings, tools: ToolRegistry) -> Self {
        Self { settings, tools }
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn preamble(&self) -> &'static str {
        PREAMBLE
    }

    pub fn system_prompt(&self) -> String {
        build_system_prompt(&self.tools)
    }

    /// Invoke a tool and return its typed output.
    pub async fn call(&self, name: &str, input: &str) -> Result<ToolOutput, ToolError> {
        self.tools.execute(name, input).await
    }

    /// Invoke a tool the way the agent runtime sees it.
    ///
    /// Failures are rendered as `{"error": ..., "data": {"list": []}}` and
    /// never propagate; the runtime decides whether to retry or give up.
    pub async fn invoke(&self, name: &str, input: &str) -> String {
        match self.call(name, input).await {
            Ok(output) => output.render(),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "Tool call failed");
                e.to_marker().to_string()
            }
        }
    }
}
