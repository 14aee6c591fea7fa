//! Tool definitions exposed to the agent runtime.
//!
//! Every tool takes a single string. Multi-parameter tools expect their
//! values comma-joined and positional (`"1987949412,16,BMW"`); parsing happens
//! here at the boundary and the catalog client only sees typed arguments.

mod args;
mod description;
mod lookup;
mod part_number;
mod search;

pub use args::parse_comma_args;
pub use description::{DescriptionRequest, GenerateDescription};
pub use lookup::{GetApplicability, GetOemPart};
pub use part_number::{clean_part_number, CleanPartNumber};
pub use search::{SearchPart, SearchPartWithSupplier};

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::catalog::{
    ArticleSummary, CatalogClient, CatalogError, OemNumber, SimplifiedEnvelope, SupplierRef,
    VehicleApplicability,
};
use crate::description::DescriptionSettings;
use crate::llm::LlmClient;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Insufficient arguments for {tool}: expected {expected}, got {got}")]
    InsufficientArguments {
        tool: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid input for {tool}: {message}")]
    InvalidInput { tool: String, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ToolError {
    /// Value-level failure marker the agent receives in place of a result.
    pub fn to_marker(&self) -> Value {
        error_marker(&self.to_string())
    }
}

/// `{"error": <message>, "data": {"list": []}}`
pub fn error_marker(message: &str) -> Value {
    json!({
        "error": message,
        "data": {"list": []}
    })
}

/// Result of a successful tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Suppliers(SimplifiedEnvelope<SupplierRef>),
    Articles(SimplifiedEnvelope<ArticleSummary>),
    OemNumbers(SimplifiedEnvelope<OemNumber>),
    Applicability(SimplifiedEnvelope<VehicleApplicability>),
    Text(String),
}

impl ToolOutput {
    /// Render for the agent: text as-is, envelopes as compact JSON.
    pub fn render(&self) -> String {
        match self {
            ToolOutput::Text(text) => text.clone(),
            envelope => serde_json::to_string(envelope)
                .unwrap_or_else(|e| error_marker(&e.to_string()).to_string()),
        }
    }
}

/// A callable tool.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the agent uses to invoke the tool.
    fn name(&self) -> &str;

    /// Usage contract shown to the model.
    fn description(&self) -> &str;

    /// JSON schema for function-calling runtimes: one string property, `input`.
    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "input": {
                    "type": "string",
                    "description": "Positional values, comma-joined when the tool takes several"
                }
            },
            "required": ["input"]
        })
    }

    async fn execute(&self, input: &str) -> Result<ToolOutput, ToolError>;
}

/// Name and usage contract of a registered tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
}

/// Registry of available tools, in declaration order.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Register the catalog and description tools.
    pub fn new(
        catalog: Arc<CatalogClient>,
        llm: Arc<dyn LlmClient>,
        settings: DescriptionSettings,
    ) -> Self {
        let tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(SearchPart::new(catalog.clone())),
            Arc::new(SearchPartWithSupplier::new(catalog.clone())),
            Arc::new(GetApplicability::new(catalog.clone())),
            Arc::new(GetOemPart::new(catalog)),
            Arc::new(CleanPartNumber),
            Arc::new(GenerateDescription::new(llm, settings)),
        ];
        Self { tools }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|t| ToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect()
    }

    /// Function-calling schemas in the OpenAI `tools` format.
    pub fn get_tool_schemas(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters_schema()
                    }
                })
            })
            .collect()
    }

    /// Run a tool by name.
    pub async fn execute(&self, name: &str, input: &str) -> Result<ToolOutput, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        tracing::info!(tool = name, input, "Executing tool");
        tool.execute(input).await
    }
}

/// Require exactly `expected` positional arguments from a comma-joined input.
fn positional_args(
    tool: &str,
    input: &str,
    expected: usize,
) -> Result<Vec<String>, ToolError> {
    let parts = parse_comma_args(input, Some(expected));
    if parts.len() < expected {
        return Err(ToolError::InsufficientArguments {
            tool: tool.to_string(),
            expected,
            got: parts.len(),
        });
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatMessage, CompletionOptions, LlmError};

    struct NoLlm;

    #[async_trait]
    impl LlmClient for NoLlm {
        async fn chat_completion(
            &self,
            _model: &str,
            _messages: &[ChatMessage],
            _options: CompletionOptions,
        ) -> Result<String, LlmError> {
            Err(LlmError::EmptyResponse)
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new(
            Arc::new(CatalogClient::new("http://127.0.0.1:9")),
            Arc::new(NoLlm),
            DescriptionSettings::default(),
        )
    }

    #[test]
    fn registers_tools_in_declaration_order() {
        let names: Vec<String> = registry().list_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "search_part",
                "search_part_with_sup_id",
                "get_applicability",
                "get_oem_part",
                "clean_part_number",
                "generate_description",
            ]
        );
    }

    #[test]
    fn schemas_expose_single_string_input() {
        let schemas = registry().get_tool_schemas();
        assert_eq!(schemas.len(), 6);
        for schema in &schemas {
            assert_eq!(schema["type"], "function");
            assert_eq!(
                schema["function"]["parameters"]["properties"]["input"]["type"],
                "string"
            );
        }
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let err = registry().execute("delete_part", "1").await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref n) if n == "delete_part"));
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = registry();
        registry.register(Arc::new(CleanPartNumber));
        assert_eq!(registry.list_tools().len(), 6);
        assert_eq!(
            registry.list_tools().last().unwrap().name,
            "clean_part_number"
        );
    }

    #[test]
    fn marker_shape() {
        let err = ToolError::InsufficientArguments {
            tool: "get_applicability".to_string(),
            expected: 3,
            got: 1,
        };
        let marker = err.to_marker();
        assert_eq!(marker["data"]["list"], json!([]));
        assert!(marker["error"]
            .as_str()
            .unwrap()
            .contains("expected 3, got 1"));
    }

    #[test]
    fn text_output_renders_verbatim() {
        assert_eq!(ToolOutput::Text("0986".to_string()).render(), "0986");
        let envelope = ToolOutput::OemNumbers(SimplifiedEnvelope::new(vec![OemNumber {
            oem_number: "123".to_string(),
        }]));
        assert_eq!(
            envelope.render(),
            r#"{"success":true,"data":{"list":[{"oem_number":"123"}]}}"#
        );
    }

    #[test]
    fn positional_args_enforces_count() {
        assert!(positional_args("t", "a,b,c", 3).is_ok());
        assert!(matches!(
            positional_args("t", "a,b", 3),
            Err(ToolError::InsufficientArguments { got: 2, .. })
        ));
        assert!(matches!(
            positional_args("t", "abc", 3),
            Err(ToolError::InsufficientArguments { got: 1, .. })
        ));
    }
}
