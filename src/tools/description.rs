//! Listing description tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{parse_comma_args, Tool, ToolError, ToolOutput};
use crate::catalog::{ArticleSummary, OemNumber, SimplifiedEnvelope, VehicleApplicability};
use crate::description::{generate_description, DescriptionSettings};
use crate::llm::LlmClient;

/// Arguments of `generate_description`, passed as one JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescriptionRequest {
    pub brand: String,
    pub original_part: String,
    #[serde(default)]
    pub search_result: SimplifiedEnvelope<ArticleSummary>,
    #[serde(default)]
    pub applicability_result: SimplifiedEnvelope<VehicleApplicability>,
    #[serde(default)]
    pub oem_result: SimplifiedEnvelope<OemNumber>,
}

impl DescriptionRequest {
    /// Parse a JSON object, or fall back to `"brand,original_part"` with no lookups.
    pub fn parse(tool: &str, input: &str) -> Result<Self, ToolError> {
        let trimmed = input.trim();
        if trimmed.starts_with('{') {
            return serde_json::from_str(trimmed).map_err(|e| ToolError::InvalidInput {
                tool: tool.to_string(),
                message: e.to_string(),
            });
        }

        let parts = parse_comma_args(trimmed, Some(2));
        match parts.as_slice() {
            [brand, original_part] => Ok(Self {
                brand: brand.clone(),
                original_part: original_part.clone(),
                ..Self::default()
            }),
            _ => Err(ToolError::InsufficientArguments {
                tool: tool.to_string(),
                expected: 2,
                got: parts.len(),
            }),
        }
    }
}

/// Draft a marketplace listing from the collected lookups.
pub struct GenerateDescription {
    llm: Arc<dyn LlmClient>,
    settings: DescriptionSettings,
}

impl GenerateDescription {
    pub fn new(llm: Arc<dyn LlmClient>, settings: DescriptionSettings) -> Self {
        Self { llm, settings }
    }
}

#[async_trait]
impl Tool for GenerateDescription {
    fn name(&self) -> &str {
        "generate_description"
    }

    fn description(&self) -> &str {
        "Генерация описания для Авито на основе данных о запчасти.

Передавай аргументы ОДНОЙ СТРОКОЙ в виде JSON-объекта с полями:
- brand: бренд запчасти (строка)
- original_part: исходный номер артикула (строка)
- search_result: результат search_part_with_sup_id (упрощенный словарь)
- applicability_result: результат get_applicability (упрощенный словарь)
- oem_result: результат get_oem_part (упрощенный словарь)

Например: generate_description({\"brand\": \"BOSCH\", \"original_part\": \"1987949412\", \"search_result\": {...}, \"applicability_result\": {...}, \"oem_result\": {...}})

Возвращает: готовое форматированное описание для Авито."
    }

    async fn execute(&self, input: &str) -> Result<ToolOutput, ToolError> {
        let request = DescriptionRequest::parse(self.name(), input)?;
        let text = generate_description(
            self.llm.as_ref(),
            &self.settings,
            &request.brand,
            &request.original_part,
            &request.search_result,
            &request.applicability_result,
            &request.oem_result,
        )
        .await;
        Ok(ToolOutput::Text(text))
    }
}
