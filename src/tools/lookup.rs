//! Article lookups: vehicle applicability and OEM cross-references.

use std::sync::Arc;

use async_trait::async_trait;

use super::{positional_args, Tool, ToolError, ToolOutput};
use crate::catalog::{normalize, CatalogClient};

/// Vehicles a part fits.
pub struct GetApplicability {
    catalog: Arc<CatalogClient>,
}

impl GetApplicability {
    pub fn new(catalog: Arc<CatalogClient>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for GetApplicability {
    fn name(&self) -> &str {
        "get_applicability"
    }

    fn description(&self) -> &str {
        "Получение списка автомобилей, для которых подходит запчасть.

ВАЖНО: Передавай все три параметра ОДНОЙ СТРОКОЙ через запятые:
get_applicability(\"art_id,art_article_nr,sup_brand\")

Например: get_applicability(\"123456,1987949412,BOSCH\")

art_id не может быть пустым, '0' или 'None'.

Возвращает: упрощенный словарь только с name моделей автомобилей (не более 30)."
    }

    async fn execute(&self, input: &str) -> Result<ToolOutput, ToolError> {
        let args = positional_args(self.name(), input, 3)?;
        let raw = self
            .catalog
            .get_applicability(&args[0], &args[1], &args[2])
            .await?;
        Ok(ToolOutput::Applicability(normalize::applicability(&raw)))
    }
}

/// Original-equipment numbers for an article.
pub struct GetOemPart {
    catalog: Arc<CatalogClient>,
}

impl GetOemPart {
    pub fn new(catalog: Arc<CatalogClient>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for GetOemPart {
    fn name(&self) -> &str {
        "get_oem_part"
    }

    fn description(&self) -> &str {
        "Получение оригинальных (OEM) номеров артикулов для запчасти.

Принимает один аргумент:
- art_id: ID артикула из TecDoc (строка)

Например: get_oem_part(\"123456\")

Возвращает: упрощенный словарь только с oem_number номерами."
    }

    async fn execute(&self, input: &str) -> Result<ToolOutput, ToolError> {
        let raw = self.catalog.get_oem_numbers(input).await?;
        Ok(ToolOutput::OemNumbers(normalize::oem_numbers(&raw)))
    }
}
