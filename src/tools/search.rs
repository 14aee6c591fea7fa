//! Part search tools: article-only and supplier-scoped.

use std::sync::Arc;

use async_trait::async_trait;

use super::{positional_args, Tool, ToolError, ToolOutput};
use crate::catalog::{normalize, CatalogClient};

/// First-stage search by article number; returns supplier candidates.
pub struct SearchPart {
    catalog: Arc<CatalogClient>,
}

impl SearchPart {
    pub fn new(catalog: Arc<CatalogClient>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for SearchPart {
    fn name(&self) -> &str {
        "search_part"
    }

    fn description(&self) -> &str {
        "Первичный поиск запчасти по номеру артикула в базе TecDoc.

Принимает один аргумент:
- part_number: номер артикула запчасти (строка)

Например: search_part(\"1987949412\")

Возвращает: упрощенный словарь только с supplier_id и supplier_brand."
    }

    async fn execute(&self, input: &str) -> Result<ToolOutput, ToolError> {
        let raw = self.catalog.search_part(input).await?;
        Ok(ToolOutput::Suppliers(normalize::supplier_refs(&raw)))
    }
}

/// Second-stage search scoped to a supplier; returns article identities.
pub struct SearchPartWithSupplier {
    catalog: Arc<CatalogClient>,
}

impl SearchPartWithSupplier {
    pub fn new(catalog: Arc<CatalogClient>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for SearchPartWithSupplier {
    fn name(&self) -> &str {
        "search_part_with_sup_id"
    }

    fn description(&self) -> &str {
        "Расширенный поиск запчасти с использованием supplier_id и supplier_brand.

ВАЖНО: Передавай все параметры одной строкой через запятые:
search_part_with_sup_id(\"part_number,sup_id,sup_brand\")

Например: search_part_with_sup_id(\"1987949412,16,BMW\")

Возвращает: упрощенный словарь с article_id, article_number, supplier_brand, product_name."
    }

    async fn execute(&self, input: &str) -> Result<ToolOutput, ToolError> {
        let args = positional_args(self.name(), input, 3)?;
        let raw = self
            .catalog
            .search_part_with_supplier(&args[0], &args[1], &args[2])
            .await?;
        Ok(ToolOutput::Articles(normalize::article_summaries(&raw)))
    }
}
