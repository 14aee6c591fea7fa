//! Part number cleanup.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::{Tool, ToolError, ToolOutput};

static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

/// Strip every non-digit character from a part number.
pub fn clean_part_number(part_number: &str) -> String {
    NON_DIGIT_RE.replace_all(part_number, "").into_owned()
}

pub struct CleanPartNumber;

#[async_trait]
impl Tool for CleanPartNumber {
    fn name(&self) -> &str {
        "clean_part_number"
    }

    fn description(&self) -> &str {
        "Очистка артикула от нецифровых символов (оставляет только цифры).

Принимает один аргумент:
- part_number: номер артикула для очистки (строка)

Возвращает: строку, содержащую только цифры из исходного артикула."
    }

    async fn execute(&self, input: &str) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::Text(clean_part_number(input)))
    }
}
