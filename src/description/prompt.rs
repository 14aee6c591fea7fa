//! Listing prompt template.

use std::fmt;

use crate::catalog::normalize::APPLICABILITY_LIMIT;
use crate::catalog::{ArticleSummary, OemNumber, SimplifiedEnvelope, VehicleApplicability};

/// System instruction sent with every description request.
pub const SYSTEM_INSTRUCTION: &str =
    "Ты помогаешь с написанием текстов для объявлений на Авито, используя данные о запчастях.";

/// Fully rendered user prompt for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionPrompt(String);

impl DescriptionPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DescriptionPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the listing prompt from the normalized lookups.
///
/// Pure; empty envelopes render as empty sections.
pub fn compose_prompt(
    brand: &str,
    original_part: &str,
    search: &SimplifiedEnvelope<ArticleSummary>,
    applicability: &SimplifiedEnvelope<VehicleApplicability>,
    oem: &SimplifiedEnvelope<OemNumber>,
) -> DescriptionPrompt {
    let name_part = search
        .items()
        .first()
        .map(|a| a.product_name.as_str())
        .unwrap_or("");

    let oems_text = oem
        .items()
        .iter()
        .map(|o| o.oem_number.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let articles = search
        .items()
        .iter()
        .map(|a| format!("{} ({})", a.article_number, a.supplier_brand))
        .collect::<Vec<_>>()
        .join("\n");

    let cars_list = applicability
        .items()
        .iter()
        .take(APPLICABILITY_LIMIT)
        .map(|v| v.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    DescriptionPrompt(format!(
        r#"Напиши продающее и привлекательное описание автозапчасти для Авито с учетом всех параметров. Используя следующую информацию:
1. **Название**: Сделай точечное хорошее название, чтоб алгоритмы авито считывали его хорошо "{name_part} для {brand} {original_part}".

2. Цена: за 1 штуку здесь цену не надо писать просто так же оставляешь

3. Описание: Напиши, что это новая автозапчасть. Пример: "Новая, оригинальная запчасть, не использовалась."

4. Номер запчасти: Укажи артикул, например, {original_part}.

5. Кросс-номера:
{oems_text}

6. Аналоги:
{articles}

7. Применимость:
    Перечисли все автомобили, для которых эта запчасть подходит. Пример:
    "Подходит на автомобили:
{cars_list}"

8. Условия:
    - 🚗 **Автозапчасти с подбором по VIN** + установка в сервисе (в 10 м от нас).
    - 🛠 **Гарантия до 6 месяцев** и возврат в течение 14 дней.
    - 🚛 **Отправка в день заказа** | Курьером по Москве — за 1 час, по регионам — в день заказа!
    - 💵 **Оплата для ИП и ООО**: Без НДС +6%, С НДС +26%.
    - 🔧 **Установка в сервисе**: Быстрая и качественная установка запчастей.
    - 🔑 **Подбор запчастей по VIN**: Подберите нужные запчасти за несколько минут, просто предоставив нам VIN-код автомобиля.
    - 🏆 **Отзывы**: Мы гордимся высокими оценками и положительными отзывами от наших клиентов.

9. Поддержка:
    ✅ Мы компания **DriveLine**, предлагаем вам запчасти напрямую от поставщиков — без посредников.
    Поддержка на всем сроке использования.

10. Адреса магазинов:
    - 📍 **Кунцевский авторынок, Южная сторона, Автокит А1** (ул. Московская, с12)
    - 📍 **Каширское шоссе 61к3а** (Москва, ТЦ "ТЯНЬЯ", 0 этаж, Линия В, Павильон В, 29)

11. Режим работы: ежедневно с 10:00 до 19:00 (по просьбе можем задержаться).

12. Дополнительные ключевые слова: Процесс подбора, разборки, оригинальные запчасти, замены, трос натяжителя, Mercedes-Benz, тормоза, кузовные детали, доступные запчасти для ремонта.

**Дополнительные рекомендации**:
    - Пожалуйста, добавь синонимы, такие как "трос натяжителя", "ремень генератора", "натяжитель ремня" для улучшения поисковой выдачи.
    - Постарайся делать описание коротким, но информативным, чтобы оно легко воспринималось и приводило к продажам."#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(nr: &str, brand: &str, name: &str) -> ArticleSummary {
        ArticleSummary {
            article_id: "1".to_string(),
            article_number: nr.to_string(),
            supplier_brand: brand.to_string(),
            product_name: name.to_string(),
        }
    }

    #[test]
    fn empty_envelopes_still_render_template() {
        let prompt = compose_prompt(
            "BOSCH",
            "1987949412",
            &SimplifiedEnvelope::empty(),
            &SimplifiedEnvelope::empty(),
            &SimplifiedEnvelope::empty(),
        );
        let text = prompt.as_str();
        assert!(!text.is_empty());
        assert!(text.contains("\" для BOSCH 1987949412\""));
        assert!(text.contains("Адреса магазинов"));
    }

    #[test]
    fn interpolates_first_product_name_and_lists() {
        let search = SimplifiedEnvelope::new(vec![
            article("1 987 949 412", "BOSCH", "Поликлиновой ремень"),
            article("6PK1153", "CONTITECH", "Ремень"),
        ]);
        let applicability = SimplifiedEnvelope::new(vec![
            VehicleApplicability {
                name: "BMW 3 (E90) 320 d".to_string(),
            },
            VehicleApplicability {
                name: "BMW 1 (E87) 118 d".to_string(),
            },
        ]);
        let oem = SimplifiedEnvelope::new(vec![
            OemNumber {
                oem_number: "11287799204".to_string(),
            },
            OemNumber {
                oem_number: "11287628651".to_string(),
            },
        ]);

        let text = compose_prompt("BMW", "1987949412", &search, &applicability, &oem).into_string();
        assert!(text.contains("\"Поликлиновой ремень для BMW 1987949412\""));
        assert!(text.contains("11287799204\n11287628651"));
        assert!(text.contains("1 987 949 412 (BOSCH)\n6PK1153 (CONTITECH)"));
        assert!(text.contains("BMW 3 (E90) 320 d\nBMW 1 (E87) 118 d"));
    }

    #[test]
    fn applicability_rendering_is_capped() {
        let applicability = SimplifiedEnvelope::new(
            (0..45)
                .map(|i| VehicleApplicability {
                    name: format!("Model-{i:02}"),
                })
                .collect(),
        );
        let text = compose_prompt(
            "VAG",
            "06A115561B",
            &SimplifiedEnvelope::empty(),
            &applicability,
            &SimplifiedEnvelope::empty(),
        )
        .into_string();
        assert!(text.contains("Model-29"));
        assert!(!text.contains("Model-30"));
    }
}
