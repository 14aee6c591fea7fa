//! Whitelist projections from raw catalog responses to simplified envelopes.
//!
//! Each projection keeps only the fields the agent needs for the next step.
//! Source order is preserved and missing fields read as empty strings.

use super::types::{
    field_str, fields, ArticleSummary, OemNumber, RawCatalogResponse, SimplifiedEnvelope,
    SupplierRef, VehicleApplicability,
};

/// Maximum number of applicability rows taken from a response.
pub const APPLICABILITY_LIMIT: usize = 30;

/// First-stage search: supplier id and brand per hit.
pub fn supplier_refs(raw: &RawCatalogResponse) -> SimplifiedEnvelope<SupplierRef> {
    let list = raw
        .items()
        .iter()
        .map(|item| SupplierRef {
            supplier_id: field_str(item, fields::SUP_ID),
            supplier_brand: field_str(item, fields::SUP_BRAND),
        })
        .collect();
    SimplifiedEnvelope::new(list)
}

/// Supplier-scoped search: article identity and product name, hits without `ART_ID` dropped.
pub fn article_summaries(raw: &RawCatalogResponse) -> SimplifiedEnvelope<ArticleSummary> {
    let list = raw
        .items()
        .iter()
        .map(|item| ArticleSummary {
            article_id: field_str(item, fields::ART_ID),
            article_number: field_str(item, fields::ART_ARTICLE_NR),
            supplier_brand: field_str(item, fields::SUP_BRAND),
            product_name: field_str(item, fields::ART_PRODUCT_NAME),
        })
        .filter(|article| !article.article_id.is_empty())
        .collect();
    SimplifiedEnvelope::new(list)
}

/// OEM lookup: cross-reference numbers, rows without `ARL_NUMBER` dropped.
pub fn oem_numbers(raw: &RawCatalogResponse) -> SimplifiedEnvelope<OemNumber> {
    let list = raw
        .items()
        .iter()
        .map(|item| field_str(item, fields::ARL_NUMBER))
        .filter(|number| !number.is_empty())
        .map(|oem_number| OemNumber { oem_number })
        .collect();
    SimplifiedEnvelope::new(list)
}

/// Applicability lookup: vehicle names from the first [`APPLICABILITY_LIMIT`] rows.
///
/// The cap is applied before empty names are dropped, so fewer than
/// `APPLICABILITY_LIMIT` entries may come back even when more exist.
pub fn applicability(raw: &RawCatalogResponse) -> SimplifiedEnvelope<VehicleApplicability> {
    let list = raw
        .items()
        .iter()
        .take(APPLICABILITY_LIMIT)
        .map(|item| field_str(item, fields::NAME))
        .filter(|name| !name.is_empty())
        .map(|name| VehicleApplicability { name })
        .collect();
    SimplifiedEnvelope::new(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn raw(value: Value) -> RawCatalogResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn supplier_refs_keep_order_and_default_missing() {
        let response = raw(json!({"data": {"list": [
            {"SUP_ID": 30, "SUP_BRAND": "BOSCH", "ART_ID": "1"},
            {"SUP_BRAND": "FEBI"},
            {"SUP_ID": "16", "EXTRA": "x"}
        ]}}));

        let envelope = supplier_refs(&response);
        assert!(envelope.success);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "data": {"list": [
                {"supplier_id": "30", "supplier_brand": "BOSCH"},
                {"supplier_id": "", "supplier_brand": "FEBI"},
                {"supplier_id": "16", "supplier_brand": ""}
            ]}})
        );
    }

    #[test]
    fn article_summaries_drop_rows_without_article_id() {
        let response = raw(json!({"data": {"list": [
            {"ART_ID": 123456, "ART_ARTICLE_NR": "1 987 949 412", "SUP_BRAND": "BOSCH",
             "ART_PRODUCT_NAME": "Поликлиновой ремень", "PRICE": 100},
            {"ART_ARTICLE_NR": "X", "SUP_BRAND": "Y"}
        ]}}));

        let envelope = article_summaries(&response);
        assert_eq!(envelope.len(), 1);
        assert_eq!(
            envelope.items()[0],
            ArticleSummary {
                article_id: "123456".to_string(),
                article_number: "1 987 949 412".to_string(),
                supplier_brand: "BOSCH".to_string(),
                product_name: "Поликлиновой ремень".to_string(),
            }
        );
    }

    #[test]
    fn oem_numbers_drop_rows_without_number() {
        let response = raw(json!({"data": {"list": [{"ARL_NUMBER": "123"}, {"OTHER": "x"}]}}));
        assert_eq!(
            serde_json::to_value(oem_numbers(&response)).unwrap()["data"]["list"],
            json!([{"oem_number": "123"}])
        );
    }

    #[test]
    fn applicability_caps_at_thirty_before_filtering() {
        let mut list: Vec<Value> = (0..40).map(|i| json!({"NAME": format!("Car {i}")})).collect();
        list[3] = json!({"NAME": ""});
        list[10] = json!({"OTHER": "no name"});
        let response = raw(json!({"data": {"list": list}}));

        let envelope = applicability(&response);
        assert_eq!(envelope.len(), 28);
        assert!(envelope.items().iter().all(|v| !v.name.is_empty()));
        assert_eq!(envelope.items().last().unwrap().name, "Car 29");
    }

    // Earlier usage text promised up to 15 models; the cap is 30.
    #[test]
    fn applicability_cap_is_thirty_not_fifteen() {
        let list: Vec<Value> = (0..50).map(|i| json!({"NAME": format!("Car {i}")})).collect();
        let envelope = applicability(&raw(json!({"data": {"list": list}})));
        assert_eq!(envelope.len(), APPLICABILITY_LIMIT);
        assert_eq!(APPLICABILITY_LIMIT, 30);
    }

    #[test]
    fn missing_list_yields_empty_envelopes() {
        let response = raw(json!({"data": {}}));
        assert!(supplier_refs(&response).is_empty());
        assert!(article_summaries(&response).is_empty());
        assert!(oem_numbers(&response).is_empty());
        assert!(applicability(&response).is_empty());
        assert!(applicability(&response).success);
    }
}
