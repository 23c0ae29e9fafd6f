use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    analysis::entities::{IngredientInfo, MenuItem, Place, ProductAnalysis},
    common::entities::app_errors::CoreError,
};

/// Lenient parsing boundary for model output. All tolerance towards the
/// model's unreliable formatting (code fences, "no results" prose) lives
/// here, isolated from transport concerns so the policy can be tested on its
/// own.

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("valid fence regex"));

/// Phrases taken as a legitimate "no results" answer when the places payload
/// is not valid JSON.
const NO_RESULTS_PHRASES: [&str; 2] = ["لا توجد نتائج", "no results"];

/// Strict parse of a product verdict. Any unrecognised status value, missing
/// required field or wrong type fails the whole record; a partially valid
/// analysis is never produced.
pub fn parse_product_analysis(raw: &str) -> Result<ProductAnalysis, CoreError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        tracing::warn!("product analysis response did not match schema: {e}");
        CoreError::MalformedResponse(format!("product analysis: {e}"))
    })
}

/// Strict parse of a menu verdict: an ordered array of dishes.
pub fn parse_menu_items(raw: &str) -> Result<Vec<MenuItem>, CoreError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        tracing::warn!("menu analysis response did not match schema: {e}");
        CoreError::MalformedResponse(format!("menu analysis: {e}"))
    })
}

/// Ingredient answers are prose; the only check is non-emptiness.
pub fn parse_ingredient_info(raw: &str) -> Result<IngredientInfo, CoreError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CoreError::MalformedResponse(
            "empty ingredient answer".to_string(),
        ));
    }

    Ok(IngredientInfo::new(text.to_string()))
}

/// Parse a places payload. The model sometimes wraps the JSON array in a
/// ```json fence, and sometimes answers "no results" in prose instead of
/// returning `[]`; both are tolerated. An empty vec is a valid outcome
/// distinct from failure.
pub fn parse_places(raw: &str) -> Result<Vec<Place>, CoreError> {
    let text = raw.trim();
    let candidate = strip_code_fence(text);

    match serde_json::from_str::<Vec<Place>>(candidate) {
        Ok(places) => Ok(places),
        Err(e) => {
            if contains_no_results_phrase(text) {
                return Ok(Vec::new());
            }

            tracing::warn!("places response was neither a JSON array nor a no-results answer: {e}");
            Err(CoreError::MalformedResponse(format!("places: {e}")))
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    match JSON_FENCE.captures(raw) {
        Some(captures) => captures.get(1).map_or(raw, |m| m.as_str()),
        None => raw.trim(),
    }
}

fn contains_no_results_phrase(text: &str) -> bool {
    let lowered = text.to_lowercase();
    NO_RESULTS_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::Status;

    #[test]
    fn product_analysis_with_recognised_statuses_round_trips() {
        let raw = r#"{
            "status": "halal",
            "productName": "Oat Milk",
            "ingredients": [{ "name": "oats", "status": "halal" }],
            "reasoning": "جميع المكونات نباتية."
        }"#;

        let analysis = parse_product_analysis(raw).unwrap();
        assert_eq!(analysis.status, Status::Halal);
        assert_eq!(analysis.product_name, "Oat Milk");
        assert_eq!(analysis.ingredients.len(), 1);
        assert_eq!(analysis.ingredients[0].status, Status::Halal);
        assert!(analysis.health_info.is_none());
    }

    #[test]
    fn product_analysis_accepts_arabic_status_values() {
        let raw = r#"{
            "status": "مشبوه",
            "productName": "بسكويت",
            "ingredients": [{ "name": "جيلاتين", "status": "مشبوه" }],
            "reasoning": "مصدر الجيلاتين غير معروف."
        }"#;

        let analysis = parse_product_analysis(raw).unwrap();
        assert_eq!(analysis.status, Status::Suspect);
    }

    #[test]
    fn product_analysis_with_foreign_status_fails_whole_record() {
        let raw = r#"{
            "status": "halal",
            "productName": "Candy",
            "ingredients": [{ "name": "gelatin", "status": "maybe" }],
            "reasoning": "..."
        }"#;

        assert!(matches!(
            parse_product_analysis(raw),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn product_analysis_with_missing_required_field_fails() {
        let raw = r#"{ "status": "halal", "productName": "Water" }"#;
        assert!(parse_product_analysis(raw).is_err());
    }

    #[test]
    fn menu_items_parse_in_order() {
        let raw = r#"[
            { "dishName": "شاورما دجاج", "status": "halal" },
            { "dishName": "كوكتيل", "status": "suspect", "notes": "قد يحتوي على كحول" }
        ]"#;

        let items = parse_menu_items(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].dish_name, "شاورما دجاج");
        assert_eq!(items[1].status, Status::Suspect);
        assert_eq!(items[1].notes.as_deref(), Some("قد يحتوي على كحول"));
    }

    #[test]
    fn menu_items_with_unrecognised_status_fail() {
        let raw = r#"[{ "dishName": "dish", "status": "unknown" }]"#;
        assert!(parse_menu_items(raw).is_err());
    }

    #[test]
    fn ingredient_info_keeps_text_verbatim() {
        let raw = "E471 مستحلب، قد يكون نباتياً أو حيوانياً حسب المصدر: مشبوه.";
        let info = parse_ingredient_info(raw).unwrap();
        assert_eq!(info.info, raw);
    }

    #[test]
    fn ingredient_info_rejects_empty_answers() {
        assert!(parse_ingredient_info("   \n").is_err());
    }

    #[test]
    fn places_unwraps_fenced_json_array() {
        let raw = "```json\n[{\"name\":\"مطعم البركة\",\"category\":\"مطعم\",\"rating\":4.5,\"distance\":\"500 متر\",\"mapsLink\":\"https://maps.google.com/?q=1\"}]\n```";

        let places = parse_places(raw).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "مطعم البركة");
        assert_eq!(places[0].rating, Some(4.5));
    }

    #[test]
    fn places_parses_bare_json_array_identically() {
        let raw = r#"[{"name":"مسجد النور","category":"مسجد","distance":"1.2 كم","mapsLink":"https://maps.google.com/?q=2"}]"#;

        let places = parse_places(raw).unwrap();
        assert_eq!(places.len(), 1);
        assert!(places[0].rating.is_none());
    }

    #[test]
    fn places_empty_array_is_a_valid_outcome() {
        assert_eq!(parse_places("[]").unwrap(), Vec::new());
    }

    #[test]
    fn places_prose_no_results_degrades_to_empty() {
        assert_eq!(
            parse_places("عذراً، لا توجد نتائج مطابقة لبحثك.").unwrap(),
            Vec::new()
        );
        assert_eq!(
            parse_places("Sorry, there are no results for that query.").unwrap(),
            Vec::new()
        );
    }

    #[test]
    fn places_unparsable_text_without_phrase_is_a_failure() {
        assert!(matches!(
            parse_places("هذه ليست إجابة صالحة"),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn fence_stripping_leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fence("  [1,2]  "), "[1,2]");
        assert_eq!(strip_code_fence("```json\n[1,2]\n```"), "[1,2]");
    }
}
