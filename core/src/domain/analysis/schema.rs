use serde_json::json;

/// Response schema sent alongside the product-image prompt. Mirrors
/// [`crate::domain::analysis::entities::ProductAnalysis`]; the model is asked
/// to keep `status` inside the closed three-value enum.
pub fn product_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "status": {
                "type": "string",
                "enum": ["halal", "haram", "suspect"]
            },
            "productName": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "status": {
                            "type": "string",
                            "enum": ["halal", "haram", "suspect"]
                        }
                    },
                    "required": ["name", "status"]
                }
            },
            "reasoning": { "type": "string" },
            "healthInfo": { "type": "string" },
            "evidence": { "type": "string" }
        },
        "required": ["status", "productName", "ingredients", "reasoning"]
    })
}

/// Response schema for the menu-image prompt: an ordered array of dishes.
pub fn menu_analysis_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "dishName": { "type": "string" },
                "status": {
                    "type": "string",
                    "enum": ["halal", "haram", "suspect"]
                },
                "notes": { "type": "string" }
            },
            "required": ["dishName", "status"]
        }
    })
}
