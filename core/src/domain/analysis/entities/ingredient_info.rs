use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Free-form explanatory text about a single ingredient, markdown-flavoured.
/// The model answers in prose here; no structural validation beyond
/// non-emptiness is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientInfo {
    pub info: String,
}

impl IngredientInfo {
    pub fn new(info: String) -> Self {
        Self { info }
    }
}
