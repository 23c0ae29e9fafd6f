use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::status::Status;

/// Verdict for a single photographed product. Produced fresh per request and
/// held only in the requesting screen's state; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysis {
    pub status: Status,
    pub product_name: String,
    pub ingredients: Vec<IngredientVerdict>,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientVerdict {
    pub name: String,
    pub status: Status,
}
