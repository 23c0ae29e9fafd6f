use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct IngredientQueryRequest {
    /// Ingredient name or additive code, e.g. "E471" or "جيلاتين".
    #[validate(length(
        min = 1,
        max = 500,
        message = "query must be between 1 and 500 characters"
    ))]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PlacesSearchRequest {
    /// Free-text search, e.g. "مطاعم حلال" or "مساجد".
    #[validate(length(
        min = 1,
        max = 200,
        message = "query must be between 1 and 200 characters"
    ))]
    pub query: String,
}
