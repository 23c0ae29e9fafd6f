use std::future::Future;

use crate::domain::{
    analysis::{
        entities::{IngredientInfo, MenuItem, Place, ProductAnalysis},
        value_objects::{
            AnalyzeMenuInput, AnalyzeProductInput, Coordinates, IngredientQuery, PlacesQuery,
        },
    },
    common::entities::app_errors::CoreError,
};

/// Outbound port to the generative model. Implementations issue exactly one
/// network call per invocation and never retry; the caller surfaces the
/// failure and the user decides whether to resubmit.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    /// Text instruction plus an inline image, constrained to a JSON response
    /// of the given shape.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Text-only instruction; `response_schema` is `None` for freeform prose
    /// answers.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Text instruction grounded in maps retrieval around the given
    /// coordinates. The answer is plain text that is expected, but not
    /// guaranteed, to contain a JSON array.
    fn generate_with_location(
        &self,
        prompt: String,
        location: Coordinates,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// The four user-facing analysis operations. Each issues one model call and
/// drives the initiating screen's state machine from `loading` to exactly one
/// of `success` or `failed`.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_product_image(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<ProductAnalysis, CoreError>> + Send;

    fn analyze_menu_image(
        &self,
        input: AnalyzeMenuInput,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn get_ingredient_info(
        &self,
        input: IngredientQuery,
    ) -> impl Future<Output = Result<IngredientInfo, CoreError>> + Send;

    fn find_places_nearby(
        &self,
        input: PlacesQuery,
    ) -> impl Future<Output = Result<Vec<Place>, CoreError>> + Send;
}
