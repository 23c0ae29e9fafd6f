use axum::{
    Extension,
    extract::{Multipart, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        analysis::handlers::read_image_field,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use zad_core::domain::{
    analysis::{entities::ProductAnalysis, ports::AnalysisService, value_objects::AnalyzeProductInput},
    screen::entities::Tool,
    status::Tone,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeProductResponse {
    pub data: ProductAnalysis,
    /// Presentation tone for the overall verdict.
    pub tone: Tone,
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "analysis",
    summary = "Analyze a product photo",
    description = "Classifies a photographed product as halal, haram or suspect with per-ingredient verdicts",
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 409, description = "An analysis is already running for this device's product screen"),
        (status = 502, description = "The model call failed or returned an unusable response")
    ),
)]
pub async fn analyze_product_image(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    multipart: Multipart,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let image_data = read_image_field(multipart).await?;

    let analysis = state
        .service
        .analyze_product_image(AnalyzeProductInput {
            device_id: device.device_id,
            image_data,
        })
        .await
        .map_err(|e| ApiError::from_analysis(e, Tool::Product))?;

    Ok(Response::OK(AnalyzeProductResponse {
        tone: analysis.status.tone(),
        data: analysis,
    }))
}
