use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        analysis::validators::IngredientQueryRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use zad_core::domain::{
    analysis::{entities::IngredientInfo, ports::AnalysisService, value_objects::IngredientQuery},
    screen::entities::Tool,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientInfoResponse {
    pub data: IngredientInfo,
}

#[utoipa::path(
    post,
    path = "/ingredient",
    tag = "analysis",
    summary = "Look up an ingredient",
    description = "Explains an ingredient's origin and ruling as free markdown text, rendered verbatim",
    request_body = IngredientQueryRequest,
    responses(
        (status = 200, body = IngredientInfoResponse),
        (status = 409, description = "A lookup is already running for this device's ingredient screen"),
        (status = 502, description = "The model call failed or returned an empty answer")
    ),
)]
pub async fn get_ingredient_info(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<IngredientQueryRequest>,
) -> Result<Response<IngredientInfoResponse>, ApiError> {
    let info = state
        .service
        .get_ingredient_info(IngredientQuery {
            device_id: device.device_id,
            query: payload.query,
        })
        .await
        .map_err(|e| ApiError::from_analysis(e, Tool::Ingredient))?;

    Ok(Response::OK(IngredientInfoResponse { data: info }))
}
