use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        analysis::validators::PlacesSearchRequest,
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
    analysis::{entities::Place, ports::AnalysisService, value_objects::PlacesQuery},
    screen::entities::Tool,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FindPlacesResponse {
    /// Empty means a valid "no results" answer, which is not an error.
    pub data: Vec<Place>,
}

#[utoipa::path(
    post,
    path = "/places",
    tag = "analysis",
    summary = "Find nearby halal-relevant places",
    description = "Maps-grounded search around the device's reported coordinates; requires the places screen to have acquired a location",
    request_body = PlacesSearchRequest,
    responses(
        (status = 200, body = FindPlacesResponse),
        (status = 400, description = "No coordinates have been reported for this device"),
        (status = 409, description = "A search is already running for this device's places screen"),
        (status = 502, description = "The model call failed or returned an unusable response")
    ),
)]
pub async fn find_places_nearby(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<PlacesSearchRequest>,
) -> Result<Response<FindPlacesResponse>, ApiError> {
    let places = state
        .service
        .find_places_nearby(PlacesQuery {
            device_id: device.device_id,
            query: payload.query,
        })
        .await
        .map_err(|e| ApiError::from_analysis(e, Tool::Places))?;

    Ok(Response::OK(FindPlacesResponse { data: places }))
}
