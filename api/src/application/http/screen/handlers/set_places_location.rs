use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        screen::validators::SetPlacesLocationRequest,
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
    analysis::value_objects::Coordinates,
    screen::{
        entities::{LocationOutcome, ScreenSet},
        ports::ScreenService,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetPlacesLocationResponse {
    pub data: ScreenSet,
}

#[utoipa::path(
    put,
    path = "/places/location",
    tag = "screen",
    summary = "Report geolocation outcome",
    description = "Records the device's geolocation result for the places screen. Send coordinates on success, or `denied: true` when the user refused access.",
    request_body = SetPlacesLocationRequest,
    responses(
        (status = 200, body = SetPlacesLocationResponse),
        (status = 400, description = "Coordinates out of range, or neither coordinates nor a denial provided")
    ),
)]
pub async fn set_places_location(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<SetPlacesLocationRequest>,
) -> Result<Response<SetPlacesLocationResponse>, ApiError> {
    let outcome = match (payload.latitude, payload.longitude, payload.denied) {
        (Some(latitude), Some(longitude), false) => {
            LocationOutcome::Acquired(Coordinates::new(latitude, longitude)?)
        }
        (None, None, true) => LocationOutcome::Denied,
        _ => {
            return Err(ApiError::BadRequest(
                "provide both latitude and longitude, or denied: true".to_string(),
            ));
        }
    };

    let screens = state
        .service
        .set_places_location(&device.device_id, outcome)
        .await?;

    Ok(Response::OK(SetPlacesLocationResponse { data: screens }))
}
