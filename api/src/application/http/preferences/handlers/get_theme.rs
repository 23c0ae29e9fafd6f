use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use zad_core::domain::preferences::{entities::ThemePreference, ports::PreferenceService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ThemePreferenceResponse {
    pub data: ThemePreference,
}

#[utoipa::path(
    get,
    path = "/theme",
    tag = "preferences",
    summary = "Get theme preference",
    description = "Returns the device's stored theme preference, light by default",
    responses(
        (status = 200, body = ThemePreferenceResponse),
        (status = 400, description = "Missing or empty X-Device-Id header")
    ),
)]
pub async fn get_theme(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<ThemePreferenceResponse>, ApiError> {
    let preference = state.service.get_theme(&device.device_id).await?;

    Ok(Response::OK(ThemePreferenceResponse { data: preference }))
}
