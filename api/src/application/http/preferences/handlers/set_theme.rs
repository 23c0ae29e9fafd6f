use axum::{Extension, extract::State};

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        preferences::{handlers::get_theme::ThemePreferenceResponse, validators::SetThemeRequest},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use zad_core::domain::preferences::ports::PreferenceService;

#[utoipa::path(
    put,
    path = "/theme",
    tag = "preferences",
    summary = "Set theme preference",
    description = "Stores the device's explicit dark mode choice and persists it across restarts",
    request_body = SetThemeRequest,
    responses(
        (status = 200, body = ThemePreferenceResponse),
        (status = 400, description = "Missing or empty X-Device-Id header")
    ),
)]
pub async fn set_theme(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<SetThemeRequest>,
) -> Result<Response<ThemePreferenceResponse>, ApiError> {
    let preference = state
        .service
        .set_theme(&device.device_id, payload.dark_mode)
        .await?;

    Ok(Response::OK(ThemePreferenceResponse { data: preference }))
}
