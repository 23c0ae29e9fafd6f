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
use zad_core::domain::screen::{entities::ScreenSet, ports::ScreenService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScreensResponse {
    pub data: ScreenSet,
}

#[utoipa::path(
    get,
    path = "",
    tag = "screen",
    summary = "Get screen states",
    description = "Returns the current analysis screen states for the calling device",
    responses(
        (status = 200, body = ScreensResponse),
        (status = 400, description = "Missing or empty X-Device-Id header")
    ),
)]
pub async fn get_screens(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<ScreensResponse>, ApiError> {
    let screens = state.service.get_screens(&device.device_id).await?;

    Ok(Response::OK(ScreensResponse { data: screens }))
}
