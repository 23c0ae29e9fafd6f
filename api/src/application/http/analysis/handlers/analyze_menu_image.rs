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
    analysis::{entities::MenuItem, ports::AnalysisService, value_objects::AnalyzeMenuInput},
    screen::entities::Tool,
    status::Tone,
};

/// One dish plus the presentation tone derived from its status.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemVerdict {
    #[serde(flatten)]
    pub item: MenuItem,
    pub tone: Tone,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMenuResponse {
    pub data: Vec<MenuItemVerdict>,
}

#[utoipa::path(
    post,
    path = "/menu",
    tag = "analysis",
    summary = "Analyze a menu photo",
    description = "Classifies every dish on a photographed menu as halal, haram or suspect",
    responses(
        (status = 200, body = AnalyzeMenuResponse),
        (status = 409, description = "An analysis is already running for this device's menu screen"),
        (status = 502, description = "The model call failed or returned an unusable response")
    ),
)]
pub async fn analyze_menu_image(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    multipart: Multipart,
) -> Result<Response<AnalyzeMenuResponse>, ApiError> {
    let image_data = read_image_field(multipart).await?;

    let items = state
        .service
        .analyze_menu_image(AnalyzeMenuInput {
            device_id: device.device_id,
            image_data,
        })
        .await
        .map_err(|e| ApiError::from_analysis(e, Tool::Menu))?;

    let data = items
        .into_iter()
        .map(|item| MenuItemVerdict {
            tone: item.status.tone(),
            item,
        })
        .collect();

    Ok(Response::OK(AnalyzeMenuResponse { data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zad_core::domain::status::Status;

    #[test]
    fn dish_verdicts_flatten_with_their_tone() {
        let verdict = MenuItemVerdict {
            item: MenuItem {
                dish_name: "كوكتيل".to_string(),
                status: Status::Suspect,
                notes: Some("قد يحتوي على كحول".to_string()),
            },
            tone: Status::Suspect.tone(),
        };

        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["dishName"], "كوكتيل");
        assert_eq!(json["status"], "suspect");
        assert_eq!(json["tone"], "warning");
    }
}
