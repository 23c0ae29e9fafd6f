use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A nearby place returned by the maps-grounded search. `category` is free
/// text used only to pick a display icon; `distance` embeds its own unit
/// (e.g. "500 متر").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub distance: String,
    pub maps_link: String,
}
