use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::status::Status;

/// One dish from an analyzed menu photo. A menu analysis is an ordered
/// sequence of these, in the order the model listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub dish_name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
