use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Outcome of the client's one-time geolocation acquisition: either a
/// coordinate pair, or `denied: true` when the user refused access.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SetPlacesLocationRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: Option<f64>,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within [-180, 180]"
    ))]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub denied: bool,
}
