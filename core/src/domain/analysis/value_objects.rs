use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// A device-acquired coordinate pair. Acquired once per Places screen
/// activation on the client and reported to the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::Invalid(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::Invalid(format!(
                "longitude out of range: {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeProductInput {
    pub device_id: String,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeMenuInput {
    pub device_id: String,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct IngredientQuery {
    pub device_id: String,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct PlacesQuery {
    pub device_id: String,
    pub query: String,
}
