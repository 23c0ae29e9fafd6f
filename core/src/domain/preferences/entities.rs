use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display preference for one device. Defaults to light; survives restarts,
/// unlike anything else per-device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThemePreference {
    pub dark_mode: bool,
    pub updated_at: DateTime<Utc>,
}

impl ThemePreference {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            updated_at: Utc::now(),
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::new(false)
    }
}
