use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::{
        entities::{IngredientInfo, MenuItem, Place, ProductAnalysis},
        value_objects::Coordinates,
    },
    common::{entities::app_errors::CoreError, generate_timestamp},
};

/// The four dashboard tools, each backed by one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Product,
    Menu,
    Ingredient,
    Places,
}

impl Tool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Product => "product",
            Tool::Menu => "menu",
            Tool::Ingredient => "ingredient",
            Tool::Places => "places",
        }
    }
}

/// Per-screen request lifecycle. A single tagged union instead of separate
/// loading/error/result flags, so unreachable combinations (loading and
/// failed at once) cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

impl<T> ScreenState<T> {
    /// A new submission from `idle`, `success` or `failed` clears the prior
    /// outcome and enters `loading`. While a request is in flight the screen
    /// rejects further submissions (the server-side form of the disabled
    /// submit control).
    pub fn begin(&mut self) -> Result<(), CoreError> {
        if matches!(self, ScreenState::Loading) {
            return Err(CoreError::AnalysisPending);
        }

        *self = ScreenState::Loading;
        Ok(())
    }

    /// Resolution is only legal from `loading`, and lands in exactly one of
    /// `success` or `failed`.
    pub fn resolve_ok(&mut self, value: T) -> Result<(), CoreError> {
        if !matches!(self, ScreenState::Loading) {
            return Err(CoreError::Invalid(
                "screen resolved without a pending request".to_string(),
            ));
        }

        *self = ScreenState::Success(value);
        Ok(())
    }

    pub fn resolve_err(&mut self, message: String) -> Result<(), CoreError> {
        if !matches!(self, ScreenState::Loading) {
            return Err(CoreError::Invalid(
                "screen resolved without a pending request".to_string(),
            ));
        }

        *self = ScreenState::Failed(message);
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }
}

/// Places screen precondition. `Denied` is a terminal per-screen error until
/// the client reports coordinates again; it is distinct from a failed search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", content = "coordinates", rename_all = "lowercase")]
pub enum LocationState {
    Unset,
    Acquired(Coordinates),
    Denied,
}

/// Client-reported outcome of the one-time geolocation acquisition.
#[derive(Debug, Clone, Copy)]
pub enum LocationOutcome {
    Acquired(Coordinates),
    Denied,
}

/// Typed payload of a successful analysis, routed back to its screen.
#[derive(Debug, Clone)]
pub enum ToolResult {
    Product(ProductAnalysis),
    Menu(Vec<MenuItem>),
    Ingredient(IngredientInfo),
    Places(Vec<Place>),
}

impl ToolResult {
    pub fn tool(&self) -> Tool {
        match self {
            ToolResult::Product(_) => Tool::Product,
            ToolResult::Menu(_) => Tool::Menu,
            ToolResult::Ingredient(_) => Tool::Ingredient,
            ToolResult::Places(_) => Tool::Places,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ScreenResolution {
    Success(ToolResult),
    Failure(Tool, String),
}

impl ScreenResolution {
    pub fn tool(&self) -> Tool {
        match self {
            ScreenResolution::Success(result) => result.tool(),
            ScreenResolution::Failure(tool, _) => *tool,
        }
    }
}

/// The four screens owned by one device session. State is exclusively owned
/// per device and discarded on restart; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScreenSet {
    pub id: Uuid,
    pub product: ScreenState<ProductAnalysis>,
    pub menu: ScreenState<Vec<MenuItem>>,
    pub ingredient: ScreenState<IngredientInfo>,
    pub places: ScreenState<Vec<Place>>,
    pub location: LocationState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScreenSet {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            product: ScreenState::Idle,
            menu: ScreenState::Idle,
            ingredient: ScreenState::Idle,
            places: ScreenState::Idle,
            location: LocationState::Unset,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn begin(&mut self, tool: Tool) -> Result<(), CoreError> {
        match tool {
            Tool::Product => self.product.begin()?,
            Tool::Menu => self.menu.begin()?,
            Tool::Ingredient => self.ingredient.begin()?,
            Tool::Places => {
                if !matches!(self.location, LocationState::Acquired(_)) {
                    return Err(CoreError::LocationRequired);
                }
                self.places.begin()?;
            }
        }

        self.touch();
        Ok(())
    }

    pub fn finish(&mut self, resolution: ScreenResolution) -> Result<(), CoreError> {
        match resolution {
            ScreenResolution::Success(ToolResult::Product(analysis)) => {
                self.product.resolve_ok(analysis)?
            }
            ScreenResolution::Success(ToolResult::Menu(items)) => self.menu.resolve_ok(items)?,
            ScreenResolution::Success(ToolResult::Ingredient(info)) => {
                self.ingredient.resolve_ok(info)?
            }
            ScreenResolution::Success(ToolResult::Places(places)) => {
                self.places.resolve_ok(places)?
            }
            ScreenResolution::Failure(Tool::Product, message) => {
                self.product.resolve_err(message)?
            }
            ScreenResolution::Failure(Tool::Menu, message) => self.menu.resolve_err(message)?,
            ScreenResolution::Failure(Tool::Ingredient, message) => {
                self.ingredient.resolve_err(message)?
            }
            ScreenResolution::Failure(Tool::Places, message) => self.places.resolve_err(message)?,
        }

        self.touch();
        Ok(())
    }

    /// Re-reporting coordinates recovers a previously denied screen.
    pub fn set_location(&mut self, outcome: LocationOutcome) {
        self.location = match outcome {
            LocationOutcome::Acquired(coordinates) => LocationState::Acquired(coordinates),
            LocationOutcome::Denied => LocationState::Denied,
        };
        self.touch();
    }

    pub fn location_coordinates(&self) -> Option<Coordinates> {
        match self.location {
            LocationState::Acquired(coordinates) => Some(coordinates),
            _ => None,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for ScreenSet {
    fn default() -> Self {
        Self::new()
    }
}
