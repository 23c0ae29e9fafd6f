use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    screen::entities::{LocationOutcome, LocationState, ScreenResolution, ScreenSet, Tool},
};

/// Session store for per-device screen state. Transition rules live on the
/// entities; implementations only have to apply them atomically per device.
#[cfg_attr(test, mockall::automock)]
pub trait ScreenSessionRepository: Send + Sync {
    /// Current screen set for the device, a fresh one if none exists yet.
    fn load(&self, device_id: &str) -> impl Future<Output = Result<ScreenSet, CoreError>> + Send;

    /// Apply [`ScreenSet::begin`] for the tool.
    fn begin(
        &self,
        device_id: &str,
        tool: Tool,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Apply [`ScreenSet::finish`] with the given resolution.
    fn finish(
        &self,
        device_id: &str,
        resolution: ScreenResolution,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn set_location(
        &self,
        device_id: &str,
        outcome: LocationOutcome,
    ) -> impl Future<Output = Result<ScreenSet, CoreError>> + Send;

    fn location(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<LocationState, CoreError>> + Send;
}

/// Read/report operations on a device's screens, exposed over the API.
#[cfg_attr(test, mockall::automock)]
pub trait ScreenService: Send + Sync {
    fn get_screens(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<ScreenSet, CoreError>> + Send;

    fn set_places_location(
        &self,
        device_id: &str,
        outcome: LocationOutcome,
    ) -> impl Future<Output = Result<ScreenSet, CoreError>> + Send;
}
