use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, preferences::entities::ThemePreference};

#[cfg_attr(test, mockall::automock)]
pub trait PreferenceRepository: Send + Sync {
    fn get(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<ThemePreference, CoreError>> + Send;

    fn set(
        &self,
        device_id: &str,
        preference: ThemePreference,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Theme preference operations: explicit read and an explicit setter that
/// both updates in-memory state and persists it.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceService: Send + Sync {
    fn get_theme(
        &self,
        device_id: &str,
    ) -> impl Future<Output = Result<ThemePreference, CoreError>> + Send;

    fn set_theme(
        &self,
        device_id: &str,
        dark_mode: bool,
    ) -> impl Future<Output = Result<ThemePreference, CoreError>> + Send;
}
