use crate::domain::{
    analysis::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    preferences::{
        entities::ThemePreference,
        ports::{PreferenceRepository, PreferenceService},
    },
    screen::ports::ScreenSessionRepository,
};

impl<LLM, SS, PF> PreferenceService for Service<LLM, SS, PF>
where
    LLM: LlmClient,
    SS: ScreenSessionRepository,
    PF: PreferenceRepository,
{
    async fn get_theme(&self, device_id: &str) -> Result<ThemePreference, CoreError> {
        self.preferences.get(device_id).await
    }

    async fn set_theme(&self, device_id: &str, dark_mode: bool) -> Result<ThemePreference, CoreError> {
        let preference = ThemePreference::new(dark_mode);
        self.preferences.set(device_id, preference).await?;

        tracing::debug!(device_id, dark_mode, "theme preference updated");
        Ok(preference)
    }
}
