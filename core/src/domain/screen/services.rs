use crate::domain::{
    analysis::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    preferences::ports::PreferenceRepository,
    screen::{
        entities::{LocationOutcome, ScreenSet},
        ports::{ScreenService, ScreenSessionRepository},
    },
};

impl<LLM, SS, PF> ScreenService for Service<LLM, SS, PF>
where
    LLM: LlmClient,
    SS: ScreenSessionRepository,
    PF: PreferenceRepository,
{
    async fn get_screens(&self, device_id: &str) -> Result<ScreenSet, CoreError> {
        self.screen_sessions.load(device_id).await
    }

    async fn set_places_location(
        &self,
        device_id: &str,
        outcome: LocationOutcome,
    ) -> Result<ScreenSet, CoreError> {
        match outcome {
            LocationOutcome::Acquired(coordinates) => {
                tracing::debug!(
                    device_id,
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "location acquired for places screen"
                );
            }
            LocationOutcome::Denied => {
                tracing::debug!(device_id, "location access denied for places screen");
            }
        }

        self.screen_sessions.set_location(device_id, outcome).await
    }
}
