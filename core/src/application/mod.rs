use crate::domain::common::{ZadConfig, services::Service};
use crate::infrastructure::{
    llm::GeminiLlmClient, preferences::FilePreferenceRepository,
    screen::InMemoryScreenSessionRepository,
};

/// Concrete service wiring used by the API binary.
pub type ZadService =
    Service<GeminiLlmClient, InMemoryScreenSessionRepository, FilePreferenceRepository>;

pub async fn create_service(config: ZadConfig) -> Result<ZadService, anyhow::Error> {
    let llm_client = GeminiLlmClient::new(&config.llm);
    let screen_sessions = InMemoryScreenSessionRepository::new();
    let preferences = FilePreferenceRepository::load(config.preferences.store_path).await?;

    Ok(Service::new(llm_client, screen_sessions, preferences))
}
