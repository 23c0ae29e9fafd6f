use crate::domain::{
    analysis::ports::LlmClient, preferences::ports::PreferenceRepository,
    screen::ports::ScreenSessionRepository,
};

/// Service container wired over the domain ports. Concrete adapters are
/// plugged in by [`crate::application::create_service`]; tests plug in mocks.
#[derive(Debug, Clone)]
pub struct Service<LLM, SS, PF>
where
    LLM: LlmClient,
    SS: ScreenSessionRepository,
    PF: PreferenceRepository,
{
    pub(crate) llm_client: LLM,
    pub(crate) screen_sessions: SS,
    pub(crate) preferences: PF,
}

impl<LLM, SS, PF> Service<LLM, SS, PF>
where
    LLM: LlmClient,
    SS: ScreenSessionRepository,
    PF: PreferenceRepository,
{
    pub fn new(llm_client: LLM, screen_sessions: SS, preferences: PF) -> Self {
        Self {
            llm_client,
            screen_sessions,
            preferences,
        }
    }
}
