use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    screen::{
        entities::{LocationOutcome, LocationState, ScreenResolution, ScreenSet, Tool},
        ports::ScreenSessionRepository,
    },
};

/// In-memory session store. Screen state never outlives the process, so a
/// mutexed map is the whole story; the lock also makes begin/finish
/// transitions atomic per call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScreenSessionRepository {
    sessions: Arc<Mutex<HashMap<String, ScreenSet>>>,
}

impl InMemoryScreenSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScreenSessionRepository for InMemoryScreenSessionRepository {
    async fn load(&self, device_id: &str) -> Result<ScreenSet, CoreError> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions
            .entry(device_id.to_string())
            .or_insert_with(ScreenSet::new)
            .clone())
    }

    async fn begin(&self, device_id: &str, tool: Tool) -> Result<(), CoreError> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(device_id.to_string())
            .or_insert_with(ScreenSet::new)
            .begin(tool)
    }

    async fn finish(&self, device_id: &str, resolution: ScreenResolution) -> Result<(), CoreError> {
        let mut sessions = self.sessions.lock().await;
        let screens = sessions.get_mut(device_id).ok_or(CoreError::NotFound)?;
        screens.finish(resolution)
    }

    async fn set_location(
        &self,
        device_id: &str,
        outcome: LocationOutcome,
    ) -> Result<ScreenSet, CoreError> {
        let mut sessions = self.sessions.lock().await;
        let screens = sessions
            .entry(device_id.to_string())
            .or_insert_with(ScreenSet::new);
        screens.set_location(outcome);
        Ok(screens.clone())
    }

    async fn location(&self, device_id: &str) -> Result<LocationState, CoreError> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions
            .entry(device_id.to_string())
            .or_insert_with(ScreenSet::new)
            .location)
    }
}
