use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{entities::ThemePreference, ports::PreferenceRepository},
};

/// JSON-file-backed theme preference store, one entry per device id. The
/// whole map is held in memory and rewritten on every set; the flag is a
/// single boolean per device, so contention and file size are non-issues.
#[derive(Debug, Clone)]
pub struct FilePreferenceRepository {
    path: PathBuf,
    cache: Arc<Mutex<HashMap<String, ThemePreference>>>,
}

impl FilePreferenceRepository {
    /// Load existing preferences from `path`, starting empty when the file
    /// does not exist yet. A corrupt file is logged and discarded rather
    /// than blocking startup.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();

        let preferences = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "discarding corrupt preference store: {e}");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(CoreError::Invalid(format!(
                    "cannot read preference store {}: {e}",
                    path.display()
                )));
            }
        };

        Ok(Self {
            path,
            cache: Arc::new(Mutex::new(preferences)),
        })
    }

    async fn persist(&self, preferences: &HashMap<String, ThemePreference>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!("failed to create preference store directory: {e}");
                CoreError::InternalServerError
            })?;
        }

        let contents = serde_json::to_string_pretty(preferences)
            .map_err(|_| CoreError::InternalServerError)?;

        tokio::fs::write(&self.path, contents).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), "failed to write preference store: {e}");
            CoreError::InternalServerError
        })
    }
}

impl PreferenceRepository for FilePreferenceRepository {
    async fn get(&self, device_id: &str) -> Result<ThemePreference, CoreError> {
        let cache = self.cache.lock().await;
        Ok(cache.get(device_id).copied().unwrap_or_default())
    }

    async fn set(&self, device_id: &str, preference: ThemePreference) -> Result<(), CoreError> {
        let mut cache = self.cache.lock().await;
        cache.insert(device_id.to_string(), preference);
        self.persist(&cache).await
    }
}
