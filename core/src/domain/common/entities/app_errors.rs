use thiserror::Error;

use crate::domain::screen::entities::Tool;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Not found")]
    NotFound,

    #[error("An analysis is already in progress for this screen")]
    AnalysisPending,

    #[error("Location has not been acquired for this device")]
    LocationRequired,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Short localized message shown to the user. Transport and schema
    /// failures deliberately map to the same message per tool.
    pub fn user_message(&self, tool: Tool) -> String {
        match self {
            CoreError::ExternalServiceError(_) | CoreError::MalformedResponse(_) => match tool {
                Tool::Product => "لم نتمكن من تحليل المنتج. حاول مرة أخرى.".to_string(),
                Tool::Menu => "لم نتمكن من تحليل القائمة. تأكد من أن الصورة واضحة.".to_string(),
                Tool::Ingredient => "حدث خطأ أثناء البحث عن المكون.".to_string(),
                Tool::Places => {
                    "لم نتمكن من العثور على أماكن. حاول البحث بكلمات مختلفة.".to_string()
                }
            },
            CoreError::LocationRequired => "لا يمكن البحث بدون تحديد الموقع.".to_string(),
            other => other.to_string(),
        }
    }
}
