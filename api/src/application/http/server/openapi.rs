use crate::application::http::{
    analysis::router::AnalysisApiDoc, preferences::router::PreferencesApiDoc,
    screen::router::ScreenApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ZAD API"
    ),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/screens", api = ScreenApiDoc),
        (path = "/preferences", api = PreferencesApiDoc),
    )
)]
pub struct ApiDoc;
