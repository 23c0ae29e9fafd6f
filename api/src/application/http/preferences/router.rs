use super::handlers::{
    get_theme::{__path_get_theme, get_theme},
    set_theme::{__path_set_theme, set_theme},
};
use crate::application::{device_middleware::device_middleware, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_theme, set_theme))]
pub struct PreferencesApiDoc;

pub fn preferences_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/preferences/theme", state.args.server.root_path),
            get(get_theme).put(set_theme),
        )
        .layer(middleware::from_fn(device_middleware))
}
