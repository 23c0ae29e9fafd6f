use super::handlers::{
    get_screens::{__path_get_screens, get_screens},
    set_places_location::{__path_set_places_location, set_places_location},
};
use crate::application::{device_middleware::device_middleware, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_screens, set_places_location))]
pub struct ScreenApiDoc;

pub fn screen_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/screens", state.args.server.root_path),
            get(get_screens),
        )
        .route(
            &format!("{}/screens/places/location", state.args.server.root_path),
            put(set_places_location),
        )
        .layer(middleware::from_fn(device_middleware))
}
