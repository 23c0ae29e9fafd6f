use super::handlers::{
    MAX_IMAGE_SIZE,
    analyze_menu_image::{__path_analyze_menu_image, analyze_menu_image},
    analyze_product_image::{__path_analyze_product_image, analyze_product_image},
    find_places_nearby::{__path_find_places_nearby, find_places_nearby},
    get_ingredient_info::{__path_get_ingredient_info, get_ingredient_info},
};
use crate::application::{device_middleware::device_middleware, http::server::app_state::AppState};
use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_product_image,
    analyze_menu_image,
    get_ingredient_info,
    find_places_nearby
))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/product", state.args.server.root_path),
            post(analyze_product_image),
        )
        .route(
            &format!("{}/analysis/menu", state.args.server.root_path),
            post(analyze_menu_image),
        )
        .route(
            &format!("{}/analysis/ingredient", state.args.server.root_path),
            post(get_ingredient_info),
        )
        .route(
            &format!("{}/analysis/places", state.args.server.root_path),
            post(find_places_nearby),
        )
        .layer(middleware::from_fn(device_middleware))
        // The default axum body limit (2MB) would reject images the handlers
        // are meant to accept.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE))
}
