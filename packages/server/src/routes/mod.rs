pub mod catalogue;
pub mod figma;
pub mod theme;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/figma-variables", get(figma::theme_css).post(figma::webhook))
        .route("/api/vox-movies", get(catalogue::movies))
        .route("/api/carrefour-products", get(catalogue::grocery_products))
        .route("/api/catalogue/:brand", get(catalogue::display_products))
        .route("/api/theme", get(theme::current).post(theme::update))
        .route("/api/theme/route", post(theme::sync_route))
        .route("/api/theme/events", get(theme::events))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
