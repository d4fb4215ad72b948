use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use storefront_catalogue::{CatalogueError, DisplayProduct};
use storefront_theme::Brand;

/// `GET /api/vox-movies`
pub async fn movies(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .catalogues
        .movies_json()
        .map(Json)
        .map_err(|_| ApiError::internal("Failed to load movie data"))
}

/// `GET /api/carrefour-products`
pub async fn grocery_products(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .catalogues
        .grocery_json()
        .map(Json)
        .map_err(|_| ApiError::internal("Failed to load product data"))
}

/// `GET /api/catalogue/:brand` -> normalized products
pub async fn display_products(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Result<Json<Vec<DisplayProduct>>, ApiError> {
    let brand: Brand = brand
        .parse()
        .map_err(|e: storefront_theme::ThemeError| ApiError::not_found(e.to_string()))?;

    match state.catalogues.display_products(brand) {
        Ok(products) => Ok(Json(products)),
        Err(e @ CatalogueError::Unsupported(_)) => Err(ApiError::not_found(e.to_string())),
        Err(_) => Err(ApiError::internal("Failed to load product data")),
    }
}
