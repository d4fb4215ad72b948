use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storefront_theme::{Brand, ThemeSnapshot};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct ThemeUpdate {
    theme: Option<String>,
    catalogue: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RouteSync {
    path: String,
}

#[derive(Debug, Serialize)]
pub struct RouteSyncResponse {
    applied: bool,
    theme: Brand,
}

/// `GET /api/theme`
pub async fn current(State(state): State<AppState>) -> Json<ThemeSnapshot> {
    Json(state.themes.snapshot())
}

/// `POST /api/theme` with `{ "theme"?, "catalogue"? }`
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<ThemeUpdate>, JsonRejection>,
) -> Result<Json<ThemeSnapshot>, ApiError> {
    let Json(update) = payload.map_err(|_| ApiError::bad_request("Invalid request"))?;

    // Validate both before applying either
    let theme = update.theme.as_deref().map(parse_brand).transpose()?;
    let catalogue = update.catalogue.as_deref().map(parse_brand).transpose()?;

    if let Some(theme) = theme {
        state.themes.set_theme(theme);
    }
    if let Some(catalogue) = catalogue {
        state.themes.set_catalogue(catalogue);
    }

    Ok(Json(state.themes.snapshot()))
}

/// `POST /api/theme/route` with `{ "path" }`
pub async fn sync_route(
    State(state): State<AppState>,
    payload: Result<Json<RouteSync>, JsonRejection>,
) -> Result<Json<RouteSyncResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::bad_request("Invalid request"))?;

    let applied = state.themes.sync_route(&request.path).is_some();
    Ok(Json(RouteSyncResponse {
        applied,
        theme: state.themes.theme(),
    }))
}

/// `GET /api/theme/events`: theme changes as Server-Sent Events
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = state.themes.subscribe();
    debug!(subscribers = state.themes.subscriber_count(), "Theme event stream opened");

    let changes = BroadcastStream::new(receiver).filter_map(|change| match change {
        Ok(change) => Some(Event::default().event("theme-change").json_data(change)),
        Err(lagged) => {
            warn!(error = %lagged, "Theme event subscriber lagged");
            None
        }
    });

    Sse::new(changes).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)).text("ping"))
}

fn parse_brand(name: &str) -> Result<Brand, ApiError> {
    name.parse().map_err(|e: storefront_theme::ThemeError| ApiError::bad_request(e.to_string()))
}
