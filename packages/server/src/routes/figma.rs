use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use storefront_figma::fetch_theme_css;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct VariablesQuery {
    #[serde(rename = "fileKey")]
    file_key: Option<String>,
}

/// `GET /api/figma-variables?fileKey=...` -> theme CSS
pub async fn theme_css(
    State(state): State<AppState>,
    Query(query): Query<VariablesQuery>,
) -> Result<Response, ApiError> {
    let file_key = query
        .file_key
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ApiError::bad_request("No fileKey provided"))?;

    let source = state.variables.clone();
    let options = state.token_options.clone();
    let css = tokio::task::spawn_blocking(move || fetch_theme_css(source.as_ref(), &file_key, &options))
        .await?
        .map_err(|e| {
            error!(error = %e, "Theme CSS generation failed");
            ApiError::from(e)
        })?;

    Ok(([(header::CONTENT_TYPE, "text/css")], css).into_response())
}

/// `POST /api/figma-variables`: acknowledges file-change notifications.
/// Nothing is regenerated; the next GET always fetches fresh data.
/// The body is parsed as JSON whatever its content type.
pub async fn webhook(body: Bytes) -> Result<Json<Value>, ApiError> {
    let body: Value =
        serde_json::from_slice(&body).map_err(|_| ApiError::bad_request("Invalid request"))?;

    let (file_key, event) = match (body.get("fileKey"), body.get("event")) {
        (Some(file_key), Some(event)) if is_truthy(file_key) && is_truthy(event) => (file_key, event),
        _ => return Err(ApiError::bad_request("Invalid webhook payload")),
    };

    info!(file_key = %file_key, event = %event, "Acknowledged webhook");
    Ok(Json(json!({ "status": "acknowledged" })))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
