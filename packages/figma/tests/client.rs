//! FigmaClient against an in-process stand-in for the variables API

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
    Router,
};
use storefront_figma::{fetch_theme_css, FigmaClient, FigmaError, VariableSource};
use storefront_tokens::TokenOptions;

const EXPORT: &str = r#"{
    "status": 200,
    "error": false,
    "meta": {
        "variables": {
            "VariableID:1:1": {
                "id": "VariableID:1:1",
                "name": "Spacing/MD",
                "variableCollectionId": "c1",
                "resolvedType": "FLOAT",
                "valuesByMode": { "m1": 16 }
            }
        },
        "variableCollections": {
            "c1": { "id": "c1", "name": "Primitives", "modes": [{ "modeId": "m1", "name": "Value" }] }
        }
    }
}"#;

async fn variables(Path(file_key): Path<String>, headers: HeaderMap) -> (StatusCode, String) {
    if headers.get("x-figma-token").and_then(|v| v.to_str().ok()) != Some("test-token") {
        return (StatusCode::FORBIDDEN, r#"{"status":403,"err":"Invalid token"}"#.to_string());
    }

    match file_key.as_str() {
        "good" => (StatusCode::OK, EXPORT.to_string()),
        "garbage" => (StatusCode::OK, "not json".to_string()),
        _ => (StatusCode::NOT_FOUND, r#"{"status":404,"err":"Not found"}"#.to_string()),
    }
}

async fn spawn_api() -> String {
    let app = Router::new().route("/v1/files/:file_key/variables/local", get(variables));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn fetch(client: FigmaClient, file_key: &'static str) -> Result<String, FigmaError> {
    tokio::task::spawn_blocking(move || {
        fetch_theme_css(&client, file_key, &TokenOptions::default())
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_fetches_and_renders_export() {
    let base = spawn_api().await;
    let client = FigmaClient::new(Some("test-token".into())).with_api_base(base);

    let css = fetch(client, "good").await.unwrap();
    assert!(css.starts_with(":root {\n  --spacing-md: 16px;\n}\n\n"));
}

#[tokio::test]
async fn test_upstream_status_and_body_are_preserved() {
    let base = spawn_api().await;
    let client = FigmaClient::new(Some("wrong-token".into())).with_api_base(base.clone());

    match fetch(client, "good").await.unwrap_err() {
        FigmaError::Upstream { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("Invalid token"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }

    let client = FigmaClient::new(Some("test-token".into())).with_api_base(base);
    let err = fetch(client, "unknown").await.unwrap_err();
    assert!(err.to_string().starts_with("Figma API error: 404"));
}

#[tokio::test]
async fn test_unparsable_export_is_malformed_data() {
    let base = spawn_api().await;
    let client = FigmaClient::new(Some("test-token".into())).with_api_base(base);

    let err = fetch(client, "garbage").await.unwrap_err();
    assert!(matches!(err, FigmaError::MalformedData { .. }));
}

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = FigmaClient::new(Some("test-token".into())).with_api_base(format!("http://{}", addr));
    let err = tokio::task::spawn_blocking(move || client.fetch_variables("good"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, FigmaError::Transport { .. }));
}
