//! Blocking client for the design tool's variables endpoint

use crate::error::{FigmaError, FigmaResult};
use crate::VariableSource;
use std::time::Duration;
use storefront_tokens::VariablesExport;
use tracing::{debug, info, warn};
use ureq::Agent;

pub const DEFAULT_API_BASE: &str = "https://api.figma.com";
pub const ACCESS_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const TOKEN_HEADER: &str = "X-Figma-Token";
const MAX_EXPORT_BYTES: u64 = 64 * 1024 * 1024;

/// Client for `GET /v1/files/{file_key}/variables/local`.
///
/// One attempt per call, no retries. The access token is checked before any
/// request is made.
#[derive(Clone)]
pub struct FigmaClient {
    agent: Agent,
    api_base: String,
    access_token: Option<String>,
}

impl FigmaClient {
    /// Create a client. An empty token counts as missing.
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            agent: build_agent(DEFAULT_TIMEOUT),
            api_base: DEFAULT_API_BASE.to_string(),
            access_token: access_token.filter(|token| !token.is_empty()),
        }
    }

    /// Read the access token from `FIGMA_ACCESS_TOKEN`
    pub fn from_env() -> Self {
        Self::new(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = build_agent(timeout);
        self
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    fn variables_url(&self, file_key: &str) -> String {
        format!("{}/v1/files/{}/variables/local", self.api_base, file_key)
    }
}

impl std::fmt::Debug for FigmaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigmaClient")
            .field("api_base", &self.api_base)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl VariableSource for FigmaClient {
    fn fetch_variables(&self, file_key: &str) -> FigmaResult<VariablesExport> {
        validate_file_key(file_key)?;
        let token = self.access_token.as_deref().ok_or(FigmaError::Configuration)?;

        let url = self.variables_url(file_key);
        info!(file_key = %file_key, "Fetching variables from Figma");

        let mut response = self
            .agent
            .get(&url)
            .header(TOKEN_HEADER, token)
            .call()
            .map_err(transport_error)?;

        let status = response.status();
        let body = response
            .body_mut()
            .with_config()
            .limit(MAX_EXPORT_BYTES)
            .read_to_string()
            .map_err(transport_error)?;

        if !status.is_success() {
            warn!(file_key = %file_key, status = status.as_u16(), "Figma API returned an error status");
            return Err(FigmaError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        debug!(file_key = %file_key, bytes = body.len(), "Received variables export");
        VariablesExport::from_json(&body).map_err(|e| FigmaError::MalformedData {
            message: e.to_string(),
        })
    }
}

/// File keys are URL path segments; anything beyond `[A-Za-z0-9_-]` is rejected
pub fn validate_file_key(file_key: &str) -> FigmaResult<()> {
    if file_key.is_empty() {
        return Err(FigmaError::MissingFileKey);
    }

    let valid = file_key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(FigmaError::InvalidFileKey {
            file_key: file_key.to_string(),
        });
    }

    Ok(())
}

fn build_agent(timeout: Duration) -> Agent {
    let config = Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build();
    Agent::new_with_config(config)
}

fn transport_error(error: ureq::Error) -> FigmaError {
    let message = match error {
        ureq::Error::Timeout(reason) => format!("timed out ({})", reason),
        other => other.to_string(),
    };
    FigmaError::Transport { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_key() {
        assert!(validate_file_key("AbC123_-xyz").is_ok());
        assert!(matches!(validate_file_key(""), Err(FigmaError::MissingFileKey)));
        assert!(matches!(
            validate_file_key("../me"),
            Err(FigmaError::InvalidFileKey { .. })
        ));
        assert!(matches!(
            validate_file_key("abc?x=1"),
            Err(FigmaError::InvalidFileKey { .. })
        ));
    }

    #[test]
    fn test_missing_token_fails_before_request() {
        // Unroutable base: reaching the network would surface as a transport error
        let client = FigmaClient::new(None).with_api_base("http://127.0.0.1:9");
        assert!(!client.has_access_token());

        let err = client.fetch_variables("abc").unwrap_err();
        assert!(matches!(err, FigmaError::Configuration));
        assert_eq!(err.to_string(), "Figma access token not configured");
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let client = FigmaClient::new(Some(String::new()));
        assert!(!client.has_access_token());
    }

    #[test]
    fn test_variables_url() {
        let client = FigmaClient::new(Some("t".into())).with_api_base("https://example.test/");
        assert_eq!(
            client.variables_url("KEY"),
            "https://example.test/v1/files/KEY/variables/local"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = FigmaClient::new(Some("secret-token".into()));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
