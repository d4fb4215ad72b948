use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_theme::Brand;

pub const DEFAULT_CONFIG_NAME: &str = "storefront.config.json";

/// Server configuration file format. The Figma access token is not part of
/// it; it is read from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the design tool API
    #[serde(default = "default_figma_api_base")]
    pub figma_api_base: String,

    /// Upper bound for one upstream fetch, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Directory holding the static catalogue JSON files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub default_theme: Brand,

    /// Extra design-tool font name -> CSS font-family mappings
    #[serde(default)]
    pub font_families: IndexMap<String, String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_figma_api_base() -> String {
    storefront_figma::DEFAULT_API_BASE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    storefront_figma::DEFAULT_TIMEOUT.as_secs()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl ServerConfig {
    /// Load `storefront.config.json` from a directory, or defaults when absent
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit config file, which must exist
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read config {}: {}", path.display(), e))?;
        let config: ServerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            figma_api_base: default_figma_api_base(),
            request_timeout_secs: default_request_timeout_secs(),
            data_dir: default_data_dir(),
            default_theme: Brand::default(),
            font_families: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "port": 8080,
            "dataDir": "fixtures",
            "defaultTheme": "vox",
            "fontFamilies": { "Brand Sans": "'brand', sans-serif" }
        }"#;

        let config: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(config.default_theme, Brand::Vox);
        assert_eq!(config.font_families["Brand Sans"], "'brand', sans-serif");
        assert_eq!(config.figma_api_base, "https://api.figma.com");
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.default_theme, Brand::Lego);
        assert!(config.font_families.is_empty());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(dir.path()).unwrap();
        assert_eq!(config.port, 3000);

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "port": 4100 }"#).unwrap();
        assert_eq!(ServerConfig::load(dir.path()).unwrap().port, 4100);
    }
}
