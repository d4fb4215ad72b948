use crate::config::ServerConfig;
use std::sync::Arc;
use std::time::Duration;
use storefront_catalogue::CatalogueStore;
use storefront_figma::{FigmaClient, VariableSource};
use storefront_theme::ThemeStore;
use storefront_tokens::TokenOptions;

/// State shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub variables: Arc<dyn VariableSource>,
    pub token_options: Arc<TokenOptions>,
    pub catalogues: CatalogueStore,
    pub themes: ThemeStore,
}

impl AppState {
    pub fn new(variables: Arc<dyn VariableSource>, catalogues: CatalogueStore, themes: ThemeStore) -> Self {
        Self {
            variables,
            token_options: Arc::new(TokenOptions::default()),
            catalogues,
            themes,
        }
    }

    pub fn with_token_options(mut self, options: TokenOptions) -> Self {
        self.token_options = Arc::new(options);
        self
    }

    /// Build the production state. `access_token` is the Figma token read
    /// from the environment at startup.
    pub fn from_config(config: &ServerConfig, access_token: Option<String>) -> Self {
        let client = FigmaClient::new(access_token)
            .with_api_base(config.figma_api_base.clone())
            .with_timeout(Duration::from_secs(config.request_timeout_secs));

        let options = TokenOptions::default().with_font_families(config.font_families.clone());

        Self::new(
            Arc::new(client),
            CatalogueStore::new(config.data_dir.clone()),
            ThemeStore::new(config.default_theme),
        )
        .with_token_options(options)
    }
}
