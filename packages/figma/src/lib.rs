//! # Storefront Figma
//!
//! Variable source for the token pipeline: fetches a file's variable export
//! from the design tool and turns it into theme CSS.

mod client;
mod error;

pub use client::{
    validate_file_key, FigmaClient, ACCESS_TOKEN_ENV, DEFAULT_API_BASE, DEFAULT_TIMEOUT,
};
pub use error::{FigmaError, FigmaResult};

use storefront_tokens::{generate_css, TokenOptions, VariablesExport};
use tracing::{info, instrument};

/// Anything that can produce a variable export for a file key
pub trait VariableSource: Send + Sync {
    fn fetch_variables(&self, file_key: &str) -> FigmaResult<VariablesExport>;
}

/// Fetch a file's variables and render them as theme CSS.
///
/// Fails as a whole or returns the full stylesheet; there is no partial output.
#[instrument(skip(source, options))]
pub fn fetch_theme_css(
    source: &dyn VariableSource,
    file_key: &str,
    options: &TokenOptions,
) -> FigmaResult<String> {
    validate_file_key(file_key)?;

    let export = source.fetch_variables(file_key)?;
    let css = generate_css(&export, options)?;

    info!(bytes = css.len(), "Generated theme CSS");
    Ok(css)
}
