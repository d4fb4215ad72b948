//! # Storefront Tokens
//!
//! Converts a design-tool variable export into a themeable stylesheet of
//! CSS custom properties.
//!
//! Single-mode collections become the `:root` block. Every mode of a
//! multi-mode collection becomes a `[data-theme="<mode>"]` block, so the
//! storefront switches brands by changing one attribute.
//!
//! ```
//! use storefront_tokens::{generate_css, TokenOptions, VariablesExport};
//!
//! let export = VariablesExport::from_json(r#"{
//!     "variables": {
//!         "v1": {
//!             "id": "v1",
//!             "name": "Spacing/SM",
//!             "variableCollectionId": "c1",
//!             "resolvedType": "FLOAT",
//!             "valuesByMode": { "m1": 8 }
//!         }
//!     },
//!     "meta": {
//!         "variableCollections": [
//!             { "id": "c1", "name": "Primitives", "modes": [{ "modeId": "m1", "name": "Value" }] }
//!         ]
//!     }
//! }"#).unwrap();
//!
//! let css = generate_css(&export, &TokenOptions::default()).unwrap();
//! assert!(css.contains("--spacing-sm: 8px;"));
//! ```

pub mod classifier;
pub mod emitter;
pub mod error;
pub mod model;
pub mod naming;
pub mod resolver;

pub use classifier::{classify, Classification};
pub use emitter::{theme_selector, CustomPropertyBlock, ThemeStylesheet};
pub use error::{TokensError, TokensResult};
pub use model::{Mode, ResolvedType, Rgba, Variable, VariableCollection, VariableValue, VariablesExport};
pub use naming::{css_variable_name, theme_name};
pub use resolver::{NameTable, Resolver, Scope, TokenOptions, UNRESOLVED};

use tracing::{debug, info, instrument};

/// Build the theme stylesheet for an export.
///
/// Primitive variables are resolved before any semantic variable, and the
/// alias name table covers every variable before either pass starts.
#[instrument(skip_all, fields(variables = export.variables.len(), collections = export.collections.len()))]
pub fn build_stylesheet(export: &VariablesExport, options: &TokenOptions) -> TokensResult<ThemeStylesheet> {
    let classification = classify(&export.collections)?;
    info!(
        primitive_collections = ?classification.primitive_collections().collect::<Vec<_>>(),
        "Classified variable collections"
    );

    let mut stylesheet = ThemeStylesheet::new();
    for theme in classification.themes() {
        stylesheet.seed_theme(theme);
    }

    let names = NameTable::build(export.variables.values());
    debug!(names = names.len(), "Built alias name table");
    let resolver = Resolver::new(&names, options);

    for variable in export.variables.values() {
        if !classification.is_primitive(variable) {
            continue;
        }

        let css_name = css_variable_name(&variable.name);
        let value = variable.values_by_mode.values().next();
        let resolved = resolver.resolve(variable, &css_name, value, Scope::Primitive);
        debug!(name = %css_name, value = %resolved, "Resolved primitive variable");
        stylesheet.root_mut().set(css_name, resolved);
    }

    for variable in export.variables.values() {
        if classification.is_primitive(variable) {
            continue;
        }

        let css_name = css_variable_name(&variable.name);
        for (mode_id, value) in &variable.values_by_mode {
            let Some(theme) = classification.theme_for_mode(mode_id) else {
                debug!(name = %css_name, mode_id = %mode_id, "Skipping value for unknown mode");
                continue;
            };

            let resolved = resolver.resolve(variable, &css_name, Some(value), Scope::Semantic);
            stylesheet.seed_theme(theme).set(css_name.clone(), resolved);
        }
    }

    Ok(stylesheet)
}

/// Generate the full CSS text for an export
pub fn generate_css(export: &VariablesExport, options: &TokenOptions) -> TokensResult<String> {
    let stylesheet = build_stylesheet(export, options)?;
    Ok(stylesheet.to_css())
}
