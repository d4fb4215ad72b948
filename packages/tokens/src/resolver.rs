//! Value resolution
//!
//! Turns one raw per-mode value into a CSS-ready fragment. Resolution never
//! fails: anything that cannot be resolved becomes the `initial` keyword so
//! one bad token cannot block the rest of the stylesheet.

use crate::model::{format_number, ResolvedType, Rgba, Variable, VariableValue};
use crate::naming::css_variable_name;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// CSS keyword emitted for values that cannot be resolved
pub const UNRESOLVED: &str = "initial";

/// Substrings of a variable name that make a FLOAT a pixel length
const PX_NAME_HINTS: [&str; 4] = ["font-size", "font/size", "spacing", "radius"];

/// Whether a variable is resolved as a theme-independent primitive or
/// as a per-theme semantic value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Primitive,
    Semantic,
}

/// Options that tune resolution
#[derive(Debug, Clone)]
pub struct TokenOptions {
    font_families: IndexMap<String, String>,
}

impl TokenOptions {
    pub fn new() -> Self {
        let font_families = [
            ("Test Calibre", "'Calibre', Arial, sans-serif"),
            ("FONTSPRING DEMO - Cera Pro", "'Cera Pro', Arial, sans-serif"),
            ("Aktiv Grotesk", "'aktiv', Arial, sans-serif"),
        ]
        .into_iter()
        .map(|(design, local)| (design.to_string(), local.to_string()))
        .collect();

        Self { font_families }
    }

    /// Add or replace a design-tool font family mapping
    pub fn with_font_family(mut self, design_name: impl Into<String>, css_value: impl Into<String>) -> Self {
        self.font_families.insert(design_name.into(), css_value.into());
        self
    }

    /// Merge a batch of mappings over the current table
    pub fn with_font_families<I, K, V>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (design_name, css_value) in families {
            self.font_families.insert(design_name.into(), css_value.into());
        }
        self
    }

    /// Local font-family value for a design-tool font name.
    /// Unmapped names are quoted as-is.
    pub fn font_family(&self, design_name: &str) -> String {
        self.font_families
            .get(design_name)
            .cloned()
            .unwrap_or_else(|| format!("\"{}\"", design_name))
    }
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Variable id -> CSS custom-property name, built up front so aliases
/// resolve regardless of processing order
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: IndexMap<String, String>,
}

impl NameTable {
    pub fn build<'a>(variables: impl IntoIterator<Item = &'a Variable>) -> Self {
        let names = variables
            .into_iter()
            .map(|variable| (variable.id.clone(), css_variable_name(&variable.name)))
            .collect();
        Self { names }
    }

    pub fn get(&self, variable_id: &str) -> Option<&str> {
        self.names.get(variable_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Resolves raw values against one export's name table
pub struct Resolver<'a> {
    names: &'a NameTable,
    options: &'a TokenOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(names: &'a NameTable, options: &'a TokenOptions) -> Self {
        Self { names, options }
    }

    /// Resolve one value of `variable`. `css_name` is the variable's derived
    /// custom-property name; `value` is `None` when the mode has no value.
    pub fn resolve(
        &self,
        variable: &Variable,
        css_name: &str,
        value: Option<&VariableValue>,
        scope: Scope,
    ) -> String {
        let Some(value) = value else {
            debug!(variable = %variable.name, "Missing value, emitting initial");
            return UNRESOLVED.to_string();
        };

        if let VariableValue::Alias { id } = value {
            return self.resolve_alias(css_name, id);
        }

        match variable.resolved_type {
            ResolvedType::Color => match value {
                VariableValue::Color(color) => color_to_hsl(color),
                _ => {
                    warn!(variable = %variable.name, "COLOR variable without a color value");
                    UNRESOLVED.to_string()
                }
            },
            ResolvedType::Float => match value {
                VariableValue::Number(n) => with_length_unit(css_name, *n),
                other => plain(other),
            },
            ResolvedType::String => self.resolve_string(css_name, value, scope),
            ResolvedType::Boolean | ResolvedType::Unknown => plain(value),
        }
    }

    fn resolve_alias(&self, css_name: &str, target_id: &str) -> String {
        match self.names.get(target_id) {
            Some(target) => format!("var(--{})", target),
            None => {
                warn!(variable = %css_name, target = %target_id, "Unresolved alias, emitting initial");
                UNRESOLVED.to_string()
            }
        }
    }

    fn resolve_string(&self, css_name: &str, value: &VariableValue, scope: Scope) -> String {
        let Some(text) = value.to_plain_string() else {
            return UNRESOLVED.to_string();
        };

        match scope {
            Scope::Semantic if css_name.contains("font-weight") => font_weight(&text).to_string(),
            Scope::Semantic if css_name.contains("font-family") => self.options.font_family(&text),
            Scope::Semantic => text,
            Scope::Primitive if text.contains(' ') => format!("\"{}\"", text),
            Scope::Primitive => text,
        }
    }
}

fn plain(value: &VariableValue) -> String {
    value
        .to_plain_string()
        .unwrap_or_else(|| UNRESOLVED.to_string())
}

/// Append `px` to lengths whose names mark them as font sizes, spacing or radii
pub fn with_length_unit(css_name: &str, value: f64) -> String {
    let number = format_number(value);
    if PX_NAME_HINTS.iter().any(|hint| css_name.contains(hint)) {
        format!("{}px", number)
    } else {
        number
    }
}

/// Numeric CSS weight for a named font weight; unknown names map to 400
pub fn font_weight(name: &str) -> u16 {
    match name {
        "Thin" => 100,
        "ExtraLight" => 200,
        "Light" => 300,
        "Regular" | "Normal" => 400,
        "Medium" => 500,
        "SemiBold" => 600,
        "Bold" => 700,
        "ExtraBold" | "XBold" => 800,
        "Black" | "Heavy" => 900,
        _ => 400,
    }
}

/// Convert an RGBA quad to `hsl(h, s%, l%)`. Alpha is not emitted.
pub fn color_to_hsl(color: &Rgba) -> String {
    let Rgba { r, g, b, .. } = *color;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s)
    };

    format!(
        "hsl({}, {}%, {}%)",
        (h * 360.0).round(),
        (s * 100.0).round(),
        (l * 100.0).round()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: f64, g: f64, b: f64) -> Rgba {
        Rgba { r, g, b, a: 1.0 }
    }

    fn variable(name: &str, resolved_type: ResolvedType) -> Variable {
        Variable {
            id: format!("VariableID:{}", name),
            name: name.to_string(),
            key: None,
            variable_collection_id: "C:1".to_string(),
            resolved_type,
            values_by_mode: IndexMap::new(),
        }
    }

    #[test]
    fn test_achromatic_colors() {
        assert_eq!(color_to_hsl(&rgba(0.5, 0.5, 0.5)), "hsl(0, 0%, 50%)");
        assert_eq!(color_to_hsl(&rgba(0.0, 0.0, 0.0)), "hsl(0, 0%, 0%)");
        assert_eq!(color_to_hsl(&rgba(1.0, 1.0, 1.0)), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_chromatic_colors() {
        assert_eq!(color_to_hsl(&rgba(1.0, 0.0, 0.0)), "hsl(0, 100%, 50%)");
        assert_eq!(color_to_hsl(&rgba(0.0, 1.0, 0.0)), "hsl(120, 100%, 50%)");
        assert_eq!(color_to_hsl(&rgba(0.0, 0.0, 1.0)), "hsl(240, 100%, 50%)");
        // red max with blue above green wraps around the hue circle
        assert_eq!(color_to_hsl(&rgba(1.0, 0.0, 0.5)), "hsl(330, 100%, 50%)");
        assert_eq!(color_to_hsl(&rgba(0.0, 0.33, 0.8)), "hsl(215, 100%, 40%)");
    }

    #[test]
    fn test_alpha_is_dropped() {
        let translucent = Rgba {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 0.2,
        };
        assert_eq!(color_to_hsl(&translucent), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_length_units() {
        assert_eq!(with_length_unit("spacing-sm", 8.0), "8px");
        assert_eq!(with_length_unit("radius-card", 4.0), "4px");
        assert_eq!(with_length_unit("font-size-body", 16.0), "16px");
        assert_eq!(with_length_unit("line-height", 1.5), "1.5");
        assert_eq!(with_length_unit("opacity-disabled", 0.4), "0.4");
    }

    #[test]
    fn test_font_weights() {
        assert_eq!(font_weight("SemiBold"), 600);
        assert_eq!(font_weight("XBold"), 800);
        assert_eq!(font_weight("Heavy"), 900);
        assert_eq!(font_weight("semibold"), 400);
        assert_eq!(font_weight("Chunky"), 400);
    }

    #[test]
    fn test_font_family_table() {
        let options = TokenOptions::default().with_font_family("Brand Sans", "'brand', sans-serif");
        assert_eq!(
            options.font_family("Aktiv Grotesk"),
            "'aktiv', Arial, sans-serif"
        );
        assert_eq!(options.font_family("Brand Sans"), "'brand', sans-serif");
        assert_eq!(options.font_family("Comic Neue"), "\"Comic Neue\"");
    }

    #[test]
    fn test_alias_resolution() {
        let target = variable("Primary/Blue", ResolvedType::Color);
        let names = NameTable::build([&target]);
        assert_eq!(names.len(), 1);
        assert!(!names.is_empty());
        assert_eq!(names.get(&target.id), Some("primary-blue"));
        let options = TokenOptions::default();
        let resolver = Resolver::new(&names, &options);
        let aliasing = variable("Background Color", ResolvedType::Color);

        let found = VariableValue::Alias {
            id: target.id.clone(),
        };
        let missing = VariableValue::Alias {
            id: "VariableID:nowhere".to_string(),
        };

        assert_eq!(
            resolver.resolve(&aliasing, "background-color", Some(&found), Scope::Semantic),
            "var(--primary-blue)"
        );
        assert_eq!(
            resolver.resolve(&aliasing, "background-color", Some(&missing), Scope::Semantic),
            "initial"
        );
    }

    #[test]
    fn test_string_rules_depend_on_scope() {
        let names = NameTable::default();
        let options = TokenOptions::default();
        let resolver = Resolver::new(&names, &options);
        let weight = variable("Font Weight/Heading", ResolvedType::String);
        let family = variable("Font Family/Body", ResolvedType::String);
        let semibold = VariableValue::Text("SemiBold".to_string());
        let font = VariableValue::Text("Test Calibre".to_string());

        assert_eq!(
            resolver.resolve(&weight, "font-weight-heading", Some(&semibold), Scope::Semantic),
            "600"
        );
        assert_eq!(
            resolver.resolve(&family, "font-family-body", Some(&font), Scope::Semantic),
            "'Calibre', Arial, sans-serif"
        );
        assert_eq!(
            resolver.resolve(&family, "font-family-body", Some(&font), Scope::Primitive),
            "\"Test Calibre\""
        );
        assert_eq!(
            resolver.resolve(&weight, "font-weight-heading", Some(&semibold), Scope::Primitive),
            "SemiBold"
        );
    }

    #[test]
    fn test_fallbacks_degrade_to_initial() {
        let names = NameTable::default();
        let options = TokenOptions::default();
        let resolver = Resolver::new(&names, &options);
        let color = variable("Brand", ResolvedType::Color);
        let flag = variable("Enabled", ResolvedType::Boolean);

        assert_eq!(resolver.resolve(&color, "brand", None, Scope::Primitive), "initial");
        assert_eq!(
            resolver.resolve(&color, "brand", Some(&VariableValue::Number(3.0)), Scope::Primitive),
            "initial"
        );
        assert_eq!(
            resolver.resolve(&flag, "enabled", Some(&VariableValue::Boolean(false)), Scope::Semantic),
            "false"
        );
        assert_eq!(
            resolver.resolve(
                &flag,
                "enabled",
                Some(&VariableValue::Other(serde_json::Value::Null)),
                Scope::Semantic
            ),
            "initial"
        );
    }
}
