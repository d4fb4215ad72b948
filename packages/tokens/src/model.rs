//! Variable export data model
//!
//! Mirrors the JSON returned by the design tool's "local variables"
//! endpoint. Maps keep document order so that generated CSS is stable
//! across runs.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Tag used by the design tool for a reference to another variable
pub const ALIAS_TAG: &str = "VARIABLE_ALIAS";

/// A full variable export: every variable plus the collections they belong to
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawExport")]
pub struct VariablesExport {
    pub variables: IndexMap<String, Variable>,
    pub collections: Vec<VariableCollection>,
}

impl VariablesExport {
    /// Parse an export from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One mode (theme variant) of a collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// A named group of variables sharing a set of modes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub default_mode_id: Option<String>,
    #[serde(default)]
    pub modes: Vec<Mode>,
}

impl VariableCollection {
    /// Single-mode collections hold theme-independent values
    pub fn is_primitive(&self) -> bool {
        self.modes.len() == 1
    }
}

/// The declared type of a variable's resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResolvedType {
    Color,
    Float,
    String,
    Boolean,
    #[serde(other)]
    Unknown,
}

/// A single design token
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
    pub variable_collection_id: String,
    pub resolved_type: ResolvedType,
    #[serde(default)]
    pub values_by_mode: IndexMap<String, VariableValue>,
}

/// RGBA quad with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// A raw per-mode value as found in the export
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum VariableValue {
    Alias { id: String },
    Color(Rgba),
    Number(f64),
    Text(String),
    Boolean(bool),
    Other(Value),
}

impl From<Value> for VariableValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(ref map) => {
                if map.get("type").and_then(Value::as_str) == Some(ALIAS_TAG) {
                    if let Some(id) = map.get("id").and_then(Value::as_str) {
                        return VariableValue::Alias { id: id.to_string() };
                    }
                }

                let channel = |name: &str| map.get(name).and_then(Value::as_f64);
                match (channel("r"), channel("g"), channel("b")) {
                    (Some(r), Some(g), Some(b)) => VariableValue::Color(Rgba {
                        r,
                        g,
                        b,
                        a: channel("a").unwrap_or(1.0),
                    }),
                    _ => VariableValue::Other(value),
                }
            }
            Value::Number(ref number) => match number.as_f64() {
                Some(n) => VariableValue::Number(n),
                None => VariableValue::Other(value),
            },
            Value::String(text) => VariableValue::Text(text),
            Value::Bool(flag) => VariableValue::Boolean(flag),
            other => VariableValue::Other(other),
        }
    }
}

impl VariableValue {
    /// String form used by the fallback resolution rule.
    /// `None` stands for an undefined value.
    pub fn to_plain_string(&self) -> Option<String> {
        match self {
            VariableValue::Alias { id } => Some(id.clone()),
            VariableValue::Color(_) => None,
            VariableValue::Number(n) => Some(format_number(*n)),
            VariableValue::Text(text) => Some(text.clone()),
            VariableValue::Boolean(flag) => Some(flag.to_string()),
            VariableValue::Other(Value::Null) => None,
            VariableValue::Other(Value::String(text)) => Some(text.clone()),
            VariableValue::Other(other) => Some(other.to_string()),
        }
    }
}

/// Shortest round-trip form without a trailing `.0`. Magnitudes outside
/// `[1e-6, 1e21)` use exponent form with an explicit sign (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if n.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
            _ => formatted,
        };
    }

    format!("{}", n)
}

// Wire layout. Variables may live at the top level or under `meta`, and
// collections may be an array or an object keyed by id.
#[derive(Deserialize)]
struct RawExport {
    #[serde(default)]
    variables: Option<IndexMap<String, Variable>>,
    #[serde(default)]
    meta: RawMeta,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawMeta {
    #[serde(default)]
    variables: Option<IndexMap<String, Variable>>,
    #[serde(default)]
    variable_collections: Option<RawCollections>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCollections {
    List(Vec<VariableCollection>),
    Keyed(IndexMap<String, VariableCollection>),
}

impl From<RawExport> for VariablesExport {
    fn from(raw: RawExport) -> Self {
        let variables = raw
            .variables
            .or(raw.meta.variables)
            .unwrap_or_default();

        let collections = match raw.meta.variable_collections {
            Some(RawCollections::List(list)) => list,
            Some(RawCollections::Keyed(map)) => map.into_values().collect(),
            None => Vec::new(),
        };

        Self {
            variables,
            collections,
        }
    }
}
