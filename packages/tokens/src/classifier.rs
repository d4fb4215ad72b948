//! Collection classification
//!
//! Splits collections into primitive (one mode) and semantic (several
//! modes) and maps every mode id to the theme it feeds.

use crate::error::{TokensError, TokensResult};
use crate::model::{Variable, VariableCollection};
use crate::naming::theme_name;
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Lookup tables derived from the collections of one export
#[derive(Debug, Clone, Default)]
pub struct Classification {
    primitive_collections: IndexSet<String>,
    mode_themes: IndexMap<String, String>,
    themes: IndexSet<String>,
}

impl Classification {
    /// Whether the collection with this id has exactly one mode
    pub fn is_primitive_collection(&self, collection_id: &str) -> bool {
        self.primitive_collections.contains(collection_id)
    }

    /// Whether a variable lives in a primitive collection
    pub fn is_primitive(&self, variable: &Variable) -> bool {
        self.is_primitive_collection(&variable.variable_collection_id)
    }

    /// Theme name for a mode id, if the mode belongs to any known collection
    pub fn theme_for_mode(&self, mode_id: &str) -> Option<&str> {
        self.mode_themes.get(mode_id).map(String::as_str)
    }

    /// Every theme name in first-seen order, including themes that end up empty
    pub fn themes(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(String::as_str)
    }

    pub fn primitive_collections(&self) -> impl Iterator<Item = &str> {
        self.primitive_collections.iter().map(String::as_str)
    }
}

/// Classify collections. A collection without modes is rejected.
pub fn classify(collections: &[VariableCollection]) -> TokensResult<Classification> {
    let mut classification = Classification::default();

    for collection in collections {
        if collection.modes.is_empty() {
            return Err(TokensError::malformed(format!(
                "collection '{}' ({}) has no modes",
                collection.name, collection.id
            )));
        }

        if collection.is_primitive() {
            classification
                .primitive_collections
                .insert(collection.id.clone());
        }

        for mode in &collection.modes {
            let theme = theme_name(&mode.name);
            debug!(collection = %collection.name, mode_id = %mode.mode_id, theme = %theme, "Mapped mode to theme");
            classification.themes.insert(theme.clone());
            classification.mode_themes.insert(mode.mode_id.clone(), theme);
        }
    }

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;

    fn collection(id: &str, modes: &[(&str, &str)]) -> VariableCollection {
        VariableCollection {
            id: id.to_string(),
            name: format!("{} collection", id),
            default_mode_id: modes.first().map(|(mode_id, _)| mode_id.to_string()),
            modes: modes
                .iter()
                .map(|(mode_id, name)| Mode {
                    mode_id: mode_id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_partitions_by_mode_count() {
        let collections = vec![
            collection("primitives", &[("1:0", "Value")]),
            collection("brands", &[("2:0", "Lego"), ("2:1", "Vox Cinemas")]),
        ];

        let classification = classify(&collections).unwrap();

        assert!(classification.is_primitive_collection("primitives"));
        assert!(!classification.is_primitive_collection("brands"));
        assert_eq!(classification.theme_for_mode("2:1"), Some("vox-cinemas"));
        assert_eq!(classification.theme_for_mode("9:9"), None);
    }

    #[test]
    fn test_themes_seeded_from_every_mode() {
        let collections = vec![
            collection("primitives", &[("1:0", "Mode 1")]),
            collection("brands", &[("2:0", "Light"), ("2:1", "Dark")]),
            collection("density", &[("3:0", "Light"), ("3:1", "Compact")]),
        ];

        let classification = classify(&collections).unwrap();
        let themes: Vec<&str> = classification.themes().collect();

        assert_eq!(themes, vec!["mode-1", "light", "dark", "compact"]);
    }

    #[test]
    fn test_collection_without_modes_is_malformed() {
        let collections = vec![collection("empty", &[])];

        let err = classify(&collections).unwrap_err();
        assert!(matches!(err, TokensError::MalformedData { .. }));
        assert!(err.to_string().contains("empty"));
    }
}
