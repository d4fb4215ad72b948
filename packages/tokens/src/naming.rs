//! CSS identifier derivation for variables and themes

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Derive a theme name from a mode name: lowercased, whitespace runs hyphenated
pub fn theme_name(mode_name: &str) -> String {
    WHITESPACE
        .replace_all(&mode_name.to_lowercase(), "-")
        .into_owned()
}

/// Derive the custom-property name (without the leading `--`) for a variable
pub fn css_variable_name(variable_name: &str) -> String {
    theme_name(variable_name).replace('/', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name() {
        assert_eq!(theme_name("Light"), "light");
        assert_eq!(theme_name("High   Contrast"), "high-contrast");
        assert_eq!(theme_name("Lululemon"), "lululemon");
    }

    #[test]
    fn test_css_variable_name() {
        assert_eq!(css_variable_name("Primary/Blue"), "primary-blue");
        assert_eq!(css_variable_name("Font Size/Body LG"), "font-size-body-lg");
        assert_eq!(css_variable_name("spacing-sm"), "spacing-sm");
    }

    #[test]
    fn test_edge_whitespace_is_kept_as_hyphens() {
        assert_eq!(css_variable_name(" Radius/Card "), "-radius-card-");
    }
}
