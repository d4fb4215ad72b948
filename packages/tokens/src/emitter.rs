use indexmap::IndexMap;

/// A rule made only of custom properties, kept in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPropertyBlock {
    pub selector: String,
    pub properties: IndexMap<String, String>,
}

impl CustomPropertyBlock {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: IndexMap::new(),
        }
    }

    /// Set `--name`. Re-setting a name replaces the value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn write_css(&self, css: &mut String) {
        css.push_str(&self.selector);
        css.push_str(" {\n");

        for (name, value) in &self.properties {
            css.push_str("  --");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }

        css.push_str("}\n\n");
    }
}

/// Selector scoping a theme's custom properties
pub fn theme_selector(theme: &str) -> String {
    format!("[data-theme=\"{}\"]", theme)
}

/// Theme stylesheet: a `:root` block of primitives followed by one block per theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStylesheet {
    root: CustomPropertyBlock,
    themes: IndexMap<String, CustomPropertyBlock>,
}

impl ThemeStylesheet {
    pub fn new() -> Self {
        Self {
            root: CustomPropertyBlock::new(":root"),
            themes: IndexMap::new(),
        }
    }

    pub fn root(&self) -> &CustomPropertyBlock {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut CustomPropertyBlock {
        &mut self.root
    }

    /// Create the theme block if missing; existing blocks keep their position
    pub fn seed_theme(&mut self, theme: &str) -> &mut CustomPropertyBlock {
        self.themes
            .entry(theme.to_string())
            .or_insert_with(|| CustomPropertyBlock::new(theme_selector(theme)))
    }

    pub fn theme(&self, theme: &str) -> Option<&CustomPropertyBlock> {
        self.themes.get(theme)
    }

    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Render to CSS text. Blocks are separated by a blank line; empty theme
    /// blocks are still written.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        self.root.write_css(&mut css);
        for block in self.themes.values() {
            block.write_css(&mut css);
        }

        css
    }
}

impl Default for ThemeStylesheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stylesheet() {
        assert_eq!(ThemeStylesheet::new().to_css(), ":root {\n}\n\n");
    }

    #[test]
    fn test_blocks_keep_insertion_order() {
        let mut sheet = ThemeStylesheet::new();
        sheet.root_mut().set("z-index-modal", "100");
        sheet.root_mut().set("color-accent", "hsl(0, 0%, 0%)");
        sheet.seed_theme("lego").set("background", "var(--color-accent)");
        sheet.seed_theme("vox");

        assert_eq!(
            sheet.to_css(),
            ":root {\n  --z-index-modal: 100;\n  --color-accent: hsl(0, 0%, 0%);\n}\n\n\
             [data-theme=\"lego\"] {\n  --background: var(--color-accent);\n}\n\n\
             [data-theme=\"vox\"] {\n}\n\n"
        );
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut block = CustomPropertyBlock::new(":root");
        block.set("a", "1");
        block.set("b", "2");
        block.set("a", "3");

        let names: Vec<&String> = block.properties.keys().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(block.get("a"), Some("3"));
    }
}
