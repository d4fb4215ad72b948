use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error("Unknown brand '{0}'")]
    UnknownBrand(String),
}

/// A storefront brand. Doubles as theme name and catalogue name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    Lego,
    Lululemon,
    That,
    Vox,
    Carrefour,
}

impl Brand {
    pub const ALL: [Brand; 5] = [
        Brand::Lego,
        Brand::Lululemon,
        Brand::That,
        Brand::Vox,
        Brand::Carrefour,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Lego => "lego",
            Brand::Lululemon => "lululemon",
            Brand::That => "that",
            Brand::Vox => "vox",
            Brand::Carrefour => "carrefour",
        }
    }

    /// Brand whose dedicated page lives at `path`. The home page and other
    /// routes have no brand of their own.
    pub fn for_route(path: &str) -> Option<Brand> {
        match path {
            "/lululemon" => Some(Brand::Lululemon),
            "/vox" => Some(Brand::Vox),
            "/carrefour" => Some(Brand::Carrefour),
            "/that" => Some(Brand::That),
            _ => None,
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::ALL
            .into_iter()
            .find(|brand| brand.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownBrand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for brand in Brand::ALL {
            assert_eq!(brand.to_string().parse::<Brand>().unwrap(), brand);
        }
        assert_eq!(
            "Lego".parse::<Brand>(),
            Err(ThemeError::UnknownBrand("Lego".to_string()))
        );
    }

    #[test]
    fn test_routes() {
        assert_eq!(Brand::for_route("/vox"), Some(Brand::Vox));
        assert_eq!(Brand::for_route("/that"), Some(Brand::That));
        assert_eq!(Brand::for_route("/"), None);
        assert_eq!(Brand::for_route("/lego"), None);
    }

    #[test]
    fn test_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Brand::Carrefour).unwrap(), "\"carrefour\"");
        let brand: Brand = serde_json::from_str("\"lululemon\"").unwrap();
        assert_eq!(brand, Brand::Lululemon);
    }
}
