use crate::product::{DisplayProduct, GroceryProduct, Movie, UpstreamProduct};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use storefront_theme::Brand;
use thiserror::Error;
use tracing::{debug, error};

pub const MOVIES_FILE: &str = "vox-movies.json";
pub const GROCERY_FILE: &str = "carrefour-products.json";

pub type CatalogueResult<T> = Result<T, CatalogueError>;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No static catalogue for brand '{0}'")]
    Unsupported(Brand),
}

#[derive(Deserialize)]
struct MoviesFile {
    movies: Vec<Movie>,
}

#[derive(Deserialize)]
struct GroceryFile {
    products: Vec<GroceryProduct>,
}

/// Static JSON catalogues on disk. Files are read on every call.
#[derive(Debug, Clone)]
pub struct CatalogueStore {
    data_dir: PathBuf,
}

impl CatalogueStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Raw cinema catalogue document
    pub fn movies_json(&self) -> CatalogueResult<Value> {
        self.read_json(MOVIES_FILE)
    }

    /// Raw grocery catalogue document
    pub fn grocery_json(&self) -> CatalogueResult<Value> {
        self.read_json(GROCERY_FILE)
    }

    pub fn movies(&self) -> CatalogueResult<Vec<Movie>> {
        let file: MoviesFile = self.read_json(MOVIES_FILE)?;
        Ok(file.movies)
    }

    pub fn grocery_products(&self) -> CatalogueResult<Vec<GroceryProduct>> {
        let file: GroceryFile = self.read_json(GROCERY_FILE)?;
        Ok(file.products)
    }

    /// Normalized products for a brand with a static catalogue
    pub fn display_products(&self, brand: Brand) -> CatalogueResult<Vec<DisplayProduct>> {
        let upstream: Vec<UpstreamProduct> = match brand {
            Brand::Vox => self.movies()?.into_iter().map(UpstreamProduct::Movie).collect(),
            Brand::Carrefour => self
                .grocery_products()?
                .into_iter()
                .map(UpstreamProduct::Grocery)
                .collect(),
            other => return Err(CatalogueError::Unsupported(other)),
        };

        debug!(brand = %brand, count = upstream.len(), "Normalizing catalogue");
        Ok(upstream.into_iter().map(UpstreamProduct::into_display).collect())
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, file_name: &str) -> CatalogueResult<T> {
        let path = self.data_dir.join(file_name);

        let contents = std::fs::read_to_string(&path).map_err(|source| {
            error!(path = %path.display(), error = %source, "Failed to read catalogue");
            CatalogueError::Io {
                path: path.clone(),
                source,
            }
        })?;

        serde_json::from_str(&contents).map_err(|source| {
            error!(path = %path.display(), error = %source, "Failed to parse catalogue");
            CatalogueError::Json { path, source }
        })
    }
}
