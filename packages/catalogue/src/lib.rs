//! # Storefront Catalogue
//!
//! Product records arrive in several shapes: the cinema and grocery
//! catalogues are static JSON files, the other brands come from a retail
//! search API. [`UpstreamProduct`] names every shape and converts it into
//! the single [`DisplayProduct`] the storefront renders.

mod product;
mod store;

pub use product::{
    Badge, BadgeText, BadgeVariant, DisplayProduct, GroceryProduct, Movie, PriceDetail,
    RetailBadge, RetailLinks, RetailPrice, RetailProduct, Scalar, UpstreamProduct,
    DEFAULT_CURRENCY, PLACEHOLDER_IMAGE,
};
pub use store::{CatalogueError, CatalogueResult, CatalogueStore, GROCERY_FILE, MOVIES_FILE};
