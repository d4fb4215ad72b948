//! # Storefront Theme
//!
//! The active brand theme as an explicit store. Components hold a
//! [`ThemeStore`] handle and subscribe to [`ThemeChange`] events instead of
//! reading ambient global state.

mod brand;
mod store;

pub use brand::{Brand, ThemeError};
pub use store::{ChangeSource, ThemeChange, ThemeSnapshot, ThemeStore};
