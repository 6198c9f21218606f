//! Domain value types and error taxonomy shared across the workspace.

pub mod domain;
pub mod error;

pub use domain::{Hero, HeroId, SortMode};
pub use error::CatalogError;
