//! Seed data loading: bundled JSON consumed exactly once at startup.
//!
//! Seed entries carry the keys `id`, `name`, `id-api`, and `slug`.
//! Deserialization applies field defaults instead of validating: a
//! missing `id` or `id-api` becomes `0`, a missing `name` becomes the
//! empty string, a missing `slug` becomes `None`. Only a seed document
//! that is not valid JSON at all is a load error.

use std::{fs, path::Path};

use serde::Deserialize;
use shared::{CatalogError, Hero, HeroId};
use tracing::info;

const BUNDLED_SEED: &str = include_str!("../seed/super_heroes.json");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawHero {
    id: i64,
    name: String,
    #[serde(rename = "id-api")]
    id_api: i64,
    slug: Option<String>,
}

impl From<RawHero> for Hero {
    fn from(raw: RawHero) -> Self {
        Self {
            id: HeroId(raw.id),
            name: raw.name,
            api_id: raw.id_api,
            slug: raw.slug,
        }
    }
}

/// Parses a seed document into catalog entries, in document order.
pub fn catalog_from_str(raw: &str) -> Result<Vec<Hero>, CatalogError> {
    let entries: Vec<RawHero> = serde_json::from_str(raw)?;
    Ok(entries.into_iter().map(Hero::from).collect())
}

/// Loads an alternate seed file (the `--seed` startup override).
pub fn catalog_from_path(path: &Path) -> Result<Vec<Hero>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::SeedFile {
        path: path.display().to_string(),
        source,
    })?;
    let heroes = catalog_from_str(&raw)?;
    info!(path = %path.display(), total = heroes.len(), "loaded hero catalog from seed file");
    Ok(heroes)
}

/// Loads the seed data bundled into the binary.
pub fn bundled_catalog() -> Result<Vec<Hero>, CatalogError> {
    let heroes = catalog_from_str(BUNDLED_SEED)?;
    info!(total = heroes.len(), "loaded bundled hero catalog");
    Ok(heroes)
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
