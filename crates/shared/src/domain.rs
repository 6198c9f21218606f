use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(HeroId);

/// One catalog entry, constructed once at startup and never mutated.
///
/// `api_id` is the hero's identifier in an external API (seed key
/// `"id-api"`); it is carried as an opaque pass-through. `slug` is a
/// short-form name that nothing currently reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub api_id: i64,
    pub slug: Option<String>,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>, api_id: i64, slug: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            api_id,
            slug,
        }
    }
}

/// Active key for the displayed-list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    ByName,
    ById,
}
