//! View-model core for the hero catalog page.
//!
//! Owns the interaction state (search text, sort mode, selection,
//! counter) and the catalog itself, and derives the displayed list as a
//! pure function of that state. Rendering lives in `apps/desktop_gui`;
//! nothing here touches the UI toolkit.

use std::cmp::Ordering;

use shared::{Hero, HeroId, SortMode};
use tracing::debug;

pub mod seed;

pub use seed::{bundled_catalog, catalog_from_path, catalog_from_str};

/// Text published to the host window title whenever the counter changes.
pub fn counter_title(counter: i64) -> String {
    format!("Compteur : {counter}")
}

/// Case-insensitive name ordering approximating the original page's
/// locale comparison. Equal keys fall through to the raw name, and the
/// sort itself is stable, so ties keep a deterministic order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Every hero whose name contains the trimmed, lowercased search text,
/// in catalog order. An empty or whitespace-only query returns the
/// catalog unchanged.
pub fn derive_filtered(catalog: &[Hero], search: &str) -> Vec<Hero> {
    let q = search.trim().to_lowercase();
    if q.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|hero| hero.name.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

/// A new sequence sorted under the active key; the input is never
/// mutated in place.
pub fn derive_sorted(filtered: &[Hero], sort_mode: SortMode) -> Vec<Hero> {
    let mut sorted = filtered.to_vec();
    match sort_mode {
        SortMode::ByName => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::ById => sorted.sort_by_key(|hero| hero.id),
    }
    sorted
}

/// Mutable interaction state owned by the catalog view.
///
/// The catalog sequence is loaded once at construction and never added
/// to or removed from afterwards. The selection is stored as a
/// [`HeroId`] and resolved against the catalog on demand.
pub struct CatalogState {
    heroes: Vec<Hero>,
    search: String,
    sort_mode: SortMode,
    selected: Option<HeroId>,
    counter: i64,
}

impl CatalogState {
    pub fn new(heroes: Vec<Hero>) -> Self {
        debug!(total = heroes.len(), "catalog state initialised");
        Self {
            heroes,
            search: String::new(),
            sort_mode: SortMode::default(),
            selected: None,
            counter: 0,
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Total catalog size, independent of filtering.
    pub fn total(&self) -> usize {
        self.heroes.len()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces the search text verbatim; trimming and case folding
    /// happen at derivation time only.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.sort_mode = sort_mode;
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub fn set_counter(&mut self, counter: i64) {
        self.counter = counter;
    }

    pub fn increment(&mut self) {
        self.counter += 1;
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    /// Marks the given hero as selected. No containment check is
    /// performed; an id absent from the catalog simply resolves to no
    /// detail panel.
    pub fn select(&mut self, id: HeroId) {
        self.selected = Some(id);
    }

    pub fn selected(&self) -> Option<HeroId> {
        self.selected
    }

    pub fn selected_hero(&self) -> Option<&Hero> {
        let id = self.selected?;
        self.heroes.iter().find(|hero| hero.id == id)
    }

    /// The currently-displayed list: filtered by the search text, then
    /// sorted under the active key. Pure function of the current state,
    /// recomputed on demand.
    pub fn displayed(&self) -> Vec<Hero> {
        derive_sorted(&derive_filtered(&self.heroes, &self.search), self.sort_mode)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
