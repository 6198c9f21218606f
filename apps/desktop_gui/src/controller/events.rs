//! User actions dispatched from the rendered page to the reducer.

use shared::{HeroId, SortMode};

/// One discrete user-triggered event. Each variant maps to exactly one
/// state transition in [`super::reducer::apply_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    SearchChanged(String),
    SortModeChanged(SortMode),
    HeroSelected(HeroId),
    CounterIncremented,
    CounterReset,
}
