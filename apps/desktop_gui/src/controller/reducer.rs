//! Reducer mapping each user action to a state transition.
//!
//! All mutation of the catalog state funnels through here; the UI only
//! collects actions during the frame and applies them afterwards.

use catalog_core::CatalogState;
use tracing::debug;

use crate::controller::events::CatalogAction;

pub fn apply_action(state: &mut CatalogState, action: CatalogAction) {
    let action_name = match &action {
        CatalogAction::SearchChanged(_) => "search_changed",
        CatalogAction::SortModeChanged(_) => "sort_mode_changed",
        CatalogAction::HeroSelected(_) => "hero_selected",
        CatalogAction::CounterIncremented => "counter_incremented",
        CatalogAction::CounterReset => "counter_reset",
    };
    debug!(action = action_name, "applying ui action");

    match action {
        CatalogAction::SearchChanged(text) => state.set_search(text),
        CatalogAction::SortModeChanged(sort_mode) => state.set_sort_mode(sort_mode),
        CatalogAction::HeroSelected(id) => state.select(id),
        CatalogAction::CounterIncremented => state.increment(),
        CatalogAction::CounterReset => state.reset_counter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Hero, HeroId, SortMode};

    fn state() -> CatalogState {
        CatalogState::new(vec![
            Hero::new(HeroId(1), "Batman", 70, None),
            Hero::new(HeroId(2), "Superman", 644, None),
        ])
    }

    #[test]
    fn search_changed_replaces_text_verbatim() {
        let mut state = state();
        apply_action(&mut state, CatalogAction::SearchChanged(" Bat ".into()));
        assert_eq!(state.search(), " Bat ");
    }

    #[test]
    fn hero_selected_updates_only_the_selection() {
        let mut state = state();
        apply_action(&mut state, CatalogAction::SearchChanged("man".into()));
        apply_action(&mut state, CatalogAction::HeroSelected(HeroId(2)));

        assert_eq!(state.selected(), Some(HeroId(2)));
        assert_eq!(state.search(), "man");
        assert_eq!(state.sort_mode(), SortMode::ByName);
        assert_eq!(state.counter(), 0);
    }

    #[test]
    fn counter_actions_increment_and_reset() {
        let mut state = state();
        apply_action(&mut state, CatalogAction::CounterIncremented);
        apply_action(&mut state, CatalogAction::CounterIncremented);
        assert_eq!(state.counter(), 2);

        apply_action(&mut state, CatalogAction::CounterReset);
        assert_eq!(state.counter(), 0);
    }

    #[test]
    fn sort_mode_changed_switches_the_displayed_order() {
        let mut state = state();
        apply_action(&mut state, CatalogAction::SortModeChanged(SortMode::ById));
        assert_eq!(state.sort_mode(), SortMode::ById);
    }
}
