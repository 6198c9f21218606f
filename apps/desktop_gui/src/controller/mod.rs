//! Controller layer: UI actions and reducer-like state transitions.

pub mod events;
pub mod reducer;
