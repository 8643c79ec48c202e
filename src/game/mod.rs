//! Game module - ownership of the live world

mod state;

pub use state::WorldState;
