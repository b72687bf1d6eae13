mod menu;
mod state;

pub use state::{AppState, BetField, InputAction, Scene};
