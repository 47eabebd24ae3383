//! Core conversation rule engine
//!
//! Implements the Elm Architecture pattern: `respond` is a pure function
//! from (menu state, input) to a reply, a next state, and a list of
//! effects for the caller to execute.

mod catalog;
mod effect;
mod normalize;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use catalog::{ContactInfo, ResponseCatalog};
pub use effect::Effect;
pub use normalize::{is_farewell, normalize};
pub use state::MenuState;
pub use transition::{respond, Turn};
