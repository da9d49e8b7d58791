// Rusted Input: per-tick keyboard, mouse and controller state
//
// See `engine::input` for the trackers and the `InputHub` that drives them.

pub mod core;
pub mod engine;

pub use engine::input::{InputError, InputHub};
