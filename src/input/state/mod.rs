mod actions;
mod core;
mod render;
mod touch;

pub use core::{InputState, SessionState};
