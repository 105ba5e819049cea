//! Math practice whiteboard with an AI tutor.
//!
//! The whiteboard side (strokes, touch sessions, erasing, scrolling and
//! capture) is plain synchronous state driven by surface events. The tutor
//! side talks to a generative model to produce questions, hints and grades.

pub mod capture;
pub mod config;
pub mod draw;
pub mod input;
pub mod quiz;
pub mod tutor;
pub mod util;

pub use config::Config;
