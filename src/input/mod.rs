//! Touch handling and whiteboard session state machine.
//!
//! This module translates the host's touch, toolbar and scroll events into
//! stroke-model mutations. It keeps the persistent draw/erase mode, the
//! per-gesture session state (idle, drawing, erasing, panning) and the scroll
//! gate that decides whether a touch draws or scrolls.

pub mod events;
pub mod mode;
pub mod scroll;
pub mod state;

// Re-export commonly used types at module level
pub use events::SurfaceEvent;
pub use mode::Mode;
pub use scroll::{ScrollCoordinator, ScrollSettings, ScrollState};
pub use state::{InputState, SessionState};
