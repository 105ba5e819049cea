//! Session state machine and whiteboard input state.

use crate::config::Config;
use crate::draw::{Color, PathCollection, Stroke};
use crate::input::mode::Mode;
use crate::input::scroll::{ScrollCoordinator, ScrollSettings, ScrollState};

/// Lifetime of the touch gesture currently being tracked.
///
/// Exactly one variant is active at a time. The active stroke lives only inside
/// `Drawing` and joins the path collection when the gesture finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No finger down
    Idle,
    /// Laying down ink
    Drawing {
        /// Stroke being drawn, not yet part of the collection
        stroke: Stroke,
    },
    /// Dragging the eraser
    Erasing,
    /// Dragging the surface while scroll mode is on
    Panning {
        /// Last finger Y position, used to compute scroll deltas
        last_y: f64,
    },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing { .. } => "drawing",
            Self::Erasing => "erasing",
            Self::Panning { .. } => "panning",
        }
    }
}

/// Whiteboard input state owned by the question screen.
///
/// Holds the committed strokes, the persistent tool mode, the per-gesture
/// session state and the scroll gate. Touch, toolbar and scroll events mutate
/// it synchronously, and any visible change raises `needs_redraw`.
pub struct InputState {
    /// Committed strokes in draw order
    pub(crate) paths: PathCollection,
    /// Current draw/erase selection
    pub(crate) mode: Mode,
    /// Current gesture session
    pub(crate) state: SessionState,
    /// Ink color for new strokes
    pub pen_color: Color,
    /// Line width for new strokes
    pub pen_width: f64,
    /// How far the eraser reaches past a stroke's bounding box
    pub erase_threshold: f64,
    /// Scroll gate and drawable height
    pub(crate) scroll: ScrollCoordinator,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates an idle whiteboard in draw mode with scrolling disabled.
    pub fn with_defaults(
        pen_color: Color,
        pen_width: f64,
        erase_threshold: f64,
        viewport_height: f64,
        scroll_settings: ScrollSettings,
    ) -> Self {
        Self {
            paths: PathCollection::new(),
            mode: Mode::Draw,
            state: SessionState::Idle,
            pen_color,
            pen_width,
            erase_threshold,
            scroll: ScrollCoordinator::new(viewport_height, scroll_settings),
            needs_redraw: true,
        }
    }

    /// Builds the whiteboard from user configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.pen_color.to_color(),
            config.drawing.stroke_width,
            config.eraser.threshold,
            config.canvas.height as f64,
            config.scroll.settings(),
        )
    }

    /// Committed strokes, for rendering and capture.
    pub fn paths(&self) -> &PathCollection {
        &self.paths
    }

    /// The stroke currently being drawn, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            SessionState::Drawing { stroke } => Some(stroke),
            _ => None,
        }
    }

    pub fn session_state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scroll(&self) -> &ScrollCoordinator {
        &self.scroll
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn scroll_mode_enabled(&self) -> bool {
        self.scroll.scroll_mode_enabled()
    }

    /// True when there is nothing on the board (no committed and no active ink).
    pub fn is_blank(&self) -> bool {
        self.paths.is_empty() && self.active_stroke().is_none()
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Updates the viewport height after layout.
    pub fn update_viewport_height(&mut self, height: f64) {
        self.scroll.set_viewport_height(height);
        self.needs_redraw = true;
    }
}
