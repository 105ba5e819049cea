//! Whiteboard tool mode selection.

use serde::{Deserialize, Serialize};

/// Persistent user selection deciding what a new touch does.
///
/// Independent of the session state: switching mode never interrupts a touch
/// that is already in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Touches lay down ink (default)
    #[default]
    Draw,
    /// Touches remove strokes near the finger
    Erase,
}

impl Mode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Draw => Self::Erase,
            Self::Erase => Self::Draw,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::Erase => "Erase",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draw" | "pen" => Ok(Self::Draw),
            "erase" | "eraser" => Ok(Self::Erase),
            _ => Err(()),
        }
    }
}
