//! Practice sessions: pick a subject, answer on the whiteboard, get graded.

pub mod catalog;
pub mod session;

pub use catalog::{Catalog, Selection};
pub use session::QuizSession;

use crate::capture::CaptureError;
use crate::tutor::TutorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("{0} is coming soon")]
    InactiveSubject(String),

    #[error("Class {0} is not offered")]
    UnknownClass(u8),

    #[error("No question loaded yet")]
    NoQuestion,

    #[error("Please draw your solution on the whiteboard before submitting.")]
    NoSolution,

    #[error("Failed to capture canvas properly - image too small ({len} base64 chars)")]
    CaptureTooSmall { len: usize },

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Tutor(#[from] TutorError),
}
