//! Question screen flow around the whiteboard.

use super::{QuizError, Selection};
use crate::capture::{CaptureOptions, capture_whiteboard};
use crate::config::Config;
use crate::input::InputState;
use crate::tutor::{GenerativeModel, InlineImage, Tutor, Verdict};

/// One student working through questions for a subject and class.
///
/// Owns the whiteboard. A new question, a retry or a fresh board all go
/// through here so the board, hint and verdict stay consistent.
pub struct QuizSession<M> {
    tutor: Tutor<M>,
    selection: Selection,
    board: InputState,
    capture: CaptureOptions,
    question: Option<String>,
    hint: Option<String>,
    verdict: Option<Verdict>,
}

impl<M: GenerativeModel> QuizSession<M> {
    pub fn new(
        tutor: Tutor<M>,
        selection: Selection,
        board: InputState,
        capture: CaptureOptions,
    ) -> Self {
        Self {
            tutor,
            selection,
            board,
            capture,
            question: None,
            hint: None,
            verdict: None,
        }
    }

    pub fn from_config(model: M, selection: Selection, config: &Config) -> Self {
        Self::new(
            Tutor::new(model),
            selection,
            InputState::from_config(config),
            CaptureOptions::from_config(config),
        )
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn board(&self) -> &InputState {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut InputState {
        &mut self.board
    }

    pub fn tutor(&self) -> &Tutor<M> {
        &self.tutor
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Fetches a question. On failure the previous question is dropped.
    pub async fn load_question(&mut self) -> Result<&str, QuizError> {
        self.question = None;
        let question = self
            .tutor
            .generate_question(&self.selection.subject, self.selection.class_level)
            .await?;
        log::info!("Loaded question: {}", crate::util::trunc_for_log(&question, 80));
        Ok(self.question.insert(question).as_str())
    }

    /// Asks for a hint, attaching the board when there is something on it.
    pub async fn request_hint(&mut self) -> Result<&str, QuizError> {
        let question = self.question.as_deref().ok_or(QuizError::NoQuestion)?;

        let image = if self.board.paths().is_empty() {
            None
        } else {
            match capture_whiteboard(&self.board, &self.capture) {
                Ok(captured) => Some(InlineImage::from_capture(&captured)),
                Err(e) => {
                    log::warn!("Board capture failed, asking for a general hint: {}", e);
                    None
                }
            }
        };

        let hint = self.tutor.generate_hint(question, image.as_ref()).await?;
        Ok(self.hint.insert(hint).as_str())
    }

    /// Captures the board and has the tutor grade it.
    pub async fn submit(&mut self) -> Result<&Verdict, QuizError> {
        let question = self.question.as_deref().ok_or(QuizError::NoQuestion)?;
        if self.board.paths().is_empty() {
            return Err(QuizError::NoSolution);
        }

        let captured = capture_whiteboard(&self.board, &self.capture)?;
        let image = InlineImage::from_capture(&captured);
        if !image.is_substantial() {
            return Err(QuizError::CaptureTooSmall {
                len: image.data.len(),
            });
        }

        let verdict = self.tutor.verify_answer(question, &image).await?;
        Ok(self.verdict.insert(verdict))
    }

    /// Clears the verdict and the board but keeps the question and hint.
    pub fn try_again(&mut self) {
        self.verdict = None;
        self.board.clear();
    }

    /// Resets everything and loads a new question.
    pub async fn next_question(&mut self) -> Result<&str, QuizError> {
        self.verdict = None;
        self.hint = None;
        self.board.clear();
        self.load_question().await
    }
}
