//! AI tutor: question generation, hints and grading.
//!
//! The [`Tutor`] builds prompts and interprets replies; the actual model is
//! anything implementing [`GenerativeModel`] (normally [`GeminiClient`]).

pub mod gemini;
pub mod parse;
pub mod prompts;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod tests;

pub use gemini::GeminiClient;
pub use parse::{clean_markdown, extract_json_object, parse_verdict};

use crate::capture::CapturedImage;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;

/// A base64 image attached to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload without any `data:` prefix
    pub data: String,
}

impl InlineImage {
    /// Wraps a base64 PNG, stripping a `data:image/...;base64,` prefix if present.
    pub fn from_base64(encoded: &str) -> Self {
        let (mime_type, data) = match encoded
            .strip_prefix("data:image/")
            .and_then(|rest| rest.split_once(";base64,"))
        {
            Some((subtype, payload)) => (format!("image/{subtype}"), payload),
            None => ("image/png".to_string(), encoded),
        };
        Self {
            mime_type,
            data: data.trim().to_string(),
        }
    }

    pub fn from_capture(image: &CapturedImage) -> Self {
        Self {
            mime_type: "image/png".to_string(),
            data: image.to_base64(),
        }
    }

    /// Encodes raw PNG bytes, e.g. read from disk.
    pub fn from_png(bytes: &[u8]) -> Self {
        Self {
            mime_type: "image/png".to_string(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Whether the payload is large enough to hold actual drawing.
    pub fn is_substantial(&self) -> bool {
        self.data.len() > prompts::MIN_IMAGE_PAYLOAD
    }
}

/// The tutor's judgement of a submitted solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_correct: bool,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Error)]
pub enum TutorError {
    #[error("API key not found: set the {var} environment variable")]
    MissingApiKey { var: String },

    #[error("Invalid model endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model returned an empty reply")]
    EmptyReply,

    #[error("Failed to generate question. Please check your API key and internet connection.")]
    Question(#[source] Box<TutorError>),

    #[error("Failed to generate hint. Please try again.")]
    Hint(#[source] Box<TutorError>),

    #[error("Failed to verify answer. Please try again.")]
    Verify(#[source] Box<TutorError>),
}

/// A text generation backend that optionally accepts an image.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, TutorError>;
}

#[async_trait]
impl<M: GenerativeModel + ?Sized> GenerativeModel for Box<M> {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, TutorError> {
        (**self).generate(prompt, image).await
    }
}

pub struct Tutor<M> {
    model: M,
}

impl<M: GenerativeModel> Tutor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Asks for a fresh practice question on a randomly chosen topic.
    pub async fn generate_question(
        &self,
        subject: &str,
        class_level: u8,
    ) -> Result<String, TutorError> {
        let topic = prompts::QUESTION_TOPICS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(prompts::QUESTION_TOPICS[0]);
        let request_id = chrono::Utc::now().timestamp_millis();
        log::info!(
            "Generating {} question for class {} (topic: {})",
            subject,
            class_level,
            topic
        );

        let prompt = prompts::question_prompt(subject, class_level, topic, request_id);
        let reply = self
            .model
            .generate(&prompt, None)
            .await
            .map_err(|e| TutorError::Question(Box::new(e)))?;

        let question = reply.trim().to_string();
        if question.is_empty() {
            return Err(TutorError::Question(Box::new(TutorError::EmptyReply)));
        }
        Ok(question)
    }

    /// Hint for `question`. The image is only attached when it carries real
    /// drawing; otherwise a general hint is requested.
    pub async fn generate_hint(
        &self,
        question: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, TutorError> {
        let image = image.filter(|img| img.is_substantial());
        let prompt = match image {
            Some(_) => prompts::contextual_hint_prompt(question),
            None => prompts::general_hint_prompt(question),
        };
        log::info!(
            "Requesting {} hint",
            if image.is_some() { "contextual" } else { "general" }
        );

        let reply = self
            .model
            .generate(&prompt, image)
            .await
            .map_err(|e| TutorError::Hint(Box::new(e)))?;
        Ok(clean_markdown(&reply))
    }

    /// Grades the solution drawn in `image`.
    pub async fn verify_answer(
        &self,
        question: &str,
        image: &InlineImage,
    ) -> Result<Verdict, TutorError> {
        log::info!("Verifying answer ({} base64 chars)", image.data.len());
        let prompt = prompts::verify_prompt(question);
        let reply = self
            .model
            .generate(&prompt, Some(image))
            .await
            .map_err(|e| TutorError::Verify(Box::new(e)))?;

        log::debug!("Verify reply: {}", crate::util::trunc_for_log(&reply, 300));
        let verdict = parse_verdict(&reply);
        log::info!(
            "Answer judged {}",
            if verdict.is_correct { "correct" } else { "incorrect" }
        );
        Ok(verdict)
    }
}
