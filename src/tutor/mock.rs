//! In-process model used by tutor and quiz tests.

use super::{GenerativeModel, InlineImage, TutorError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted model that records every prompt it receives.
#[derive(Default)]
pub(crate) struct MockModel {
    replies: Mutex<VecDeque<Result<String, TutorError>>>,
    pub(crate) calls: Mutex<Vec<(String, Option<InlineImage>)>>,
}

impl MockModel {
    pub(crate) fn replying(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| Ok(r.to_string())).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        let mut replies = VecDeque::new();
        replies.push_back(Err(TutorError::Api {
            status: 500,
            message: "backend unavailable".to_string(),
        }));
        Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn last_call(&self) -> (String, Option<InlineImage>) {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, TutorError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), image.cloned()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TutorError::EmptyReply))
    }
}
