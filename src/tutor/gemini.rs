//! Google Gemini `generateContent` client.

use super::{GenerativeModel, InlineImage, TutorError};
use crate::config::TutorConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Header carrying the API key; the key never goes into the URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TutorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mathpad/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Builds a client, reading the API key from the configured environment variable.
    pub fn from_config(config: &TutorConfig) -> Result<Self, TutorError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TutorError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;
        Self::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> Result<Url, TutorError> {
        Ok(Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        ))?)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    Image {
        #[serde(rename = "inlineData")]
        inline_data: Blob<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Blob<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
}

fn build_request<'a>(prompt: &'a str, image: Option<&'a InlineImage>) -> GenerateRequest<'a> {
    let mut parts = vec![Part::Text { text: prompt }];
    if let Some(image) = image {
        parts.push(Part::Image {
            inline_data: Blob {
                mime_type: &image.mime_type,
                data: &image.data,
            },
        });
    }
    GenerateRequest {
        contents: vec![Content {
            role: "user",
            parts,
        }],
    }
}

/// Joined text parts of the first candidate.
fn reply_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Pulls `error.message` out of a Gemini error body.
fn extract_api_error(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorWrap {
        error: ErrorBody,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorWrap>(body)
        .ok()
        .map(|wrap| wrap.error.message)
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, TutorError> {
        log::debug!(
            "Gemini request: model={} prompt_chars={} image={}",
            self.model,
            prompt.len(),
            image.is_some()
        );

        let response = self
            .client
            .post(self.endpoint()?)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&build_request(prompt, image))
            .send()
            .await
            .map_err(|e| TutorError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_api_error(&body).unwrap_or(body);
            log::error!("Gemini returned HTTP {}: {}", status, message);
            return Err(TutorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| TutorError::Http(e.without_url()))?;
        if let Some(usage) = &body.usage_metadata {
            log::debug!(
                "Gemini usage: prompt_tokens={:?} reply_tokens={:?}",
                usage.prompt_token_count,
                usage.candidates_token_count
            );
        }
        reply_text(body).ok_or(TutorError::EmptyReply)
    }
}
