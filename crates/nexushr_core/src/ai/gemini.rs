//! Gemini-backed assistant implementation.
//!
//! # Responsibility
//! - Issue one `generateContent` request per question against the Gemini
//!   REST API and extract the plain-text answer.
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: the API credential. Absent or empty means the
//!   assistant runs in unconfigured mode and answers with the missing-key
//!   fallback without touching the network.

use log::{error, info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

use super::{Assistant, EMPTY_FALLBACK, ERROR_FALLBACK, MISSING_KEY_FALLBACK};

/// Environment variable holding the API credential.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SYSTEM_INSTRUCTION: &str = "You are a helpful, professional, and empathetic HR assistant \
named 'Nexus AI'. You assist HR managers with drafting emails, policy explanations, job \
descriptions, and general HR advice. Keep responses concise and formatted with Markdown.";

#[derive(Debug)]
enum AiError {
    Http(reqwest::Error),
    Status { code: u16 },
    NoCandidates,
}

impl Display for AiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "{err}"),
            Self::Status { code } => write!(f, "remote service returned HTTP {code}"),
            Self::NoCandidates => write!(f, "remote response carried no candidates"),
        }
    }
}

impl Error for AiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Status { .. } => None,
            Self::NoCandidates => None,
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini `generateContent` client with fail-soft semantics.
pub struct GeminiAssistant {
    client: Client,
    api_key: Option<String>,
}

impl GeminiAssistant {
    /// Builds an assistant from `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::with_api_key(std::env::var(ENV_API_KEY).ok())
    }

    /// Builds an assistant with an explicit (possibly absent) credential.
    ///
    /// An empty or whitespace-only key counts as unconfigured.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Returns whether a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn request(&self, api_key: &str, prompt: &str) -> Result<String, AiError> {
        let body = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(format!("{ENDPOINT_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Status {
                code: status.as_u16(),
            });
        }

        let parsed: GenerateContentResponse = response.json()?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .ok_or(AiError::NoCandidates)?;

        Ok(text)
    }
}

impl Assistant for GeminiAssistant {
    fn ask(&self, prompt: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("event=ai_ask module=ai status=skipped error_code=missing_credential");
            return MISSING_KEY_FALLBACK.to_string();
        };

        let started_at = Instant::now();
        match self.request(api_key, prompt) {
            Ok(text) if text.trim().is_empty() => {
                warn!(
                    "event=ai_ask module=ai status=empty duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                EMPTY_FALLBACK.to_string()
            }
            Ok(text) => {
                info!(
                    "event=ai_ask module=ai status=ok duration_ms={} chars={}",
                    started_at.elapsed().as_millis(),
                    text.chars().count()
                );
                text
            }
            Err(err) => {
                error!(
                    "event=ai_ask module=ai status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                ERROR_FALLBACK.to_string()
            }
        }
    }
}
