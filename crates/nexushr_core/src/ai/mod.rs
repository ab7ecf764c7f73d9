//! AI assistant passthrough.
//!
//! # Responsibility
//! - Send a free-text prompt plus a fixed role instruction to an external
//!   text-generation service and hand back its answer verbatim.
//!
//! # Invariants
//! - Every failure degrades to a fixed user-visible fallback sentence;
//!   nothing here ever propagates an error or panics.
//! - A missing credential is detected before any network attempt and maps
//!   to its own fallback, distinct from call failures.
//! - Calls are independent: no retry, no streaming, no conversation state.

pub mod gemini;

pub use gemini::GeminiAssistant;

/// Fallback when no API credential is configured.
pub const MISSING_KEY_FALLBACK: &str = "API Key is missing. Please configure the environment.";

/// Fallback when the remote call fails for any reason.
pub const ERROR_FALLBACK: &str = "An error occurred while communicating with the AI service.";

/// Fallback when the remote service returns an empty answer.
pub const EMPTY_FALLBACK: &str = "I'm sorry, I couldn't generate a response.";

/// Fail-soft text generation seam.
///
/// Implementations can back onto different providers; the UI only depends
/// on this trait.
pub trait Assistant {
    /// Answers `prompt`, mapping every failure to a fallback sentence.
    fn ask(&self, prompt: &str) -> String;
}
