use nexushr_core::ai::{GeminiAssistant, MISSING_KEY_FALLBACK};
use nexushr_core::Assistant;

#[test]
fn unconfigured_assistant_answers_with_the_missing_key_fallback() {
    let assistant = GeminiAssistant::with_api_key(None);
    assert!(!assistant.is_configured());

    // No credential means no network attempt; the answer is immediate.
    assert_eq!(assistant.ask("Draft a rejection letter"), MISSING_KEY_FALLBACK);
}

#[test]
fn blank_credential_counts_as_unconfigured() {
    let assistant = GeminiAssistant::with_api_key(Some("   ".to_string()));
    assert!(!assistant.is_configured());
    assert_eq!(assistant.ask("anything"), MISSING_KEY_FALLBACK);
}

#[test]
fn configured_assistant_reports_as_configured() {
    let assistant = GeminiAssistant::with_api_key(Some("test-key".to_string()));
    assert!(assistant.is_configured());
}
