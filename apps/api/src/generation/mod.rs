//! Message Generation — builds the prompt, makes one LLM call, and degrades to
//! a static per-language fallback on any failure.
//!
//! Flow: system_prompt + user_prompt → LlmClient::call → trim → Generated,
//! or on any error → log → Fallback(table entry for language).

pub mod fallback;
pub mod handlers;
pub mod prompts;

use tracing::{error, info};
use uuid::Uuid;

use crate::generation::fallback::fallback_for;
use crate::generation::prompts::{system_prompt, user_prompt};
use crate::llm_client::LlmClient;

/// Outcome of a generation attempt.
///
/// `Fallback` marks a degraded response so callers and tests can tell it apart
/// from real model output without inspecting the string. Both variants carry a
/// non-empty, human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedMessage {
    Generated(String),
    Fallback(String),
}

impl GeneratedMessage {
    pub fn into_text(self) -> String {
        match self {
            GeneratedMessage::Generated(text) | GeneratedMessage::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GeneratedMessage::Fallback(_))
    }
}

/// Generates a motivational message for the given emotion and language.
///
/// Never fails outward: any LLM error (connect, auth, malformed response,
/// timeout) is logged at error level and replaced with the language-matched
/// fallback string. The success path returns the model text verbatim after
/// whitespace trimming — no length, language, or emoji validation is applied.
pub async fn generate_message(llm: &LlmClient, emotion: &str, language: &str) -> GeneratedMessage {
    // Fresh correlation id per call — no session reuse across requests
    let correlation_id = format!("moodmate_{emotion}_{language}_{}", Uuid::new_v4());

    let system = system_prompt(emotion, language);
    let prompt = user_prompt(emotion);

    match llm.call(&system, &prompt, &correlation_id).await {
        Ok(text) => {
            info!("Generated message for emotion={emotion}, language={language}");
            GeneratedMessage::Generated(text)
        }
        Err(e) => {
            error!("Error generating message: {e}");
            GeneratedMessage::Fallback(fallback_for(language).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_call_yields_generated() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"Keep shining today! ✨"}}]}"#,
            )
            .create_async()
            .await;

        let llm = LlmClient::new(server.url(), "test-key".to_string());
        let result = generate_message(&llm, "Happy", "English").await;

        assert_eq!(
            result,
            GeneratedMessage::Generated("Keep shining today! ✨".to_string())
        );
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn test_unreachable_llm_yields_language_fallback() {
        // Nothing listens on this port — the call fails immediately
        let llm = LlmClient::new("http://127.0.0.1:1".to_string(), "test-key".to_string());
        let result = generate_message(&llm, "Sad", "Turkish").await;

        assert_eq!(
            result,
            GeneratedMessage::Fallback("Harika gidiyorsun. Devam et! 💙".to_string())
        );
    }

    #[tokio::test]
    async fn test_untabled_language_falls_back_to_english() {
        let llm = LlmClient::new("http://127.0.0.1:1".to_string(), "test-key".to_string());
        let result = generate_message(&llm, "Anxious", "Klingon").await;

        assert_eq!(
            result,
            GeneratedMessage::Fallback("You are doing great. Keep going! 💙".to_string())
        );
    }

    #[tokio::test]
    async fn test_api_error_yields_fallback_not_panic() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let llm = LlmClient::new(server.url(), "test-key".to_string());
        let result = generate_message(&llm, "Tired", "Spanish").await;

        assert_eq!(
            result,
            GeneratedMessage::Fallback("¡Lo estás haciendo genial. Sigue adelante! 💙".to_string())
        );
    }
}
