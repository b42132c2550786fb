//! Prompt construction and fallback policy for the optional "joy pulse"
//! summary. The text-generation service itself lives outside this crate;
//! callers supply it through [`SummaryBackend`].

use crate::album::Album;
use thiserror::Error;

pub const MISSING_KEY_TEXT: &str = "API Key missing. Cannot generate summary.";
pub const FAILURE_TEXT: &str = "Could not analyze the joy at this moment, but we know it's there!";
pub const EMPTY_REPLY_TEXT: &str = "Spreading the joy!";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary service unavailable: {0}")]
    Unavailable(String),
    #[error("summary request rejected: {0}")]
    Rejected(String),
}

pub trait SummaryBackend {
    fn generate(&self, prompt: &str) -> Result<String, SummaryError>;
}

/// One bullet per album that carries a message.
pub fn message_digest(albums: &[Album]) -> String {
    albums
        .iter()
        .filter_map(|a| {
            a.message
                .as_deref()
                .filter(|m| !m.is_empty())
                .map(|m| format!("- \"{}\" by {}", m, a.author))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(albums: &[Album]) -> String {
    format!(
        "You are an enthusiastic \"Chief Joy Officer\" for a school network called Uncommon Schools.\n\
         Analyze the following messages posted by staff members in our Joy Collage:\n\n\
         {}\n\n\
         Write a short, inspiring, and high-energy 2-3 sentence summary of the \"Joy Pulse\" of the school right now.\n\
         Focus on themes of community, student success, and teamwork. Use emojis.",
        message_digest(albums)
    )
}

/// Summarise the collage. `None` means no API key is configured. Never fails;
/// every problem maps to a fixed, human-readable line.
pub fn summarize(backend: Option<&dyn SummaryBackend>, albums: &[Album]) -> String {
    let Some(backend) = backend else {
        log::warn!("[summary] no API key available");
        return MISSING_KEY_TEXT.to_string();
    };
    match backend.generate(&build_prompt(albums)) {
        Ok(text) if text.trim().is_empty() => EMPTY_REPLY_TEXT.to_string(),
        Ok(text) => text,
        Err(e) => {
            log::error!("[summary] generation failed: {}", e);
            FAILURE_TEXT.to_string()
        }
    }
}
