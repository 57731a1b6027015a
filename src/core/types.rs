//! Conversation data passed into prompt assembly.

use serde::{Deserialize, Serialize};

/// One turn of dialogue with speaker attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    text: String,
    speaker_name: String,
    is_agent: bool,
}

impl Utterance {
    /// Creates an utterance spoken by a human participant.
    pub fn new(speaker_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker_name: speaker_name.into(),
            is_agent: false,
        }
    }

    /// Creates an utterance spoken by the agent itself.
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker_name: String::new(),
            is_agent: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn speaker_name(&self) -> &str {
        &self.speaker_name
    }

    pub fn is_agent(&self) -> bool {
        self.is_agent
    }
}

/// Language the agent should answer in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Locale tag such as `en-US`.
    pub code: String,

    /// Human readable name such as `English`.
    pub label: String,
}

impl Language {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}
