//! Builds the chat transcript and the four-message prompt sent to the model.
//!
//! The prompt always has the same shape:
//!
//! 1. a system message fixing the persona and the reply rules,
//! 2. a user message carrying the transcript of the conversation so far,
//! 3. a system message naming the current speaker and the reply language,
//! 4. a user message with the new utterance.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::core::messages::Message;
use crate::core::types::{Language, Utterance};
use crate::error::Error;

const HISTORY_PREAMBLE: &str = "Here is the history of the conversation we just had:\n";

/// Renders the conversation history as plain text, oldest turn first.
///
/// Each turn becomes `"<label> said <text>"` followed by a blank line. Agent
/// turns are labelled `You (<agent_identity>)`, all other turns use the
/// speaker's name.
pub fn render_transcript(history: &[Utterance], agent_identity: &str) -> String {
    let mut transcript = String::new();
    for utterance in history {
        if utterance.is_agent() {
            transcript.push_str("You (");
            transcript.push_str(agent_identity);
            transcript.push(')');
        } else {
            transcript.push_str(utterance.speaker_name());
        }

        transcript.push_str(" said ");
        transcript.push_str(utterance.text());
        transcript.push_str("\n\n");
    }
    transcript
}

/// Assembles model messages from a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(pattern = "owned", setter(into), build_fn(error = "Error"))]
pub struct PromptAssembler {
    /// Name the agent answers to. Used in the persona and to label agent
    /// turns in the transcript.
    agent_identity: String,

    /// Replaces the default persona instructions when set.
    #[builder(default, setter(strip_option, into))]
    persona: Option<String>,
}

impl PromptAssembler {
    pub fn builder() -> PromptAssemblerBuilder {
        PromptAssemblerBuilder::default()
    }

    /// Creates an assembler with the default persona.
    pub fn new(agent_identity: impl Into<String>) -> Self {
        Self {
            agent_identity: agent_identity.into(),
            persona: None,
        }
    }

    pub fn agent_identity(&self) -> &str {
        &self.agent_identity
    }

    /// The system instructions sent as the first message.
    pub fn persona(&self) -> String {
        match &self.persona {
            Some(persona) => persona.clone(),
            None => format!(
                "You are a voice assistant in a meeting named {}, make concise/short answers. \
                 Finish your requests or questions using a question mark (?). \
                 Answer in the asked language. \
                 Always prepend the language code you used before answering. \
                 e.g: en-US sentence in English.; fr-FR phrase en français. ",
                self.agent_identity
            ),
        }
    }

    /// Builds the four messages describing the conversation for the model.
    pub fn assemble(
        &self,
        history: &[Utterance],
        prompt: &Utterance,
        language: &Language,
    ) -> Vec<Message> {
        let transcript = render_transcript(history, &self.agent_identity);

        Message::builder()
            .system(self.persona())
            .user(format!("{HISTORY_PREAMBLE}{transcript}"))
            .system(format!(
                "You are talking to {}, the current language is {} ({})",
                prompt.speaker_name(),
                language.label,
                language.code
            ))
            .user(prompt.text())
            .build()
    }
}
