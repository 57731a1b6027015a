//! Helper functions and conversions for the OpenAI provider.

use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    CreateChatCompletionStreamResponse,
};

use crate::core::messages::Message;

impl From<Message> for ChatCompletionRequestMessage {
    fn from(m: Message) -> Self {
        match m {
            Message::System(s) => {
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                    content: ChatCompletionRequestSystemMessageContent::Text(s.content),
                    name: None,
                })
            }
            Message::User(u) => {
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(u.content),
                    name: None,
                })
            }
        }
    }
}

/// Builds a streaming chat request for `model`.
pub fn to_stream_request(model: &str, messages: Vec<Message>) -> CreateChatCompletionRequest {
    CreateChatCompletionRequest {
        model: model.to_string(),
        messages: messages.into_iter().map(Into::into).collect(),
        stream: Some(true),
        ..Default::default()
    }
}

/// Text carried by one stream event. Events without content (role
/// announcements, finish markers, usage) yield an empty fragment.
pub fn delta_text(event: CreateChatCompletionStreamResponse) -> String {
    event
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .unwrap_or_default()
}
