//! Integration tests for `ChatCompletion` over a scripted language model.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::{StreamExt, stream};
use voxstream::{
    Error, Result,
    core::{
        CancellationToken, ChatCompletion, FragmentStream, Language, LanguageModel, Message,
        PromptAssembler, Role, StreamState, Utterance, split_language_tag,
    },
};

/// Replays canned fragments and records the messages it was asked for.
#[derive(Debug, Clone, Default)]
struct ScriptedModel {
    fragments: Vec<std::result::Result<&'static str, &'static str>>,
    refuse: bool,
    seen: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl ScriptedModel {
    fn replying(fragments: Vec<std::result::Result<&'static str, &'static str>>) -> Self {
        Self {
            fragments,
            ..Default::default()
        }
    }

    fn unavailable() -> Self {
        Self {
            refuse: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn stream_chat(&self, messages: Vec<Message>) -> Result<FragmentStream> {
        self.seen.lock().expect("lock").push(messages);
        if self.refuse {
            return Err(Error::StreamRead("connection refused".to_string()));
        }

        let items: Vec<Result<String>> = self
            .fragments
            .iter()
            .map(|f| match f {
                Ok(text) => Ok(text.to_string()),
                Err(msg) => Err(Error::StreamRead(msg.to_string())),
            })
            .collect();
        Ok(Box::pin(stream::iter(items)))
    }
}

fn english() -> Language {
    Language::new("en-US", "English")
}

#[tokio::test]
async fn test_complete_sends_four_messages() {
    let model = ScriptedModel::replying(vec![Ok("en-US I am fine.")]);
    let completion = ChatCompletion::new(model.clone(), PromptAssembler::new("KITT"));

    let history = vec![Utterance::new("Alice", "hi")];
    let prompt = Utterance::new("Alice", "how are you");
    let mut sentences = completion
        .complete(&history, &prompt, &english(), CancellationToken::new())
        .await
        .expect("Failed to open stream");

    assert_eq!(
        sentences.recv().await.unwrap().as_deref(),
        Some("en-US I am fine.")
    );
    sentences.close();

    let seen = model.seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    let messages = &seen[0];
    let roles: Vec<Role> = messages.iter().map(Message::role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::System, Role::User]);
    assert_eq!(
        messages[1].content(),
        "Here is the history of the conversation we just had:\nAlice said hi\n\n"
    );
    assert_eq!(
        messages[2].content(),
        "You are talking to Alice, the current language is English (en-US)"
    );
    assert_eq!(messages[3].content(), "how are you");
}

#[tokio::test]
async fn test_complete_streams_sentences_until_end() {
    let model = ScriptedModel::replying(vec![
        Ok("en-US Sure"),
        Ok(", here it is."),
        Ok(" Anything"),
        Ok(" else? "),
    ]);
    let completion = ChatCompletion::new(model, PromptAssembler::new("KITT"));

    let mut sentences = completion
        .complete(&[], &Utterance::new("Bob", "tell me"), &english(), CancellationToken::new())
        .await
        .expect("Failed to open stream");

    let first = sentences.recv().await.unwrap().expect("first sentence");
    assert_eq!(first, "en-US Sure, here it is.");
    assert_eq!(split_language_tag(&first), (Some("en-US"), "Sure, here it is."));

    assert_eq!(
        sentences.recv().await.unwrap().as_deref(),
        Some("Anything else?")
    );
    assert_eq!(sentences.state(), StreamState::Drained);
    assert_eq!(sentences.recv().await.unwrap(), None);

    sentences.close();
    sentences.close();
}

#[tokio::test]
async fn test_complete_reports_upstream_unavailable() {
    let completion = ChatCompletion::new(ScriptedModel::unavailable(), PromptAssembler::new("KITT"));

    let result = completion
        .complete(&[], &Utterance::new("Bob", "hello"), &english(), CancellationToken::new())
        .await;

    assert!(matches!(result, Err(Error::UpstreamUnavailable(_))));
}

#[tokio::test]
async fn test_mid_stream_failure_is_surfaced() {
    let model = ScriptedModel::replying(vec![Ok("One."), Ok(" Two"), Err("reset by peer")]);
    let completion = ChatCompletion::new(model, PromptAssembler::new("KITT"));

    let sentences = completion
        .complete(&[], &Utterance::new("Bob", "count"), &english(), CancellationToken::new())
        .await
        .expect("Failed to open stream");

    let results: Vec<Result<String>> = sentences.into_stream().collect().await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_deref().ok(), Some("One."));
    assert!(matches!(&results[1], Err(Error::StreamRead(msg)) if msg == "reset by peer"));
}

#[tokio::test]
async fn test_agent_turns_use_identity_label() {
    let model = ScriptedModel::replying(vec![]);
    let assembler = PromptAssembler::builder()
        .agent_identity("Jarvis")
        .build()
        .expect("Failed to build PromptAssembler");
    let completion = ChatCompletion::new(model.clone(), assembler);

    let history = vec![
        Utterance::new("Alice", "hello"),
        Utterance::agent("Hi Alice."),
    ];
    let mut sentences = completion
        .complete(&history, &Utterance::new("Alice", "bye"), &english(), CancellationToken::new())
        .await
        .expect("Failed to open stream");
    assert_eq!(sentences.recv().await.unwrap(), None);
    assert_eq!(sentences.state(), StreamState::Terminated);

    let seen = model.seen.lock().expect("lock");
    assert!(seen[0][0].content().contains("named Jarvis"));
    assert!(
        seen[0][1]
            .content()
            .ends_with("Alice said hello\n\nYou (Jarvis) said Hi Alice.\n\n")
    );
}

#[tokio::test]
async fn test_cancel_from_another_task_fails_next_pull() {
    let model = ScriptedModel::replying(vec![Ok("First."), Ok(" Second")]);
    let completion = ChatCompletion::new(model, PromptAssembler::new("KITT"));
    let cancel = CancellationToken::new();

    let mut sentences = completion
        .complete(&[], &Utterance::new("Bob", "go on"), &english(), cancel.clone())
        .await
        .expect("Failed to open stream");
    assert_eq!(sentences.recv().await.unwrap().as_deref(), Some("First."));

    // a barge-in handler holding a clone interrupts the reply
    tokio::spawn(async move { cancel.cancel() })
        .await
        .expect("cancel task");

    assert!(matches!(sentences.recv().await, Err(Error::StreamRead(msg)) if msg == "cancelled"));
    assert_eq!(sentences.recv().await.unwrap(), None);
    assert_eq!(sentences.state(), StreamState::Terminated);
}

#[tokio::test]
async fn test_cancel_before_open_is_upstream_unavailable() {
    let model = ScriptedModel::replying(vec![Ok("Never read.")]);
    let completion = ChatCompletion::new(model, PromptAssembler::new("KITT"));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = completion
        .complete(&[], &Utterance::new("Bob", "hello"), &english(), cancel)
        .await;

    assert!(matches!(result, Err(Error::UpstreamUnavailable(msg)) if msg == "cancelled"));
}
