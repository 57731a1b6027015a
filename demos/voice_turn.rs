//! Runs one conversational turn against OpenAI and prints the reply sentence
//! by sentence, the way a speech synthesizer would consume it.

use voxstream::{
    core::{
        CancellationToken, ChatCompletion, Language, PromptAssembler, Utterance,
        split_language_tag,
    },
    providers::openai::OpenAI,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    println!("Voice Turn Example");
    println!("==================");

    let agent_identity = std::env::var("AGENT_IDENTITY").unwrap_or_else(|_| "KITT".to_string());
    let completion = ChatCompletion::new(
        OpenAI::builder().build()?,
        PromptAssembler::new(agent_identity),
    );

    let history = vec![
        Utterance::new("Alice", "Good morning everyone."),
        Utterance::agent("Good morning Alice."),
        Utterance::new("Bob", "Let's get started with the weekly sync."),
    ];
    let prompt = Utterance::new("Alice", "Can you summarize what Bob just said?");
    let language = Language::new("en-US", "English");

    let mut sentences = completion
        .complete(&history, &prompt, &language, CancellationToken::new())
        .await?;
    while let Some(sentence) = sentences.recv().await? {
        let (tag, text) = split_language_tag(&sentence);
        println!("[{}] {}", tag.unwrap_or("??"), text.trim());
    }
    sentences.close();

    Ok(())
}
