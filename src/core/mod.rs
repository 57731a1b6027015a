//! Prompt assembly, the backend seam and sentence segmentation.

pub mod completion;
pub mod language;
pub mod language_model;
pub mod messages;
pub mod prompt;
pub mod sentence_stream;
pub mod types;

pub use completion::ChatCompletion;
pub use language::split_language_tag;
pub use language_model::{FragmentStream, LanguageModel};
pub use messages::{Message, MessageBuilder, Role, SystemMessage, UserMessage};
pub use prompt::{PromptAssembler, PromptAssemblerBuilder, render_transcript};
pub use sentence_stream::{SentenceStream, StreamState};
pub use types::{Language, Utterance};
pub use tokio_util::sync::CancellationToken;
