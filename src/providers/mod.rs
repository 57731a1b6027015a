//! Streaming chat backends implementing
//! [`LanguageModel`](crate::core::LanguageModel).

#[cfg(feature = "openai")]
pub mod openai;
