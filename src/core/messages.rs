use serde::{Deserialize, Serialize};

/// Role for model messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    System,
    User,
}

/// Message Type for model messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    System(SystemMessage),
    User(UserMessage),
}

impl Message {
    /// Create a new message builder.
    ///
    /// Messages are kept in the order the builder methods are called, so
    /// system instructions may be interleaved with user turns.
    ///
    /// # Example
    /// ```
    /// use voxstream::core::Message;
    ///
    /// let msgs = Message::builder()
    ///     .system("You are helpful.")
    ///     .user("Hello!")
    ///     .system("Answer in English.")
    ///     .build();
    /// assert_eq!(msgs.len(), 3);
    /// ```
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    pub fn role(&self) -> Role {
        match self {
            Message::System(_) => Role::System,
            Message::User(_) => Role::User,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::System(s) => &s.content,
            Message::User(u) => &u.content,
        }
    }
}

/// System model message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessage {
    role: Role,
    pub content: String,
}

impl SystemMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

impl From<String> for SystemMessage {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SystemMessage {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// User model message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    role: Role,
    pub content: String,
}

impl UserMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

impl From<String> for UserMessage {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for UserMessage {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered message list builder.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    messages: Vec<Message>,
}

impl MessageBuilder {
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::System(content.into().into()));
        self
    }

    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::User(content.into().into()));
        self
    }

    pub fn build(self) -> Vec<Message> {
        self.messages
    }
}
