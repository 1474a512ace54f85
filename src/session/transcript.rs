use serde::{Deserialize, Serialize};

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered message history whose first element is always the system instruction.
///
/// The only way in is through the append methods, so the seed can never be
/// displaced and nothing already appended can be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates a transcript holding only the given system instruction.
    pub fn seeded(instruction: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(instruction)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Everything after the system seed.
    pub fn conversation(&self) -> &[Message] {
        &self.messages[1..]
    }

    pub fn system_instruction(&self) -> &str {
        &self.messages[0].content
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false` for a seeded transcript; kept alongside [`Self::len`].
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `true` while the transcript still holds nothing but its seed.
    pub fn is_pristine(&self) -> bool {
        self.messages.len() == 1
    }

    /// Rewrites the seed. Only allowed while pristine; returns whether it happened.
    pub(crate) fn reseed(&mut self, instruction: &str) -> bool {
        if !self.is_pristine() {
            return false;
        }
        instruction.clone_into(&mut self.messages[0].content);
        true
    }

    pub(crate) fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub(crate) fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Number of messages with the given role.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}
