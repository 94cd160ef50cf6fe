use serde::{Deserialize, Serialize};

/// Opening line shown before the first command.
pub const GREETING: &str = "Hello! I can help you create HTML, CSS, and JavaScript code. \
Try asking something like \"create a contact form\", then refine it with \
\"change the background of phone to yellow\" or \"make the button bigger\".";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub role: Role,
    pub content: String,
}

impl Command {
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

/// Conversation history. Owned by whoever displays it; the session only
/// appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<Command>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push(Command::assistant(GREETING));
        transcript
    }

    pub fn push(&mut self, command: Command) {
        self.entries.push(command);
    }

    pub fn entries(&self) -> &[Command] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Command> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
