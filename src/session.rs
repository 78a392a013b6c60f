//! Per-session conversation state.
//!
//! State is carried in explicit objects passed into each interaction
//! handler rather than hidden globals, which keeps the formatter and
//! prompt builder pure and independently testable.

use serde::Serialize;

/// Number of recent turns shown in the conversation panel. The full log
/// is retained regardless.
pub const RECENT_TURNS: usize = 5;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Append-only conversation history, seeded with a greeting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        ConversationLog {
            turns: vec![ConversationTurn {
                role: Role::Assistant,
                content: "Hello! I'm ChefAI. Ask me about cooking, nutrition, or food science!"
                    .to_string(),
            }],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// The most recent [`RECENT_TURNS`] turns, oldest first.
    pub fn recent(&self) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(RECENT_TURNS);
        &self.turns[start..]
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Recipe context available to the assistant.
///
/// Both fields are set together after a successful generation and
/// replaced wholesale by the next one; the prompt builder only reads
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionContext {
    pub last_recipe: Option<String>,
    pub last_ingredients: Option<String>,
}

impl SessionContext {
    /// Record a successful generation.
    pub fn record_generation(&mut self, raw_recipe: String, ingredients: String) {
        self.last_recipe = Some(raw_recipe);
        self.last_ingredients = Some(ingredients);
    }
}

/// Everything one user session carries between interactions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub log: ConversationLog,
    pub context: SessionContext,
}
