//! The chat interaction: one user message in, one assistant reply out,
//! both appended to the conversation log.

use log::warn;

use crate::assistant::build_prompt;
use crate::services::ConversationBackend;
use crate::session::Session;

/// Reply used when the backend errors or comes back empty. The
/// conversation keeps going either way.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't find an answer.";

/// Handle one chat message. Always appends exactly two turns to the log
/// (the user message and a reply) and returns the reply.
pub async fn process(
    message: &str,
    backend: &dyn ConversationBackend,
    session: &mut Session,
) -> String {
    session.log.push_user(message);

    let prompt = build_prompt(message, &session.context);
    let reply = match backend.reply(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => FALLBACK_REPLY.to_string(),
        Err(e) => {
            warn!("Conversation backend failed: {}", e);
            FALLBACK_REPLY.to_string()
        }
    };

    session.log.push_assistant(reply.clone());
    reply
}
