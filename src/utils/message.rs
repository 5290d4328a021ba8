//! Utility functions for creating and handling A2A Message objects.

use crate::types::{Message, Part, Role};
use crate::utils::parts::get_text_parts;

/// Creates a new user message containing a single text Part.
///
/// # Example
///
/// ```
/// use a2a_protocol::utils::new_user_text_message;
///
/// let message = new_user_text_message("Summarize this document");
/// assert_eq!(message.role, a2a_protocol::types::Role::User);
/// ```
pub fn new_user_text_message(text: impl Into<String>) -> Message {
    Message::of_text(Role::User, text, None)
}

/// Creates a new agent message containing a single text Part.
///
/// # Example
///
/// ```
/// use a2a_protocol::utils::new_agent_text_message;
///
/// let message = new_agent_text_message("Hello, I'm an agent");
/// assert_eq!(message.role, a2a_protocol::types::Role::Agent);
/// ```
pub fn new_agent_text_message(text: impl Into<String>) -> Message {
    Message::of_text(Role::Agent, text, None)
}

/// Creates a new agent message containing a list of Parts.
pub fn new_agent_parts_message(parts: Vec<Part>) -> Message {
    Message {
        role: Role::Agent,
        parts,
        metadata: None,
    }
}

/// Extracts and joins all text content from a Message's parts.
///
/// Returns an empty string if the message has no text parts.
///
/// # Example
///
/// ```
/// use a2a_protocol::utils::{get_message_text, new_agent_text_message};
///
/// let message = new_agent_text_message("Hello, world!");
/// assert_eq!(get_message_text(&message, "\n"), "Hello, world!");
/// ```
pub fn get_message_text(message: &Message, delimiter: &str) -> String {
    get_text_parts(&message.parts).join(delimiter)
}
