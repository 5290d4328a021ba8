//! # a2a-protocol — data model for the Agent-to-Agent (A2A) protocol
//!
//! This crate provides the core data model and JSON-RPC 2.0 envelope of the
//! A2A protocol: the vocabulary agents use to exchange tasks, messages, and
//! artifacts. It contains no I/O — transports, task stores, and server
//! frameworks build on top of these types.
//!
//! ## Overview
//!
//! The model covers:
//! - **Content**: [`types::Part`] (text, file, or structured data),
//!   [`types::Message`], [`types::Artifact`]
//! - **Task lifecycle**: [`types::Task`], [`types::TaskStatus`],
//!   [`types::TaskState`] with its terminal-state and transition predicates
//! - **Discovery**: [`types::AgentCard`] and its related types, served at
//!   `/.well-known/agent.json`
//! - **Push notifications**: [`types::PushNotificationConfig`]
//! - **Envelope**: [`types::JsonRpcRequest`], [`types::JsonRpcResponse`],
//!   [`types::JsonRpcError`]
//! - **Errors**: [`error::A2AError`] with the full JSON-RPC + A2A code
//!   taxonomy
//!
//! Every type serializes through the [`types::WireFormat`] trait to the
//! protocol's camelCase wire JSON, omitting absent optional fields.
//!
//! ## Quick start
//!
//! ```
//! use a2a_protocol::prelude::*;
//!
//! // Build a task from a user message and walk it through its lifecycle.
//! let task = Task::new("task-1").with_status(TaskStatus::with_message(
//!     TaskState::Working,
//!     Message::user("Write a haiku about Rust"),
//! ));
//! assert_eq!(task.state(), TaskState::Working);
//!
//! // Everything converts to and from wire JSON.
//! let wire = task.to_wire().unwrap();
//! assert_eq!(wire["status"]["state"], "working");
//! let back = Task::from_wire(wire).unwrap();
//! assert_eq!(back, task);
//! ```
//!
//! ## Errors on the wire
//!
//! ```
//! use a2a_protocol::prelude::*;
//!
//! let resp = JsonRpcResponse::from_a2a_error(Some(JsonRpcId::Number(1)), A2AError::task_not_found());
//! let wire = resp.to_wire().unwrap();
//! assert_eq!(wire["error"]["code"], -32001);
//! assert_eq!(wire["error"]["message"], "Task not found");
//! ```

pub mod builders;
pub mod error;
pub mod types;
pub mod utils;

/// Prelude module that re-exports commonly used types and traits.
///
/// Import this module with `use a2a_protocol::prelude::*;` to get access to
/// the most frequently used types without having to import them individually.
pub mod prelude {
    // Core types
    pub use crate::types::{
        AgentAuthentication, AgentCapabilities, AgentCard, AgentProvider, AgentSkill, Artifact,
        FileContent, FileWithBytes, FileWithUri, JsonRpcError, JsonRpcId, JsonRpcRequest,
        JsonRpcResponse, Message, Part, PushNotificationConfig, Role, Task, TaskState, TaskStatus,
        WireFormat,
    };

    // Error types
    pub use crate::error::{A2AError, A2AResult};

    // Builders
    pub use crate::builders::AgentCardBuilder;
}

// Re-export core types at crate root for convenience.
pub use builders::AgentCardBuilder;
pub use error::{A2AError, A2AResult};
pub use types::*;
