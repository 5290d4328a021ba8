//! A2A protocol types — the task-exchange data model and JSON-RPC envelope.
//!
//! Every type serializes to camelCase wire JSON; absent optional fields are
//! omitted entirely (never emitted as `null`). Deserialization additionally
//! accepts snake_case aliases for multi-word fields, so wire-shaped and
//! internally-shaped input both decode.
//!
//! All types are immutable value objects: a state change constructs a new
//! instance (see [`Task::with_status`]). They carry no I/O and may be shared
//! freely across threads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{A2AError, A2AResult};

// ============================================================================
// Wire codec
// ============================================================================

/// Wire-format codec shared by every protocol type.
///
/// `to_wire`/`from_wire` convert between typed values and wire-shaped
/// [`serde_json::Value`]s; `from_wire_str` decodes raw JSON text. Malformed
/// JSON text maps to the parse-error kind (-32700); a payload that parses but
/// fails shape validation maps to [`A2AError::Validation`].
pub trait WireFormat: Serialize + DeserializeOwned {
    /// Serialize into a wire-shaped JSON value.
    fn to_wire(&self) -> A2AResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| A2AError::validation(e.to_string()))
    }

    /// Decode from a wire-shaped JSON value, validating shape and invariants.
    fn from_wire(value: serde_json::Value) -> A2AResult<Self> {
        serde_json::from_value(value).map_err(|e| A2AError::validation(e.to_string()))
    }

    /// Decode from raw JSON text.
    fn from_wire_str(text: &str) -> A2AResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_wire(value)
    }
}

impl<T: Serialize + DeserializeOwned> WireFormat for T {}

// ============================================================================
// Enums
// ============================================================================

/// The lifecycle state of a task.
///
/// Serialized as kebab-case strings (`"input-required"` etc.). Any other
/// string fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task has been received but not yet started.
    Submitted,
    /// Task is actively being processed.
    Working,
    /// Task requires additional input from the user.
    InputRequired,
    /// Task completed successfully. Terminal.
    Completed,
    /// Task was canceled. Terminal.
    Canceled,
    /// Task failed. Terminal.
    Failed,
    /// Defensive initial value; never a legal transition target.
    Unknown,
}

impl TaskState {
    /// Whether this state ends the task's lifecycle.
    ///
    /// True exactly for `completed`, `canceled`, and `failed`. A task in a
    /// terminal state must not transition further; callers use this predicate
    /// to refuse updates (the model itself does not enforce it).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Canceled | TaskState::Failed
        )
    }

    /// Whether `next` is a legal successor of this state.
    ///
    /// Transition table:
    /// - `submitted` -> `working | failed | canceled`
    /// - `working` -> `input-required | completed | failed | canceled`
    /// - `input-required` -> `working | failed | canceled`
    /// - terminal states have no successors
    /// - `unknown` may recover into any real state but is never a target
    pub fn can_transition_to(self, next: TaskState) -> bool {
        use TaskState::*;
        match self {
            Submitted => matches!(next, Working | Failed | Canceled),
            Working => matches!(next, InputRequired | Completed | Failed | Canceled),
            InputRequired => matches!(next, Working | Failed | Canceled),
            Completed | Canceled | Failed => false,
            Unknown => !matches!(next, Unknown),
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskState::Submitted => "submitted",
            TaskState::Working => "working",
            TaskState::InputRequired => "input-required",
            TaskState::Completed => "completed",
            TaskState::Canceled => "canceled",
            TaskState::Failed => "failed",
            TaskState::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TaskState {
    type Err = A2AError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(TaskState::Submitted),
            "working" => Ok(TaskState::Working),
            "input-required" => Ok(TaskState::InputRequired),
            "completed" => Ok(TaskState::Completed),
            "canceled" => Ok(TaskState::Canceled),
            "failed" => Ok(TaskState::Failed),
            "unknown" => Ok(TaskState::Unknown),
            other => Err(A2AError::validation(format!(
                "Invalid task state: {}",
                other
            ))),
        }
    }
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from the user / client.
    User,
    /// Message from the agent / server.
    Agent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Agent => write!(f, "agent"),
        }
    }
}

// ============================================================================
// Message & Parts
// ============================================================================

/// File content provided as base64-encoded bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWithBytes {
    /// Base64-encoded file content.
    pub bytes: String,
    /// MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none", alias = "mime_type")]
    pub mime_type: Option<String>,
    /// Optional file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// File content provided as a URI reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWithUri {
    /// URI pointing to the file content.
    pub uri: String,
    /// MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none", alias = "mime_type")]
    pub mime_type: Option<String>,
    /// Optional file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// File content — either inline base64 bytes or a URI reference, never both.
///
/// The enum makes "neither" and "both" unrepresentable for constructed
/// values; the hand-written `Deserialize` rejects wire payloads that carry
/// zero or two of `bytes`/`uri`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileContent {
    /// File with inline base64-encoded bytes.
    Bytes(FileWithBytes),
    /// File referenced by URI.
    Uri(FileWithUri),
}

impl FileContent {
    /// The file name, if present on either variant.
    pub fn name(&self) -> Option<&str> {
        match self {
            FileContent::Bytes(f) => f.name.as_deref(),
            FileContent::Uri(f) => f.name.as_deref(),
        }
    }

    /// The MIME type, if present on either variant.
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            FileContent::Bytes(f) => f.mime_type.as_deref(),
            FileContent::Uri(f) => f.mime_type.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for FileContent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            name: Option<String>,
            #[serde(alias = "mime_type")]
            mime_type: Option<String>,
            bytes: Option<String>,
            uri: Option<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        match (raw.bytes, raw.uri) {
            (Some(bytes), None) => Ok(FileContent::Bytes(FileWithBytes {
                bytes,
                mime_type: raw.mime_type,
                name: raw.name,
            })),
            (None, Some(uri)) => Ok(FileContent::Uri(FileWithUri {
                uri,
                mime_type: raw.mime_type,
                name: raw.name,
            })),
            (Some(_), Some(_)) => Err(serde::de::Error::custom(
                "file content must carry exactly one of 'bytes' or 'uri', found both",
            )),
            (None, None) => Err(serde::de::Error::custom(
                "file content must carry exactly one of 'bytes' or 'uri', found neither",
            )),
        }
    }
}

/// A content part within a message or artifact.
///
/// Discriminated by the `type` field:
/// - Text: `{"type": "text", "text": "hello"}`
/// - File (bytes): `{"type": "file", "file": {"bytes": "SGVsbG8=", "mimeType": "text/plain"}}`
/// - File (uri): `{"type": "file", "file": {"uri": "https://example.com/file.pdf"}}`
/// - Data: `{"type": "data", "data": {"key": "value"}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    /// A text content part. Discriminator: `"text"`.
    Text {
        /// The text content.
        text: String,
        /// Optional metadata associated with this part.
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
    /// A file content part. Discriminator: `"file"`.
    File {
        /// The file content (bytes or URI).
        file: FileContent,
        /// Optional metadata associated with this part.
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
    /// A structured data content part. Discriminator: `"data"`.
    Data {
        /// Arbitrary structured data.
        data: serde_json::Value,
        /// Optional metadata associated with this part.
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
}

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct TextWire {
            text: String,
            metadata: Option<serde_json::Value>,
        }
        #[derive(Deserialize)]
        struct FileWire {
            file: FileContent,
            metadata: Option<serde_json::Value>,
        }
        #[derive(Deserialize)]
        struct DataWire {
            data: serde_json::Value,
            metadata: Option<serde_json::Value>,
        }

        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or_else(|| serde::de::Error::custom("missing 'type' field"))?;

        match tag {
            "text" => {
                let wire: TextWire =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                Ok(Part::Text {
                    text: wire.text,
                    metadata: wire.metadata,
                })
            }
            "file" => {
                let wire: FileWire =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                Ok(Part::File {
                    file: wire.file,
                    metadata: wire.metadata,
                })
            }
            "data" => {
                let wire: DataWire =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                Ok(Part::Data {
                    data: wire.data,
                    metadata: wire.metadata,
                })
            }
            other => Err(serde::de::Error::custom(format!(
                "Unknown part type: {}",
                other
            ))),
        }
    }
}

/// A single communication turn, composed of [`Part`]s.
///
/// An empty `parts` list is permitted by construction but semantically
/// meaningless; collaborators that create tasks reject it (see
/// [`crate::utils::new_task`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Who sent this message.
    pub role: Role,

    /// Content parts of the message.
    pub parts: Vec<Part>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// An artifact produced by a task.
///
/// Doubles as one chunk of a streamed output: `index` orders chunks,
/// `append` means "concatenate onto the previous chunk", `last_chunk` marks
/// the end of the stream. The model carries these fields without enforcing
/// ordering; reassembly is the consumer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Content parts of the artifact.
    pub parts: Vec<Part>,

    /// Chunk ordinal within a streamed artifact. Always serialized.
    #[serde(default)]
    pub index: u32,

    /// Whether this chunk appends to the previous chunk's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append: Option<bool>,

    /// Whether this is the final chunk of the stream.
    #[serde(skip_serializing_if = "Option::is_none", alias = "last_chunk")]
    pub last_chunk: Option<bool>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

// ============================================================================
// Core Task Types
// ============================================================================

/// Current status of a task: state plus an optional accompanying message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    /// The current state.
    pub state: TaskState,

    /// Optional message associated with this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    /// ISO-8601 timestamp of when this status was set. Defaults to the
    /// current UTC time when omitted, the model's only impure primitive.
    #[serde(default = "current_timestamp")]
    pub timestamp: String,
}

fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

/// A task — the primary unit of work in the A2A protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: String,

    /// Groups related tasks into one conversation.
    #[serde(skip_serializing_if = "Option::is_none", alias = "session_id")]
    pub session_id: Option<String>,

    /// Current task status.
    pub status: TaskStatus,

    /// Artifacts produced by the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,

    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

// ============================================================================
// Agent Card & Related Types
// ============================================================================

/// Self-describing manifest for an A2A agent, served at the well-known path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Human-readable name.
    pub name: String,

    /// Base URL of the agent's A2A endpoint.
    pub url: String,

    /// Agent version string.
    pub version: String,

    /// Description of the agent's purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Service provider information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<AgentProvider>,

    /// URL to the agent's documentation.
    #[serde(skip_serializing_if = "Option::is_none", alias = "documentation_url")]
    pub documentation_url: Option<String>,

    /// Optional protocol features the agent supports.
    pub capabilities: AgentCapabilities,

    /// Authentication requirements for calling the agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AgentAuthentication>,

    /// Default content modes accepted as input. Defaults to `["text"]`.
    #[serde(default = "default_modes", alias = "default_input_modes")]
    pub default_input_modes: Vec<String>,

    /// Default content modes produced as output. Defaults to `["text"]`.
    #[serde(default = "default_modes", alias = "default_output_modes")]
    pub default_output_modes: Vec<String>,

    /// Skills the agent supports.
    pub skills: Vec<AgentSkill>,
}

fn default_modes() -> Vec<String> {
    vec!["text".to_string()]
}

/// Agent capabilities declaration. All flags default to `false` and are
/// always serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    /// Whether the agent supports streaming responses.
    #[serde(default)]
    pub streaming: bool,

    /// Whether the agent supports push notifications.
    #[serde(default, alias = "push_notifications")]
    pub push_notifications: bool,

    /// Whether the agent records a history of task state transitions.
    #[serde(default, alias = "state_transition_history")]
    pub state_transition_history: bool,
}

/// A skill that an agent can perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    /// Unique skill identifier.
    pub id: String,

    /// Human-readable skill name.
    pub name: String,

    /// Description of what the skill does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Categorization tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Example prompts/inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,

    /// Content modes this skill accepts as input.
    #[serde(skip_serializing_if = "Option::is_none", alias = "input_modes")]
    pub input_modes: Option<Vec<String>>,

    /// Content modes this skill produces as output.
    #[serde(skip_serializing_if = "Option::is_none", alias = "output_modes")]
    pub output_modes: Option<Vec<String>>,
}

/// Information about the agent's provider/organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProvider {
    /// Organization name.
    pub organization: String,

    /// Organization URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Authentication requirements — scheme names plus optional credentials.
///
/// Shared between the agent card and [`PushNotificationConfig`], which carry
/// the identical wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAuthentication {
    /// Supported authentication schemes (e.g. `["Bearer"]`).
    pub schemes: Vec<String>,

    /// Optional credentials material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

// ============================================================================
// Push Notifications
// ============================================================================

/// Webhook target for out-of-band task update delivery.
///
/// The model does not validate the URL scheme; collaborators that deliver
/// notifications require HTTPS in production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotificationConfig {
    /// URL to deliver notifications to.
    pub url: String,

    /// Optional verification token echoed back on delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Authentication the webhook endpoint expects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AgentAuthentication>,
}

// ============================================================================
// JSON-RPC Foundation
// ============================================================================

/// A JSON-RPC 2.0 request/notification ID.
///
/// Can be a string, number, or null (for notifications).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcId {
    /// String identifier.
    String(String),
    /// Numeric identifier.
    Number(i64),
    /// Null (notification — no response expected).
    Null,
}

impl fmt::Display for JsonRpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonRpcId::String(s) => write!(f, "{}", s),
            JsonRpcId::Number(n) => write!(f, "{}", n),
            JsonRpcId::Null => write!(f, "null"),
        }
    }
}

impl From<String> for JsonRpcId {
    fn from(s: String) -> Self {
        JsonRpcId::String(s)
    }
}

impl From<&str> for JsonRpcId {
    fn from(s: &str) -> Self {
        JsonRpcId::String(s.to_string())
    }
}

impl From<i64> for JsonRpcId {
    fn from(n: i64) -> Self {
        JsonRpcId::Number(n)
    }
}

impl From<i32> for JsonRpcId {
    fn from(n: i32) -> Self {
        JsonRpcId::Number(n as i64)
    }
}

/// A JSON-RPC 2.0 request.
///
/// Used for both requests (with `id`) and notifications (without `id`).
/// Construction never validates `method` names or `params` shapes — that is
/// the server dispatcher's routing responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcRequest {
    /// Protocol version — always "2.0".
    pub jsonrpc: String,

    /// Request identifier. Absent for notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonRpcId>,

    /// Method name.
    pub method: String,

    /// Method parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

/// A JSON-RPC 2.0 response.
///
/// Exactly one of `result` or `error` will be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcResponse {
    /// Protocol version — always "2.0".
    pub jsonrpc: String,

    /// Request identifier this response corresponds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonRpcId>,

    /// Successful result payload (the payload's own wire form).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// Error result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcError {
    /// Error code.
    pub code: i64,

    /// Human-readable error message.
    pub message: String,

    /// Optional structured error data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Part {
    /// Create a text part.
    ///
    /// Produces JSON: `{"type": "text", "text": "..."}`
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text {
            text: text.into(),
            metadata: None,
        }
    }

    /// Create a file part from base64-encoded bytes.
    pub fn file_from_bytes(
        bytes: impl Into<String>,
        name: Option<String>,
        mime_type: Option<String>,
    ) -> Self {
        Part::File {
            file: FileContent::Bytes(FileWithBytes {
                bytes: bytes.into(),
                mime_type,
                name,
            }),
            metadata: None,
        }
    }

    /// Create a file part from a URI reference.
    pub fn file_from_uri(
        uri: impl Into<String>,
        name: Option<String>,
        mime_type: Option<String>,
    ) -> Self {
        Part::File {
            file: FileContent::Uri(FileWithUri {
                uri: uri.into(),
                mime_type,
                name,
            }),
            metadata: None,
        }
    }

    /// Create a structured data part.
    pub fn data(data: serde_json::Value) -> Self {
        Part::Data {
            data,
            metadata: None,
        }
    }
}

impl Message {
    /// Create a message containing a single text part.
    pub fn of_text(
        role: Role,
        text: impl Into<String>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Message {
            role,
            parts: vec![Part::text(text)],
            metadata,
        }
    }

    /// Create a user message with text content.
    pub fn user(text: impl Into<String>) -> Self {
        Message::of_text(Role::User, text, None)
    }

    /// Create an agent message with text content.
    pub fn agent(text: impl Into<String>) -> Self {
        Message::of_text(Role::Agent, text, None)
    }
}

impl TaskStatus {
    /// Create a new TaskStatus with the given state, no message, and the
    /// current UTC time as timestamp.
    pub fn new(state: TaskState) -> Self {
        TaskStatus {
            state,
            message: None,
            timestamp: current_timestamp(),
        }
    }

    /// Create a new TaskStatus carrying an accompanying message.
    pub fn with_message(state: TaskState, message: Message) -> Self {
        TaskStatus {
            state,
            message: Some(message),
            timestamp: current_timestamp(),
        }
    }
}

impl Task {
    /// Create a freshly submitted task with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            session_id: None,
            status: TaskStatus::new(TaskState::Submitted),
            artifacts: None,
            metadata: None,
        }
    }

    /// The task's current lifecycle state, derived from `status`.
    pub fn state(&self) -> TaskState {
        self.status.state
    }

    /// Produce the successor task with a new status, sharing all other
    /// fields. State changes always go through here; `status` is never
    /// mutated in place.
    pub fn with_status(self, status: TaskStatus) -> Self {
        Task { status, ..self }
    }
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request.
    pub fn new(
        id: impl Into<JsonRpcId>,
        method: impl Into<String>,
        params: Option<serde_json::Value>,
    ) -> Self {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(id.into()),
            method: method.into(),
            params,
        }
    }

    /// Create a request with a generated UUID id.
    pub fn with_generated_id(method: impl Into<String>, params: Option<serde_json::Value>) -> Self {
        Self::new(uuid::Uuid::new_v4().simple().to_string(), method, params)
    }

    /// Create a JSON-RPC 2.0 notification (no id, no response expected).
    pub fn notification(method: impl Into<String>, params: Option<serde_json::Value>) -> Self {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcResponse {
    /// Create a successful JSON-RPC response.
    pub fn success(id: Option<JsonRpcId>, result: serde_json::Value) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error JSON-RPC response.
    pub fn error(id: Option<JsonRpcId>, error: JsonRpcError) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Create a JSON-RPC error response from an [`A2AError`].
    ///
    /// Maps the error code, message, and data using the
    /// `From<A2AError> for JsonRpcError` conversion.
    pub fn from_a2a_error(id: Option<JsonRpcId>, err: A2AError) -> Self {
        let rpc_err: JsonRpcError = err.into();
        Self::error(id, rpc_err)
    }

    /// Whether this response carries a result rather than an error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ---- TaskState ----

    #[test]
    fn task_state_serialization() {
        assert_eq!(
            serde_json::to_string(&TaskState::Submitted).unwrap(),
            r#""submitted""#
        );
        assert_eq!(
            serde_json::to_string(&TaskState::InputRequired).unwrap(),
            r#""input-required""#
        );
        assert_eq!(
            serde_json::to_string(&TaskState::Unknown).unwrap(),
            r#""unknown""#
        );
    }

    #[test]
    fn task_state_deserialization() {
        let state: TaskState = serde_json::from_str(r#""input-required""#).unwrap();
        assert_eq!(state, TaskState::InputRequired);

        let state: TaskState = serde_json::from_str(r#""working""#).unwrap();
        assert_eq!(state, TaskState::Working);
    }

    #[test]
    fn task_state_rejects_unknown_string() {
        let result: Result<TaskState, _> = serde_json::from_str(r#""paused""#);
        assert!(result.is_err());

        let result = "unknown-string".parse::<TaskState>();
        assert!(result.is_err());
    }

    #[test]
    fn task_state_from_str_all_canonical() {
        for s in [
            "submitted",
            "working",
            "input-required",
            "completed",
            "canceled",
            "failed",
            "unknown",
        ] {
            let state: TaskState = s.parse().unwrap();
            assert_eq!(state.to_string(), s);
        }
    }

    #[test]
    fn terminal_states() {
        assert!(TaskState::Completed.is_terminal());
        assert!(TaskState::Canceled.is_terminal());
        assert!(TaskState::Failed.is_terminal());
        assert!(!TaskState::Submitted.is_terminal());
        assert!(!TaskState::Working.is_terminal());
        assert!(!TaskState::InputRequired.is_terminal());
        assert!(!TaskState::Unknown.is_terminal());
    }

    #[test]
    fn transition_table() {
        use TaskState::*;
        assert!(Submitted.can_transition_to(Working));
        assert!(!Submitted.can_transition_to(Completed));
        assert!(Working.can_transition_to(InputRequired));
        assert!(Working.can_transition_to(Completed));
        assert!(InputRequired.can_transition_to(Working));
        assert!(!InputRequired.can_transition_to(Completed));
        // Terminal states have no successors.
        for terminal in [Completed, Canceled, Failed] {
            for next in [
                Submitted,
                Working,
                InputRequired,
                Completed,
                Canceled,
                Failed,
                Unknown,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
        // Unknown is never a target.
        assert!(!Working.can_transition_to(Unknown));
        assert!(Unknown.can_transition_to(Working));
    }

    // ---- Role ----

    #[test]
    fn role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), r#""agent""#);
    }

    #[test]
    fn role_rejects_unknown_value() {
        let result: Result<Role, _> = serde_json::from_str(r#""moderator""#);
        assert!(result.is_err());
    }

    // ---- Part ----

    #[test]
    fn text_part_serialization() {
        let part = Part::text("Hello");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "Hello");
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn part_factory_dispatch() {
        let part = Part::from_wire(json!({"type": "text", "text": "hi"})).unwrap();
        assert!(matches!(part, Part::Text { .. }));

        let part = Part::from_wire(json!({"type": "data", "data": {"a": 1}})).unwrap();
        assert!(matches!(part, Part::Data { .. }));

        let part =
            Part::from_wire(json!({"type": "file", "file": {"uri": "https://x/f.pdf"}})).unwrap();
        assert!(matches!(part, Part::File { .. }));
    }

    #[test]
    fn part_unknown_type_fails() {
        let err = Part::from_wire(json!({"type": "bogus"})).unwrap_err();
        assert!(err.to_string().contains("Unknown part type: bogus"));
    }

    #[test]
    fn part_missing_type_fails() {
        let err = Part::from_wire(json!({"text": "hi"})).unwrap_err();
        assert!(err.to_string().contains("missing 'type' field"));
    }

    #[test]
    fn part_roundtrip() {
        let parts = vec![
            Part::text("hello"),
            Part::file_from_bytes(
                "SGVsbG8=",
                Some("hello.txt".into()),
                Some("text/plain".into()),
            ),
            Part::file_from_uri("https://example.com/file.pdf", None, None),
            Part::data(json!({"key": [1, 2, 3]})),
        ];
        for part in parts {
            let wire = part.to_wire().unwrap();
            let decoded = Part::from_wire(wire).unwrap();
            assert_eq!(decoded, part);
        }
    }

    // ---- FileContent ----

    #[test]
    fn file_content_exactly_one_of_bytes_uri() {
        let both = json!({"bytes": "SGVsbG8=", "uri": "https://x/f"});
        assert!(FileContent::from_wire(both).is_err());

        let neither = json!({"name": "f.txt"});
        assert!(FileContent::from_wire(neither).is_err());

        let bytes_only = FileContent::from_wire(json!({"bytes": "SGVsbG8="})).unwrap();
        assert!(matches!(bytes_only, FileContent::Bytes(_)));

        let uri_only = FileContent::from_wire(json!({"uri": "https://x/f"})).unwrap();
        assert!(matches!(uri_only, FileContent::Uri(_)));
    }

    #[test]
    fn file_content_mime_type_camel_case() {
        let fc = FileContent::from_wire(json!({
            "uri": "https://example.com/a.png",
            "mimeType": "image/png",
            "name": "a.png"
        }))
        .unwrap();
        assert_eq!(fc.mime_type(), Some("image/png"));
        assert_eq!(fc.name(), Some("a.png"));

        let wire = fc.to_wire().unwrap();
        assert_eq!(wire["mimeType"], "image/png");
        assert!(wire.get("mime_type").is_none());
    }

    #[test]
    fn file_content_snake_case_alias_accepted() {
        let fc = FileContent::from_wire(json!({
            "bytes": "QUJD",
            "mime_type": "text/plain"
        }))
        .unwrap();
        assert_eq!(fc.mime_type(), Some("text/plain"));
    }

    // ---- Message ----

    #[test]
    fn message_of_text() {
        let msg = Message::of_text(Role::User, "Hello, agent!", None);
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.parts.len(), 1);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["parts"][0]["type"], "text");
        assert_eq!(json["parts"][0]["text"], "Hello, agent!");
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn message_parts_decode_through_factory() {
        // Raw wire-shaped part objects dispatch through the Part decoder.
        let msg = Message::from_wire(json!({
            "role": "agent",
            "parts": [
                {"type": "text", "text": "hi"},
                {"type": "data", "data": {"x": 1}}
            ]
        }))
        .unwrap();
        assert!(matches!(msg.parts[0], Part::Text { .. }));
        assert!(matches!(msg.parts[1], Part::Data { .. }));

        let bad = Message::from_wire(json!({
            "role": "agent",
            "parts": [{"type": "bogus"}]
        }));
        assert!(bad.is_err());
    }

    // ---- Artifact ----

    #[test]
    fn artifact_index_defaults_to_zero() {
        let artifact =
            Artifact::from_wire(json!({"parts": [{"type": "text", "text": "x"}]})).unwrap();
        assert_eq!(artifact.index, 0);
        assert!(artifact.append.is_none());
        assert!(artifact.last_chunk.is_none());

        // index is always serialized, even at the default.
        let wire = artifact.to_wire().unwrap();
        assert_eq!(wire["index"], 0);
    }

    #[test]
    fn artifact_chunk_fields() {
        let artifact = Artifact {
            name: Some("out.txt".into()),
            description: None,
            parts: vec![Part::text("chunk")],
            index: 2,
            append: Some(true),
            last_chunk: Some(true),
            metadata: None,
        };
        let wire = artifact.to_wire().unwrap();
        assert_eq!(wire["index"], 2);
        assert_eq!(wire["append"], true);
        assert_eq!(wire["lastChunk"], true);
        assert!(wire.get("last_chunk").is_none());
    }

    // ---- TaskStatus & Task ----

    #[test]
    fn task_status_defaults_timestamp() {
        let status = TaskStatus::new(TaskState::Working);
        assert!(!status.timestamp.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&status.timestamp).is_ok());

        let decoded = TaskStatus::from_wire(json!({"state": "submitted"})).unwrap();
        assert_eq!(decoded.state, TaskState::Submitted);
        assert!(chrono::DateTime::parse_from_rfc3339(&decoded.timestamp).is_ok());
    }

    #[test]
    fn task_omits_absent_optionals() {
        let task = Task::new("t1");
        let json = task.to_wire().unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["status"]["state"], "submitted");
        assert!(json.get("sessionId").is_none());
        assert!(json.get("artifacts").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn task_state_accessor_and_with_status() {
        let task = Task::new("t1");
        assert_eq!(task.state(), TaskState::Submitted);

        let task = task.with_status(TaskStatus::new(TaskState::Working));
        assert_eq!(task.state(), TaskState::Working);
        assert_eq!(task.id, "t1");
    }

    #[test]
    fn task_session_id_alias() {
        let camel = Task::from_wire(json!({
            "id": "t1",
            "sessionId": "s1",
            "status": {"state": "working"}
        }))
        .unwrap();
        assert_eq!(camel.session_id.as_deref(), Some("s1"));

        let snake = Task::from_wire(json!({
            "id": "t1",
            "session_id": "s1",
            "status": {"state": "working"}
        }))
        .unwrap();
        assert_eq!(snake.session_id.as_deref(), Some("s1"));
    }

    // ---- AgentCard ----

    #[test]
    fn agent_card_defaults() {
        let card = AgentCard::from_wire(json!({
            "name": "A",
            "url": "https://x",
            "version": "1.0",
            "capabilities": {"streaming": true},
            "skills": []
        }))
        .unwrap();
        assert!(card.capabilities.streaming);
        assert!(!card.capabilities.push_notifications);
        assert_eq!(card.default_input_modes, vec!["text"]);
        assert_eq!(card.default_output_modes, vec!["text"]);
    }

    #[test]
    fn agent_card_capabilities_always_serialized() {
        let caps = AgentCapabilities::default();
        let wire = caps.to_wire().unwrap();
        assert_eq!(wire["streaming"], false);
        assert_eq!(wire["pushNotifications"], false);
        assert_eq!(wire["stateTransitionHistory"], false);
    }

    // ---- PushNotificationConfig ----

    #[test]
    fn push_notification_config_roundtrip() {
        let config = PushNotificationConfig {
            url: "https://example.com/webhook".to_string(),
            token: Some("secret-token".to_string()),
            authentication: Some(AgentAuthentication {
                schemes: vec!["Bearer".to_string()],
                credentials: None,
            }),
        };
        let wire = config.to_wire().unwrap();
        assert_eq!(wire["url"], "https://example.com/webhook");
        assert_eq!(wire["authentication"]["schemes"], json!(["Bearer"]));
        assert!(wire["authentication"].get("credentials").is_none());

        let decoded = PushNotificationConfig::from_wire(wire).unwrap();
        assert_eq!(decoded, config);
    }

    // ---- JSON-RPC ----

    #[test]
    fn json_rpc_request() {
        let req = JsonRpcRequest::new(1i64, "tasks/send", Some(json!({"id": "t1"})));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], 1);
        assert_eq!(json["method"], "tasks/send");
    }

    #[test]
    fn json_rpc_request_generated_id() {
        let req = JsonRpcRequest::with_generated_id("tasks/get", None);
        match req.id {
            Some(JsonRpcId::String(ref s)) => assert_eq!(s.len(), 32),
            other => panic!("expected generated string id, got {:?}", other),
        }
    }

    #[test]
    fn json_rpc_response_success() {
        let resp = JsonRpcResponse::success(Some(JsonRpcId::Number(1)), json!({"id": "t1"}));
        assert!(resp.is_success());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert!(json["result"].is_object());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn json_rpc_response_error() {
        let err = JsonRpcError {
            code: -32001,
            message: "Task not found".to_string(),
            data: None,
        };
        let resp = JsonRpcResponse::error(Some(JsonRpcId::Number(1)), err);
        assert!(!resp.is_success());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"]["code"], -32001);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn json_rpc_id_variants() {
        let id_str: JsonRpcId = "abc".into();
        assert_eq!(serde_json::to_string(&id_str).unwrap(), "\"abc\"");

        let id_num: JsonRpcId = 42i64.into();
        assert_eq!(serde_json::to_string(&id_num).unwrap(), "42");

        let id_null = JsonRpcId::Null;
        assert_eq!(serde_json::to_string(&id_null).unwrap(), "null");
    }

    // ---- WireFormat ----

    #[test]
    fn from_wire_str_distinguishes_parse_and_validation() {
        let parse_err = Task::from_wire_str("{not json").unwrap_err();
        assert_eq!(parse_err.code(), crate::error::PARSE_ERROR);

        let validation_err = Task::from_wire_str(r#"{"id": "t1"}"#).unwrap_err();
        assert_eq!(validation_err.code(), crate::error::INTERNAL_ERROR);
    }
}
