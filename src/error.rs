//! A2A error types — JSON-RPC error codes plus protocol-specific errors.
//!
//! The taxonomy covers the five standard JSON-RPC 2.0 codes (-32700 through
//! -32603) and four A2A codes (-32001 through -32004). Every kind carries a
//! fixed default message and an optional structured `data` payload; the
//! default messages are part of the wire contract and stay stable across
//! versions.

use crate::types::JsonRpcError;

// ---------------------------------------------------------------------------
// Standard JSON-RPC 2.0 error codes
// ---------------------------------------------------------------------------

/// Invalid JSON was received by the server.
pub const PARSE_ERROR: i64 = -32700;

/// The JSON sent is not a valid Request object.
pub const INVALID_REQUEST: i64 = -32600;

/// The method does not exist / is not available.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Invalid method parameter(s).
pub const INVALID_PARAMS: i64 = -32602;

/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i64 = -32603;

// ---------------------------------------------------------------------------
// A2A-specific error codes
// ---------------------------------------------------------------------------

/// The requested task was not found.
pub const TASK_NOT_FOUND: i64 = -32001;

/// The task cannot be canceled in its current state.
pub const TASK_NOT_CANCELABLE: i64 = -32002;

/// Push notifications are not supported by this agent.
pub const PUSH_NOTIFICATION_NOT_SUPPORTED: i64 = -32003;

/// The requested operation is not supported.
pub const UNSUPPORTED_OPERATION: i64 = -32004;

// ---------------------------------------------------------------------------
// A2AError enum
// ---------------------------------------------------------------------------

/// Unified error type for all A2A and JSON-RPC errors.
///
/// Each protocol variant carries a message and an optional structured data
/// payload; constructors supply the canonical default message. The extra
/// [`A2AError::Validation`] variant captures local shape-validation failures
/// that have no wire code of their own and coerce to [`INTERNAL_ERROR`].
///
/// `Display` prints the bare message, so formatting an error yields exactly
/// the string carried on the wire (e.g. `"Task not found"`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum A2AError {
    /// Invalid JSON payload (-32700).
    #[error("{message}")]
    ParseError {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Request payload validation error (-32600).
    #[error("{message}")]
    InvalidRequest {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Method not found (-32601).
    #[error("{message}")]
    MethodNotFound {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Invalid parameters (-32602).
    #[error("{message}")]
    InvalidParams {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Internal error (-32603).
    #[error("{message}")]
    InternalError {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Task not found (-32001).
    #[error("{message}")]
    TaskNotFound {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Task cannot be canceled (-32002).
    #[error("{message}")]
    TaskNotCancelable {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Push notifications not supported (-32003).
    #[error("{message}")]
    PushNotificationNotSupported {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Operation not supported (-32004).
    #[error("{message}")]
    UnsupportedOperation {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Local validation failure with no wire code of its own.
    #[error("{0}")]
    Validation(String),
}

impl A2AError {
    /// Invalid JSON payload (-32700).
    pub fn parse_error() -> Self {
        A2AError::ParseError {
            message: "Invalid JSON payload".to_string(),
            data: None,
        }
    }

    /// Request payload validation error (-32600).
    pub fn invalid_request() -> Self {
        A2AError::InvalidRequest {
            message: "Request payload validation error".to_string(),
            data: None,
        }
    }

    /// Method not found (-32601).
    pub fn method_not_found() -> Self {
        A2AError::MethodNotFound {
            message: "Method not found".to_string(),
            data: None,
        }
    }

    /// Invalid parameters (-32602).
    pub fn invalid_params() -> Self {
        A2AError::InvalidParams {
            message: "Invalid parameters".to_string(),
            data: None,
        }
    }

    /// Internal error (-32603).
    pub fn internal_error() -> Self {
        A2AError::InternalError {
            message: "Internal error".to_string(),
            data: None,
        }
    }

    /// Task not found (-32001).
    pub fn task_not_found() -> Self {
        A2AError::TaskNotFound {
            message: "Task not found".to_string(),
            data: None,
        }
    }

    /// Task cannot be canceled (-32002).
    pub fn task_not_cancelable() -> Self {
        A2AError::TaskNotCancelable {
            message: "Task cannot be canceled".to_string(),
            data: None,
        }
    }

    /// Push notifications not supported (-32003).
    pub fn push_notification_not_supported() -> Self {
        A2AError::PushNotificationNotSupported {
            message: "Push Notification is not supported".to_string(),
            data: None,
        }
    }

    /// Operation not supported (-32004).
    pub fn unsupported_operation() -> Self {
        A2AError::UnsupportedOperation {
            message: "This operation is not supported".to_string(),
            data: None,
        }
    }

    /// Local validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        A2AError::Validation(message.into())
    }

    /// Attach structured data to this error.
    pub fn with_data(self, data: serde_json::Value) -> Self {
        match self {
            A2AError::ParseError { message, .. } => A2AError::ParseError {
                message,
                data: Some(data),
            },
            A2AError::InvalidRequest { message, .. } => A2AError::InvalidRequest {
                message,
                data: Some(data),
            },
            A2AError::MethodNotFound { message, .. } => A2AError::MethodNotFound {
                message,
                data: Some(data),
            },
            A2AError::InvalidParams { message, .. } => A2AError::InvalidParams {
                message,
                data: Some(data),
            },
            A2AError::InternalError { message, .. } => A2AError::InternalError {
                message,
                data: Some(data),
            },
            A2AError::TaskNotFound { message, .. } => A2AError::TaskNotFound {
                message,
                data: Some(data),
            },
            A2AError::TaskNotCancelable { message, .. } => A2AError::TaskNotCancelable {
                message,
                data: Some(data),
            },
            A2AError::PushNotificationNotSupported { message, .. } => {
                A2AError::PushNotificationNotSupported {
                    message,
                    data: Some(data),
                }
            }
            A2AError::UnsupportedOperation { message, .. } => A2AError::UnsupportedOperation {
                message,
                data: Some(data),
            },
            A2AError::Validation(message) => A2AError::Validation(message),
        }
    }

    /// The JSON-RPC error code for this error.
    pub fn code(&self) -> i64 {
        match self {
            A2AError::ParseError { .. } => PARSE_ERROR,
            A2AError::InvalidRequest { .. } => INVALID_REQUEST,
            A2AError::MethodNotFound { .. } => METHOD_NOT_FOUND,
            A2AError::InvalidParams { .. } => INVALID_PARAMS,
            A2AError::InternalError { .. } => INTERNAL_ERROR,
            A2AError::TaskNotFound { .. } => TASK_NOT_FOUND,
            A2AError::TaskNotCancelable { .. } => TASK_NOT_CANCELABLE,
            A2AError::PushNotificationNotSupported { .. } => PUSH_NOTIFICATION_NOT_SUPPORTED,
            A2AError::UnsupportedOperation { .. } => UNSUPPORTED_OPERATION,
            A2AError::Validation(_) => INTERNAL_ERROR,
        }
    }

    /// The structured data payload, if any.
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            A2AError::ParseError { data, .. }
            | A2AError::InvalidRequest { data, .. }
            | A2AError::MethodNotFound { data, .. }
            | A2AError::InvalidParams { data, .. }
            | A2AError::InternalError { data, .. }
            | A2AError::TaskNotFound { data, .. }
            | A2AError::TaskNotCancelable { data, .. }
            | A2AError::PushNotificationNotSupported { data, .. }
            | A2AError::UnsupportedOperation { data, .. } => data.as_ref(),
            A2AError::Validation(_) => None,
        }
    }
}

/// Convert an [`A2AError`] into the wire-level JSON-RPC error object.
///
/// Protocol variants map directly; [`A2AError::Validation`] coerces to
/// [`INTERNAL_ERROR`] carrying its own message.
impl From<A2AError> for JsonRpcError {
    fn from(err: A2AError) -> Self {
        match err {
            A2AError::Validation(detail) => {
                tracing::debug!(%detail, "coercing validation failure to internal error");
                JsonRpcError {
                    code: INTERNAL_ERROR,
                    message: detail,
                    data: None,
                }
            }
            other => JsonRpcError {
                code: other.code(),
                message: other.to_string(),
                data: other.data().cloned(),
            },
        }
    }
}

/// JSON text that fails to parse maps to the parse-error kind, with the
/// decoder's detail in `data`.
impl From<serde_json::Error> for A2AError {
    fn from(err: serde_json::Error) -> Self {
        A2AError::parse_error().with_data(serde_json::Value::String(err.to_string()))
    }
}

/// Result alias used throughout the crate.
pub type A2AResult<T> = Result<T, A2AError>;
