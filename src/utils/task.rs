//! Utility functions for creating A2A Task objects.

use crate::error::{A2AError, A2AResult};
use crate::types::{Artifact, Message, Part, Task, TaskState, TaskStatus};
use uuid::Uuid;

/// Creates a new Task object from an initial user message, with a generated
/// task id and 'submitted' status.
///
/// # Errors
///
/// Returns an invalid-parameters error if:
/// - The message parts are empty
/// - Any text part has empty content
///
/// # Example
///
/// ```
/// use a2a_protocol::types::Message;
/// use a2a_protocol::utils::new_task;
///
/// let task = new_task(Message::user("Hello")).unwrap();
/// assert_eq!(task.status.state, a2a_protocol::types::TaskState::Submitted);
/// ```
pub fn new_task(request: Message) -> A2AResult<Task> {
    if request.parts.is_empty() {
        return Err(A2AError::invalid_params()
            .with_data(serde_json::json!("Message parts cannot be empty")));
    }

    for part in &request.parts {
        if let Part::Text { text, .. } = part {
            if text.is_empty() {
                return Err(A2AError::invalid_params()
                    .with_data(serde_json::json!("Text part content cannot be empty")));
            }
        }
    }

    Ok(Task {
        id: Uuid::new_v4().to_string(),
        session_id: None,
        status: TaskStatus::with_message(TaskState::Submitted, request),
        artifacts: None,
        metadata: None,
    })
}

/// Creates a Task object in the 'completed' state carrying the given
/// artifacts.
///
/// # Errors
///
/// Returns an invalid-parameters error if `artifacts` is empty.
///
/// # Example
///
/// ```
/// use a2a_protocol::utils::{completed_task, new_text_artifact};
///
/// let artifact = new_text_artifact("Result", "Task complete", None::<String>);
/// let task = completed_task("task-123", Some("session-456".to_string()), vec![artifact]).unwrap();
/// assert_eq!(task.status.state, a2a_protocol::types::TaskState::Completed);
/// ```
pub fn completed_task(
    task_id: impl Into<String>,
    session_id: Option<String>,
    artifacts: Vec<Artifact>,
) -> A2AResult<Task> {
    if artifacts.is_empty() {
        return Err(A2AError::invalid_params()
            .with_data(serde_json::json!("artifacts must be a non-empty list")));
    }

    Ok(Task {
        id: task_id.into(),
        session_id,
        status: TaskStatus::new(TaskState::Completed),
        artifacts: Some(artifacts),
        metadata: None,
    })
}
