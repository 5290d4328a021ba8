//! Utility functions for creating A2A Artifact objects.

use crate::types::{Artifact, Part};
use crate::utils::parts::get_text_parts;
use serde_json::Value;

/// Creates a new single-chunk Artifact (index 0, no chunking fields).
///
/// # Example
///
/// ```
/// use a2a_protocol::types::Part;
/// use a2a_protocol::utils::new_artifact;
///
/// let parts = vec![Part::text("Sample text")];
/// let artifact = new_artifact(parts, "My Artifact", Some("This is a test artifact."));
/// assert_eq!(artifact.name, Some("My Artifact".to_string()));
/// assert_eq!(artifact.index, 0);
/// ```
pub fn new_artifact(
    parts: Vec<Part>,
    name: impl Into<String>,
    description: Option<impl Into<String>>,
) -> Artifact {
    Artifact {
        name: Some(name.into()),
        description: description.map(|d| d.into()),
        parts,
        index: 0,
        append: None,
        last_chunk: None,
        metadata: None,
    }
}

/// Creates a new Artifact containing only a single text Part.
///
/// # Example
///
/// ```
/// use a2a_protocol::utils::new_text_artifact;
///
/// let artifact = new_text_artifact("Text Artifact", "Hello, world!", Some("A greeting"));
/// assert_eq!(artifact.name, Some("Text Artifact".to_string()));
/// ```
pub fn new_text_artifact(
    name: impl Into<String>,
    text: impl Into<String>,
    description: Option<impl Into<String>>,
) -> Artifact {
    new_artifact(vec![Part::text(text)], name, description)
}

/// Creates a new Artifact containing only a single data Part.
pub fn new_data_artifact(
    name: impl Into<String>,
    data: Value,
    description: Option<impl Into<String>>,
) -> Artifact {
    new_artifact(vec![Part::data(data)], name, description)
}

/// Extracts and joins all text content from an Artifact's parts.
///
/// Returns an empty string if the artifact has no text parts.
///
/// # Example
///
/// ```
/// use a2a_protocol::types::Part;
/// use a2a_protocol::utils::{get_artifact_text, new_artifact};
///
/// let parts = vec![Part::text("First line"), Part::text("Second line")];
/// let artifact = new_artifact(parts, "Multi-line", None::<String>);
/// assert_eq!(get_artifact_text(&artifact, "\n"), "First line\nSecond line");
/// ```
pub fn get_artifact_text(artifact: &Artifact, delimiter: &str) -> String {
    get_text_parts(&artifact.parts).join(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_artifact_single_chunk() {
        let artifact = new_artifact(vec![Part::text("Sample text")], "test_artifact", None::<String>);
        assert_eq!(artifact.index, 0);
        assert!(artifact.append.is_none());
        assert!(artifact.last_chunk.is_none());
    }

    #[test]
    fn test_new_text_artifact() {
        let artifact = new_text_artifact("My Artifact", "Hello, world!", Some("A greeting"));
        assert_eq!(artifact.name, Some("My Artifact".to_string()));
        assert_eq!(artifact.description, Some("A greeting".to_string()));
        assert_eq!(artifact.parts.len(), 1);
    }

    #[test]
    fn test_new_data_artifact() {
        let data = json!({"key": "value"});
        let artifact = new_data_artifact("Data Artifact", data.clone(), None::<String>);
        assert_eq!(artifact.name, Some("Data Artifact".to_string()));
        assert_eq!(artifact.parts.len(), 1);
    }

    #[test]
    fn test_get_artifact_text_empty() {
        let artifact = new_artifact(vec![], "Empty", None::<String>);
        assert_eq!(get_artifact_text(&artifact, "\n"), "");
    }
}
