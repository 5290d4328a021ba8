//! Utility functions for working with A2A Part objects.

use crate::types::{FileContent, Part};
use serde_json::Value;

/// Extracts text content from all text Parts in a list.
///
/// # Example
///
/// ```
/// use a2a_protocol::types::Part;
/// use a2a_protocol::utils::get_text_parts;
///
/// let parts = vec![Part::text("Hello"), Part::text("World")];
/// let texts = get_text_parts(&parts);
/// assert_eq!(texts, vec!["Hello", "World"]);
/// ```
pub fn get_text_parts(parts: &[Part]) -> Vec<String> {
    parts
        .iter()
        .filter_map(|part| match part {
            Part::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Extracts data content from all data Parts in a list.
///
/// # Example
///
/// ```
/// use a2a_protocol::types::Part;
/// use a2a_protocol::utils::get_data_parts;
/// use serde_json::json;
///
/// let parts = vec![Part::data(json!({"key": "value"}))];
/// let data = get_data_parts(&parts);
/// assert_eq!(data, vec![json!({"key": "value"})]);
/// ```
pub fn get_data_parts(parts: &[Part]) -> Vec<Value> {
    parts
        .iter()
        .filter_map(|part| match part {
            Part::Data { data, .. } => Some(data.clone()),
            _ => None,
        })
        .collect()
}

/// Extracts file content from all file Parts in a list.
///
/// # Example
///
/// ```
/// use a2a_protocol::types::Part;
/// use a2a_protocol::utils::get_file_parts;
///
/// let parts = vec![Part::file_from_uri("file://path/to/file", None, None)];
/// let files = get_file_parts(&parts);
/// assert_eq!(files.len(), 1);
/// ```
pub fn get_file_parts(parts: &[Part]) -> Vec<FileContent> {
    parts
        .iter()
        .filter_map(|part| match part {
            Part::File { file, .. } => Some(file.clone()),
            _ => None,
        })
        .collect()
}
