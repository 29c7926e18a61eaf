//! On-disk ipynb schema
//!
//! These records mirror the JSON layout of an nbformat 4 document field for field.
//! Fields that the loader requires are still `Option` here so that their absence
//! surfaces as [`NotebookError::MissingDocumentField`](crate::NotebookError::MissingDocumentField)
//! or, inside a cell, as [`NotebookError::MissingField`](crate::NotebookError::MissingField)
//! with the offending cell's position, instead of a generic JSON error.
//!
//! Field order matches the alphabetical key order Jupyter writes.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A whole `.ipynb` document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNotebook {
    /// Cells in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<RawCell>>,
    /// Notebook-level metadata (ignored on read)
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Major format version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbformat: Option<u32>,
    /// Minor format version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbformat_minor: Option<u32>,
}

impl RawNotebook {
    /// Parse a raw notebook from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of the expected shape.
    /// Absent fields are accepted here and reported by the loader.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// A single cell as stored in the document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCell {
    /// `code`, `markdown`, or anything else a producer wrote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_type: Option<String>,
    /// Outer `None`: key absent. `Some(None)`: key present with `null`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_count: Option<Option<u32>>,
    /// Cell identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Cell metadata (dropped on load)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Code cell outputs (dropped on load)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Value>>,
    /// Cell source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<MultilineSource>,
}

impl RawCell {
    /// Markdown cell with empty metadata
    #[must_use]
    pub fn markdown(id: &str, source: &[String]) -> Self {
        Self {
            cell_type: Some("markdown".to_string()),
            execution_count: None,
            id: Some(id.to_string()),
            metadata: Some(Map::new()),
            outputs: None,
            source: Some(MultilineSource::Lines(source.to_vec())),
        }
    }

    /// Code cell with empty metadata and outputs
    #[must_use]
    pub fn code(id: &str, source: &[String], execution_count: Option<u32>) -> Self {
        Self {
            cell_type: Some("code".to_string()),
            execution_count: Some(execution_count),
            id: Some(id.to_string()),
            metadata: Some(Map::new()),
            outputs: Some(Vec::new()),
            source: Some(MultilineSource::Lines(source.to_vec())),
        }
    }
}

/// nbformat "multiline string": either one string or a list of lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultilineSource {
    /// List of lines, each newline-terminated except possibly the last
    Lines(Vec<String>),
    /// The whole source as a single string
    Text(String),
}

impl MultilineSource {
    /// Normalise to the list-of-lines form
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines,
            Self::Text(text) => split_lines(&text),
        }
    }
}

/// Split text after every `\n`, keeping the terminators
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(String::from).collect()
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_count_absent_vs_null() {
        let absent: RawCell =
            serde_json::from_str(r#"{"cell_type": "code", "id": "a", "source": []}"#).unwrap();
        assert_eq!(absent.execution_count, None);

        let null: RawCell = serde_json::from_str(
            r#"{"cell_type": "code", "id": "a", "source": [], "execution_count": null}"#,
        )
        .unwrap();
        assert_eq!(null.execution_count, Some(None));

        let counted: RawCell = serde_json::from_str(
            r#"{"cell_type": "code", "id": "a", "source": [], "execution_count": 7}"#,
        )
        .unwrap();
        assert_eq!(counted.execution_count, Some(Some(7)));
    }

    #[test]
    fn test_source_as_single_string() {
        let cell: RawCell = serde_json::from_str(
            r##"{"cell_type": "markdown", "id": "a", "source": "# Title\nBody"}"##,
        )
        .unwrap();
        assert_eq!(
            cell.source.unwrap().into_lines(),
            vec!["# Title\n".to_string(), "Body".to_string()]
        );
    }

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\n"), vec!["a\n"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a\n", "\n", "b"]);
    }

    #[test]
    fn test_null_execution_count_is_written() {
        let cell = RawCell::code("c1", &["x = 1".to_string()], None);
        let json = serde_json::to_value(&cell).unwrap();
        assert!(json["execution_count"].is_null());
        assert!(json.as_object().unwrap().contains_key("execution_count"));
        assert_eq!(json["outputs"], serde_json::json!([]));
    }

    #[test]
    fn test_markdown_cell_has_no_outputs_key() {
        let cell = RawCell::markdown("m1", &["hi".to_string()]);
        let json = serde_json::to_value(&cell).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("outputs"));
        assert!(!obj.contains_key("execution_count"));
        assert_eq!(json["metadata"], serde_json::json!({}));
    }

    #[test]
    fn test_missing_top_level_field_is_left_to_loader() {
        let raw = RawNotebook::from_json_str(r#"{"cells": [], "nbformat": 4}"#).unwrap();
        assert_eq!(raw.nbformat, Some(4));
        assert_eq!(raw.nbformat_minor, None);
    }

    #[test]
    fn test_wrong_field_type_is_json_error() {
        let err = RawNotebook::from_json_str(r#"{"cells": {}, "nbformat": 4}"#).unwrap_err();
        assert!(matches!(err, crate::NotebookError::Json(_)));
    }

    #[test]
    fn test_cell_without_type_parses() {
        let cell: RawCell = serde_json::from_str(r#"{"id": "a", "source": []}"#).unwrap();
        assert_eq!(cell.cell_type, None);
    }
}
