//! Error types for notebook loading and serialization

use thiserror::Error;

/// Error type for notebook operations
#[derive(Error, Debug)]
pub enum NotebookError {
    /// I/O error when reading or writing a notebook file
    #[error("Failed to access notebook file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or encoding error
    #[error("Failed to parse notebook JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required cell field is absent
    #[error("Cell #{index} is missing required field `{field}`")]
    MissingField {
        /// Position of the cell in the raw document
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A required document-level field (`cells`, `nbformat`, `nbformat_minor`) is absent
    #[error("Notebook is missing required field `{0}`")]
    MissingDocumentField(&'static str),

    /// Cell type other than `code` or `markdown`
    #[error("Cell #{index} has unsupported cell type '{cell_type}'")]
    UnsupportedCellType {
        /// Position of the cell in the raw document
        index: usize,
        /// The `cell_type` value found
        cell_type: String,
    },

    /// Version string is not `<major>.<minor>`
    #[error("Malformed notebook version '{0}': expected <major>.<minor>")]
    MalformedVersion(String),
}

/// Result type alias for notebook operations
pub type Result<T> = std::result::Result<T, NotebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = NotebookError::MissingField {
            index: 2,
            field: "execution_count",
        };
        assert_eq!(
            err.to_string(),
            "Cell #2 is missing required field `execution_count`"
        );
    }

    #[test]
    fn test_missing_document_field_message() {
        let err = NotebookError::MissingDocumentField("nbformat_minor");
        assert_eq!(
            err.to_string(),
            "Notebook is missing required field `nbformat_minor`"
        );
    }

    #[test]
    fn test_io_error_is_carried() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: NotebookError = io.into();
        match err {
            NotebookError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
