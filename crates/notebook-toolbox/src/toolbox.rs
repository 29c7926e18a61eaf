//! File and raw-document helpers
//!
//! Thin functions shared by the loader and the serializers: reading and writing
//! `.ipynb` files, accessors on [`RawNotebook`], and the percent-format renderer
//! for raw documents.

use crate::error::{NotebookError, Result};
use crate::notebook::Notebook;
use crate::raw::{RawCell, RawNotebook};
use crate::serializer::json::{encode, JsonOptions};
use crate::serializer::PyPercentSerializer;
use log::debug;
use std::fs;
use std::path::Path;

/// Read and parse an `.ipynb` file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a notebook document.
pub fn load_ipynb<P: AsRef<Path>>(path: P) -> Result<RawNotebook> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    RawNotebook::from_json_str(&content)
}

/// Write a raw notebook as JSON, overwriting `path`
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_ipynb<P: AsRef<Path>>(raw: &RawNotebook, path: P) -> Result<()> {
    let mut text = encode(raw, &JsonOptions::default())?;
    text.push('\n');
    save_text(&text, path)
}

/// Write text to `path`, overwriting it
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_text<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text)?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Cells of a raw notebook, in document order
///
/// # Errors
///
/// Returns [`NotebookError::MissingDocumentField`] if `cells` is absent.
pub fn get_cells(raw: &RawNotebook) -> Result<&[RawCell]> {
    raw.cells
        .as_deref()
        .ok_or(NotebookError::MissingDocumentField("cells"))
}

/// Format version as `"<nbformat>.<nbformat_minor>"`
///
/// # Errors
///
/// Returns [`NotebookError::MissingDocumentField`] if `nbformat` or
/// `nbformat_minor` is absent.
pub fn get_format_version(raw: &RawNotebook) -> Result<String> {
    let major = raw
        .nbformat
        .ok_or(NotebookError::MissingDocumentField("nbformat"))?;
    let minor = raw
        .nbformat_minor
        .ok_or(NotebookError::MissingDocumentField("nbformat_minor"))?;
    Ok(format!("{major}.{minor}"))
}

/// Render a raw notebook in py-percent format
///
/// # Errors
///
/// Returns an error if a cell lacks a required field.
pub fn to_percent(raw: &RawNotebook) -> Result<String> {
    let notebook = Notebook::from_raw(raw.clone())?;
    Ok(PyPercentSerializer::new(&notebook).to_py_percent())
}
