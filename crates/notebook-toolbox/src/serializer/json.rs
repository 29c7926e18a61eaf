//! Structural serialization back to `.ipynb`
//!
//! The inverse of [`Notebook::from_raw`]: every cell is re-emitted with empty
//! `metadata`, code cells also with empty `outputs`.

use crate::cell::Cell;
use crate::error::{NotebookError, Result};
use crate::notebook::Notebook;
use crate::raw::{RawCell, RawNotebook};
use crate::toolbox;
use log::{debug, trace};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Map;
use std::path::Path;

/// Options for JSON encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Pretty-print with indentation (default: true)
    pub pretty: bool,
    /// Spaces per indentation level when pretty (default: 1, as Jupyter writes)
    pub indent: usize,
}

impl Default for JsonOptions {
    #[inline]
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 1,
        }
    }
}

/// Encode a raw notebook as JSON text
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(raw: &RawNotebook, options: &JsonOptions) -> Result<String> {
    if !options.pretty {
        return Ok(serde_json::to_string(raw)?);
    }
    let indent = " ".repeat(options.indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    raw.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(<serde_json::Error as serde::ser::Error>::custom)
        .map_err(NotebookError::from)
}

/// Split `"<major>.<minor>"` into its two integer components
///
/// # Errors
///
/// Returns [`NotebookError::MalformedVersion`] unless the string is exactly two
/// dot-separated runs of ASCII digits.
pub fn parse_version(version: &str) -> Result<(u32, u32)> {
    let malformed = || NotebookError::MalformedVersion(version.to_string());
    let component = |part: &str| {
        // u32::from_str alone would also take a leading `+`
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        part.parse::<u32>().map_err(|_| malformed())
    };
    let (major, minor) = version.split_once('.').ok_or_else(malformed)?;
    Ok((component(major)?, component(minor)?))
}

/// Serializes a notebook back to the `.ipynb` structure
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    notebook: &'a Notebook,
    options: JsonOptions,
}

impl<'a> Serializer<'a> {
    /// Create a serializer with default options (pretty-printed)
    #[inline]
    #[must_use = "creates serializer with default options"]
    pub fn new(notebook: &'a Notebook) -> Self {
        Self::with_options(notebook, JsonOptions::default())
    }

    /// Create a serializer with custom options
    #[inline]
    #[must_use = "creates serializer with custom options"]
    pub const fn with_options(notebook: &'a Notebook, options: JsonOptions) -> Self {
        Self { notebook, options }
    }

    /// Rebuild the raw document
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::MalformedVersion`] if the notebook version is not
    /// `<major>.<minor>`.
    pub fn serialize(&self) -> Result<RawNotebook> {
        let (nbformat, nbformat_minor) = parse_version(self.notebook.version())?;
        let cells: Vec<RawCell> = self
            .notebook
            .iter()
            .map(|cell| {
                trace!("Serializing {} cell #{}", cell.cell_type(), cell.id());
                match cell {
                    Cell::Markdown(md) => RawCell::markdown(md.id(), md.source()),
                    Cell::Code(code) => {
                        RawCell::code(code.id(), code.source(), code.execution_count())
                    }
                }
            })
            .collect();

        Ok(RawNotebook {
            cells: Some(cells),
            metadata: Map::new(),
            nbformat: Some(nbformat),
            nbformat_minor: Some(nbformat_minor),
        })
    }

    /// Serialize to JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the version is malformed or encoding fails.
    pub fn to_json(&self) -> Result<String> {
        encode(&self.serialize()?, &self.options)
    }

    /// Serialize and write to `path`, overwriting it
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // Jupyter ends files with a newline
        let mut text = self.to_json()?;
        text.push('\n');
        debug!(
            "Writing notebook v{} ({} cells) as ipynb",
            self.notebook.version(),
            self.notebook.len()
        );
        toolbox::save_text(&text, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CodeCell, MarkdownCell};
    use serde_json::json;

    fn sample() -> Notebook {
        Notebook::new(
            "4.5",
            vec![
                MarkdownCell::new("m1", vec!["# Title\n".to_string(), "text".to_string()]).into(),
                CodeCell::new("c1", vec!["1 + 1".to_string()], Some(3)).into(),
            ],
        )
    }

    #[test]
    fn test_serialize_structure() {
        let nb = sample();
        let raw = Serializer::new(&nb).serialize().unwrap();
        let value = serde_json::to_value(&raw).unwrap();
        assert_eq!(
            value,
            json!({
                "cells": [
                    {
                        "cell_type": "markdown",
                        "id": "m1",
                        "metadata": {},
                        "source": ["# Title\n", "text"]
                    },
                    {
                        "cell_type": "code",
                        "execution_count": 3,
                        "id": "c1",
                        "metadata": {},
                        "outputs": [],
                        "source": ["1 + 1"]
                    }
                ],
                "metadata": {},
                "nbformat": 4,
                "nbformat_minor": 5
            })
        );
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("4.5").unwrap(), (4, 5));
        assert_eq!(parse_version("10.12").unwrap(), (10, 12));
        for bad in ["4", "4.5.1", "four.5", "4.", ".5", "", "+4.+5", "4.+5", " 4.5", "4.-1"] {
            assert!(
                matches!(parse_version(bad), Err(NotebookError::MalformedVersion(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_version_fails_serialize() {
        let nb = Notebook::new("v4", Vec::new());
        let err = Serializer::new(&nb).serialize().unwrap_err();
        assert!(matches!(err, NotebookError::MalformedVersion(v) if v == "v4"));
    }

    #[test]
    fn test_to_json_indent() {
        let nb = Notebook::new("4.5", Vec::new());
        let pretty = Serializer::new(&nb).to_json().unwrap();
        assert!(pretty.starts_with("{\n \"cells\": []"));

        let compact = Serializer::with_options(
            &nb,
            JsonOptions {
                pretty: false,
                indent: 1,
            },
        )
        .to_json()
        .unwrap();
        assert_eq!(
            compact,
            r#"{"cells":[],"metadata":{},"nbformat":4,"nbformat_minor":5}"#
        );
    }

    #[test]
    fn test_key_order_matches_jupyter() {
        let nb = sample();
        let text = Serializer::new(&nb).to_json().unwrap();
        let positions: Vec<usize> = [
            "\"execution_count\"",
            "\"id\": \"c1\"",
            "\"outputs\"",
            "\"source\": [\n    \"1 + 1\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    }
}
