//! Cell model
//!
//! A notebook cell is either Markdown prose or Code source. Both kinds are
//! immutable once built; [`Cell`] is the sum type the renderers match on.

use crate::error::{NotebookError, Result};
use crate::raw::RawCell;

/// Type of notebook cell, as spelled in the `cell_type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Executable code cell
    Code,
    /// Markdown documentation cell
    Markdown,
}

impl std::fmt::Display for CellType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Code => "code",
            Self::Markdown => "markdown",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CellType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "code" => Ok(Self::Code),
            "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown cell type '{s}'. Expected: code, markdown")),
        }
    }
}

/// A cell of code in a Jupyter notebook
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeCell {
    id: String,
    source: Vec<String>,
    execution_count: Option<u32>,
}

impl CodeCell {
    /// Build a code cell from its parts
    #[must_use]
    pub fn new(id: impl Into<String>, source: Vec<String>, execution_count: Option<u32>) -> Self {
        Self {
            id: id.into(),
            source,
            execution_count,
        }
    }

    /// Build a code cell from a raw cell record
    ///
    /// `index` is the cell's position in the document, used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::MissingField`] if `id`, `source` or
    /// `execution_count` is absent. A `null` execution count is accepted.
    pub fn from_raw(raw: RawCell, index: usize) -> Result<Self> {
        let id = raw.id.ok_or(NotebookError::MissingField { index, field: "id" })?;
        let source = raw.source.ok_or(NotebookError::MissingField {
            index,
            field: "source",
        })?;
        let execution_count = raw.execution_count.ok_or(NotebookError::MissingField {
            index,
            field: "execution_count",
        })?;
        Ok(Self::new(id, source.into_lines(), execution_count))
    }

    /// Cell identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source lines
    #[inline]
    #[must_use]
    pub fn source(&self) -> &[String] {
        &self.source
    }

    /// Execution counter, `None` if the cell was never run
    #[inline]
    #[must_use]
    pub const fn execution_count(&self) -> Option<u32> {
        self.execution_count
    }
}

/// A cell of Markdown markup in a Jupyter notebook
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkdownCell {
    id: String,
    source: Vec<String>,
}

impl MarkdownCell {
    /// Build a markdown cell from its parts
    #[must_use]
    pub fn new(id: impl Into<String>, source: Vec<String>) -> Self {
        Self {
            id: id.into(),
            source,
        }
    }

    /// Build a markdown cell from a raw cell record
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::MissingField`] if `id` or `source` is absent.
    pub fn from_raw(raw: RawCell, index: usize) -> Result<Self> {
        let id = raw.id.ok_or(NotebookError::MissingField { index, field: "id" })?;
        let source = raw.source.ok_or(NotebookError::MissingField {
            index,
            field: "source",
        })?;
        Ok(Self::new(id, source.into_lines()))
    }

    /// Cell identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source lines
    #[inline]
    #[must_use]
    pub fn source(&self) -> &[String] {
        &self.source
    }
}

/// Any notebook cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Code cell
    Code(CodeCell),
    /// Markdown cell
    Markdown(MarkdownCell),
}

impl Cell {
    /// Cell identifier
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Code(cell) => cell.id(),
            Self::Markdown(cell) => cell.id(),
        }
    }

    /// Source lines as stored
    #[must_use]
    pub fn source(&self) -> &[String] {
        match self {
            Self::Code(cell) => cell.source(),
            Self::Markdown(cell) => cell.source(),
        }
    }

    /// Kind of this cell
    #[must_use]
    pub const fn cell_type(&self) -> CellType {
        match self {
            Self::Code(_) => CellType::Code,
            Self::Markdown(_) => CellType::Markdown,
        }
    }

    /// Source split into display lines, without terminators
    ///
    /// A single trailing newline does not open an extra empty line.
    /// An empty source has no lines. CRLF terminators are treated as `\n`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let text = self.source().concat();
        if text.is_empty() {
            return Vec::new();
        }
        let text = text.strip_suffix('\n').unwrap_or(&text);
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }
}

impl From<CodeCell> for Cell {
    #[inline]
    fn from(cell: CodeCell) -> Self {
        Self::Code(cell)
    }
}

impl From<MarkdownCell> for Cell {
    #[inline]
    fn from(cell: MarkdownCell) -> Self {
        Self::Markdown(cell)
    }
}
