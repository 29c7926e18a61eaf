//! Notebook aggregate and loader
//!
//! [`Notebook::from_raw`] turns a parsed `.ipynb` document into the object model.
//! Cell `metadata` and `outputs` are dropped on the way in.

use crate::cell::{Cell, CellType, CodeCell, MarkdownCell};
use crate::error::{NotebookError, Result};
use crate::raw::{RawCell, RawNotebook};
use crate::toolbox;
use log::{debug, warn};
use std::path::Path;

/// What the loader does with a cell whose type is neither `code` nor `markdown`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnknownCellPolicy {
    /// Drop the cell and keep loading
    #[default]
    Skip,
    /// Fail with [`NotebookError::UnsupportedCellType`]
    Fail,
}

/// Options for loading a notebook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadOptions {
    /// Handling of `raw` and other unsupported cell types (default: skip)
    pub unknown_cells: UnknownCellPolicy,
}

/// A Jupyter notebook: format version plus cells in document order
///
/// Built once at load time; no operation mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notebook {
    version: String,
    cells: Vec<Cell>,
}

impl Notebook {
    /// Build a notebook from its parts
    #[must_use]
    pub fn new(version: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            version: version.into(),
            cells,
        }
    }

    /// Load a notebook from a raw document with default options
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::MissingDocumentField`] if `cells`, `nbformat` or
    /// `nbformat_minor` is absent, [`NotebookError::MissingField`] if a cell lacks
    /// a required field.
    pub fn from_raw(raw: RawNotebook) -> Result<Self> {
        Self::from_raw_with_options(raw, LoadOptions::default())
    }

    /// Load a notebook from a raw document
    ///
    /// # Errors
    ///
    /// Returns [`NotebookError::MissingDocumentField`] if a document field is
    /// absent, [`NotebookError::MissingField`] if a cell lacks a required field,
    /// or [`NotebookError::UnsupportedCellType`] under [`UnknownCellPolicy::Fail`].
    pub fn from_raw_with_options(raw: RawNotebook, options: LoadOptions) -> Result<Self> {
        let version = toolbox::get_format_version(&raw)?;
        let raw_cells = raw
            .cells
            .ok_or(NotebookError::MissingDocumentField("cells"))?;
        let mut cells = Vec::with_capacity(raw_cells.len());

        for (index, cell) in raw_cells.into_iter().enumerate() {
            if let Some(cell) = convert_cell(clean_cell(cell), index, options)? {
                cells.push(cell);
            }
        }

        debug!("Loaded notebook v{version} with {} cells", cells.len());
        Ok(Self { version, cells })
    }

    /// Load a notebook from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a cell is incomplete.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_raw(RawNotebook::from_json_str(content)?)
    }

    /// Load a notebook from an `.ipynb` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the JSON is malformed,
    /// or a cell is incomplete.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_raw(toolbox::load_ipynb(path)?)
    }

    /// Format version, `"<major>.<minor>"`
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Cells in document order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate the cells in document order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the notebook has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell with the given id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id() == id)
    }
}

impl<'a> IntoIterator for &'a Notebook {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Strip the keys the object model does not keep
fn clean_cell(cell: RawCell) -> RawCell {
    RawCell {
        metadata: None,
        outputs: None,
        ..cell
    }
}

fn convert_cell(cell: RawCell, index: usize, options: LoadOptions) -> Result<Option<Cell>> {
    let cell_type = cell.cell_type.clone().ok_or(NotebookError::MissingField {
        index,
        field: "cell_type",
    })?;
    match cell_type.parse::<CellType>() {
        Ok(CellType::Markdown) => Ok(Some(MarkdownCell::from_raw(cell, index)?.into())),
        Ok(CellType::Code) => Ok(Some(CodeCell::from_raw(cell, index)?.into())),
        Err(_) => match options.unknown_cells {
            UnknownCellPolicy::Skip => {
                warn!("Skipping cell #{index} with unsupported type '{cell_type}'");
                Ok(None)
            }
            UnknownCellPolicy::Fail => {
                Err(NotebookError::UnsupportedCellType { index, cell_type })
            }
        },
    }
}
