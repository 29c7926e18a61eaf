//! Py-percent script export
//!
//! Each cell becomes a block opened by a `# %%` marker (`# %% [markdown]` for
//! prose). Markdown lines are commented out with `# `; code is written verbatim.
//! Blocks are separated by exactly one blank line.

use crate::cell::Cell;
use crate::error::Result;
use crate::notebook::Notebook;
use crate::toolbox;
use log::{debug, trace};
use std::path::Path;

const CODE_MARKER: &str = "# %%";
const MARKDOWN_MARKER: &str = "# %% [markdown]";
const COMMENT_PREFIX: &str = "# ";

/// Prints a notebook in py-percent format
#[derive(Debug, Clone, Copy)]
pub struct PyPercentSerializer<'a> {
    notebook: &'a Notebook,
}

impl<'a> PyPercentSerializer<'a> {
    /// Create a py-percent serializer for `notebook`
    #[inline]
    #[must_use]
    pub const fn new(notebook: &'a Notebook) -> Self {
        Self { notebook }
    }

    /// Render the notebook as a py-percent script
    #[must_use = "this function returns the rendered script"]
    pub fn to_py_percent(&self) -> String {
        self.notebook
            .iter()
            .map(render_cell)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render and write the script to `path`, overwriting it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        debug!(
            "Writing notebook v{} ({} cells) as py-percent",
            self.notebook.version(),
            self.notebook.len()
        );
        toolbox::save_text(&self.to_py_percent(), path)
    }
}

fn render_cell(cell: &Cell) -> String {
    trace!("Rendering {} cell #{} as py-percent", cell.cell_type(), cell.id());
    let (marker, prefix) = match cell {
        Cell::Markdown(_) => (MARKDOWN_MARKER, COMMENT_PREFIX),
        Cell::Code(_) => (CODE_MARKER, ""),
    };

    let mut block = String::from(marker);
    for line in cell.lines() {
        block.push('\n');
        block.push_str(prefix);
        block.push_str(&line);
    }
    block
}
