//! Human-readable outline of a notebook's structure
//!
//! ```text
//! Jupyter Notebook v4.5
//! └─▶ Markdown cell #a9541506
//!     ┌  Hello world!
//!     │  ============
//!     └  Print `Hello world!`:
//! └─▶ Code cell #b777420a (1)
//!     | print("Hello world!")
//! ```

use crate::cell::Cell;
use crate::notebook::Notebook;
use log::trace;
use std::fmt::Write;

const INDENT: &str = "    ";

/// Outlines the structure of a notebook
#[derive(Debug, Clone, Copy)]
pub struct Outliner<'a> {
    notebook: &'a Notebook,
}

impl<'a> Outliner<'a> {
    /// Create an outliner for `notebook`
    #[inline]
    #[must_use]
    pub const fn new(notebook: &'a Notebook) -> Self {
        Self { notebook }
    }

    /// Render the outline, one line per header or source line
    #[must_use = "this function returns the rendered outline"]
    pub fn outline(&self) -> String {
        let mut out = format!("Jupyter Notebook v{}", self.notebook.version());
        for cell in self.notebook {
            trace!("Outlining cell #{}", cell.id());
            out.push('\n');
            write_header(&mut out, cell);
            write_body(&mut out, &cell.lines());
        }
        out
    }
}

fn write_header(out: &mut String, cell: &Cell) {
    match cell {
        Cell::Markdown(md) => {
            let _ = write!(out, "└─▶ Markdown cell #{}", md.id());
        }
        Cell::Code(code) => {
            let _ = write!(out, "└─▶ Code cell #{}", code.id());
            // never-run cells have no counter to show
            if let Some(count) = code.execution_count() {
                let _ = write!(out, " ({count})");
            }
        }
    }
}

fn write_body(out: &mut String, lines: &[String]) {
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.iter().enumerate() {
        let border = match (lines.len(), i) {
            (1, _) => "| ",
            (_, 0) => "┌  ",
            (_, i) if i == last => "└  ",
            _ => "│  ",
        };
        let _ = write!(out, "\n{INDENT}{border}{line}");
    }
}
