//! # notebook-toolbox
//!
//! Object model for Jupyter Notebook (.ipynb) documents, with three renderers.
//!
//! Loading keeps the format version and the ordered Markdown and Code cells
//! (ids, source lines, execution counts). Cell `metadata` and `outputs` are
//! dropped. A loaded [`Notebook`] can then be:
//! - serialized back to `.ipynb` JSON ([`Serializer`])
//! - exported as a py-percent script ([`PyPercentSerializer`])
//! - outlined for quick inspection ([`Outliner`])
//!
//! ## Example
//!
//! ```no_run
//! use notebook_toolbox::{Notebook, Outliner, PyPercentSerializer, Serializer};
//!
//! let notebook = Notebook::from_file("hello-world.ipynb")?;
//! for cell in &notebook {
//!     println!("{} cell #{}", cell.cell_type(), cell.id());
//! }
//!
//! println!("{}", Outliner::new(&notebook).outline());
//! PyPercentSerializer::new(&notebook).to_file("hello-world.py")?;
//! Serializer::new(&notebook).to_file("hello-world-serialized.ipynb")?;
//! # Ok::<(), notebook_toolbox::NotebookError>(())
//! ```

/// Cell model
pub mod cell;
/// Error types
pub mod error;
/// Notebook aggregate and loader
pub mod notebook;
/// On-disk ipynb schema
pub mod raw;
/// Renderers
pub mod serializer;
/// File and raw-document helpers
pub mod toolbox;

pub use cell::{Cell, CellType, CodeCell, MarkdownCell};
pub use error::{NotebookError, Result};
pub use notebook::{LoadOptions, Notebook, UnknownCellPolicy};
pub use raw::{MultilineSource, RawCell, RawNotebook};
pub use serializer::{JsonOptions, Outliner, PyPercentSerializer, Serializer};
