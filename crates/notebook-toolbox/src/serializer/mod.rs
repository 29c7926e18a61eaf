//! Notebook renderers
//!
//! Three transforms over a loaded [`Notebook`](crate::Notebook): structural JSON
//! (round-trips to `.ipynb`), py-percent script text, and a readable outline.

pub mod json;
pub mod outline;
pub mod percent;

pub use json::{JsonOptions, Serializer};
pub use outline::Outliner;
pub use percent::PyPercentSerializer;
