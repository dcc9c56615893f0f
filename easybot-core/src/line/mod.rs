//! Line array position classification

pub mod position;

pub use position::{classify, LinePosition};
