//! Layout calculation modules
//!
//! This module handles the geometry of each output page:
//! - Page size resolution (paper size and orientation)
//! - Image placement (margins, border, aspect ratio)
//! - Whole-document pagination in input order

mod document;
mod page;
mod types;

pub use document::*;
pub use page::*;
pub use types::*;
