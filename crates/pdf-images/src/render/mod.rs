//! Rendering modules
//!
//! This module turns page layouts into output:
//! - Ordered draw commands for each page
//! - The `DocumentWriter` seam that receives them
//! - The printpdf-backed writer producing PDF bytes

mod commands;
mod pdf;
mod writer;

pub use commands::*;
pub use pdf::PdfWriter;
pub use writer::DocumentWriter;
