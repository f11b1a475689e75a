pub mod constants;
mod convert;
pub mod layout;
mod options;
pub mod render;
mod source;
mod stats;
mod types;

pub use convert::{build_document, convert, generate_pdf};
pub use layout::{DocumentLayout, PageSpec, Rect, layout_document, layout_page};
pub use options::*;
pub use render::{DocumentWriter, DrawCommand, PdfWriter, render_page};
pub use source::{SourceImage, load_image, load_images};
pub use stats::{ConversionSummary, calculate_summary};
pub use types::*;
