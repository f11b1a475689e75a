use crate::layout::Rect;
use crate::source::SourceImage;
use crate::types::{Result, Rgb};

/// Sink for laid-out pages.
///
/// Coordinates are millimeters from the page's top-left corner. Calls arrive
/// as `begin_page`, any number of drawing calls, `end_page`, repeated once per
/// page, followed by a single `finish`.
pub trait DocumentWriter {
    /// What `finish` produces, e.g. the serialized PDF bytes
    type Output;

    /// Start a new page of the given size
    fn begin_page(&mut self, width_mm: f32, height_mm: f32) -> Result<()>;

    fn fill_rect(&mut self, rect: &Rect, color: Rgb) -> Result<()>;

    /// Paint a `line_width_mm` wide band just inside the edges of `rect`
    fn stroke_rect(&mut self, rect: &Rect, color: Rgb, line_width_mm: f32) -> Result<()>;

    /// Draw `image` scaled to exactly fill `rect`
    fn place_image(&mut self, image: &SourceImage, rect: &Rect) -> Result<()>;

    fn end_page(&mut self) -> Result<()>;

    /// Finalize the document
    fn finish(self) -> Result<Self::Output>;
}
