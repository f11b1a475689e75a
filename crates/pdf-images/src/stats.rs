use crate::layout::layout_document;
use crate::options::StyleConfig;
use crate::source::SourceImage;
use crate::types::*;

/// What a conversion will produce, without serializing anything
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// One page per image
    pub page_count: usize,
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Width every image is scaled to
    pub drawable_width_mm: f32,
    /// Zero-based indices of pages whose image runs past the bottom margin
    pub overflowing_pages: Vec<usize>,
}

/// Calculate the summary for converting `images` with `config`
pub fn calculate_summary(
    images: &[SourceImage],
    config: &StyleConfig,
) -> Result<ConversionSummary> {
    let layout = layout_document(images, config)?;

    Ok(ConversionSummary {
        page_count: layout.page_count(),
        page_size: config.page_size,
        orientation: config.orientation,
        page_width_mm: layout.page_width_mm,
        page_height_mm: layout.page_height_mm,
        drawable_width_mm: config.drawable_width_mm(),
        overflowing_pages: layout.overflowing_pages(),
    })
}
