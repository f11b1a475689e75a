//! Whole-document layout

use crate::options::StyleConfig;
use crate::source::SourceImage;
use crate::types::{ConvertError, Result};

use super::{DocumentLayout, layout_page};

/// Lay out every image on its own page.
///
/// Pages come back in input order. The first image that can't be laid out
/// aborts the whole call; no partial layout is returned.
pub fn layout_document(images: &[SourceImage], config: &StyleConfig) -> Result<DocumentLayout> {
    if images.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    config.validate()?;

    let (page_width_mm, page_height_mm) = config.page_dimensions_mm();

    let pages = images
        .iter()
        .map(|image| layout_page(image, config, page_width_mm, page_height_mm))
        .collect::<Result<Vec<_>>>()?;

    Ok(DocumentLayout {
        page_width_mm,
        page_height_mm,
        pages,
    })
}
