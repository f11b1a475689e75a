//! Image-to-PDF conversion
//!
//! This module orchestrates a conversion:
//! 1. Lay out every image (fails before anything is written)
//! 2. Replay each page's draw commands into a `DocumentWriter`, in input order
//! 3. Finalize the document

use crate::constants::DEFAULT_TITLE;
use crate::layout::layout_document;
use crate::options::StyleConfig;
use crate::render::{DocumentWriter, DrawCommand, PdfWriter, render_page};
use crate::source::SourceImage;
use crate::types::Result;
use std::path::Path;

/// Lay out `images` and feed the pages to `writer`.
///
/// Images are consumed; each one is dropped as soon as its page has been
/// written.
pub fn build_document<W: DocumentWriter>(
    images: Vec<SourceImage>,
    config: &StyleConfig,
    mut writer: W,
) -> Result<W::Output> {
    let layout = layout_document(&images, config)?;

    for (idx, (image, page)) in images.into_iter().zip(&layout.pages).enumerate() {
        writer.begin_page(page.page_width_mm, page.page_height_mm)?;

        for command in render_page(page, config) {
            match command {
                DrawCommand::FillRect { rect, color } => writer.fill_rect(&rect, color)?,
                DrawCommand::StrokeRect {
                    rect,
                    color,
                    line_width_mm,
                } => writer.stroke_rect(&rect, color, line_width_mm)?,
                DrawCommand::PlaceImage { rect } => writer.place_image(&image, &rect)?,
            }
        }

        writer.end_page()?;

        if page.overflows {
            log::warn!(
                "Page {} ({}) runs past the bottom margin",
                idx + 1,
                image.label()
            );
        }
        log::debug!("Placed page {} ({})", idx + 1, image.label());
    }

    writer.finish()
}

/// Convert images into PDF bytes
pub fn convert(images: Vec<SourceImage>, config: &StyleConfig) -> Result<Vec<u8>> {
    build_document(images, config, PdfWriter::new(DEFAULT_TITLE))
}

/// Convert images and write the PDF to `output_path`
pub async fn generate_pdf(
    images: Vec<SourceImage>,
    config: &StyleConfig,
    title: &str,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let config = *config;
    let title = title.to_owned();
    let output_path = output_path.as_ref().to_owned();
    let page_count = images.len();

    let bytes = tokio::task::spawn_blocking(move || {
        build_document(images, &config, PdfWriter::new(&title))
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;

    log::info!("Wrote {} pages to {}", page_count, output_path.display());
    Ok(page_count)
}
