//! Single page layout
//!
//! The image always spans the full drawable width. Its height follows from
//! the aspect ratio, so tall images can run past the bottom margin; that is
//! reported through `PageSpec::overflows` rather than corrected.

use crate::constants::MM_EPSILON;
use crate::options::{StyleConfig, check_page_geometry};
use crate::source::SourceImage;
use crate::types::{ConvertError, Result};

use super::{PageSpec, Rect};

/// Lay out one image on a page of the given size.
///
/// # Arguments
/// * `image` - The decoded source image
/// * `config` - Margins, border width and colors
/// * `page_width_mm` - Page width with orientation already applied
/// * `page_height_mm` - Page height with orientation already applied
pub fn layout_page(
    image: &SourceImage,
    config: &StyleConfig,
    page_width_mm: f32,
    page_height_mm: f32,
) -> Result<PageSpec> {
    let margin = config.margin_mm;
    let border = config.border_width_mm;

    check_page_geometry(page_width_mm, page_height_mm, margin, border)?;

    if image.width() == 0 || image.height() == 0 {
        return Err(ConvertError::InvalidImage {
            label: image.label().to_string(),
            reason: format!(
                "zero-sized image ({}x{})",
                image.width(),
                image.height()
            ),
        });
    }

    let avail_width = page_width_mm - 2.0 * margin - 2.0 * border;
    let avail_height = avail_width * (image.height() as f32 / image.width() as f32);

    let image_rect = Rect::new(margin, margin, avail_width, avail_height);
    let border_rect = image_rect.expand(border);
    let overflows = image_rect.bottom() > page_height_mm - margin + MM_EPSILON;

    Ok(PageSpec {
        page_width_mm,
        page_height_mm,
        image_rect,
        border_rect,
        overflows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> SourceImage {
        let len = width as usize * height as usize * 3;
        SourceImage::from_rgb8("blank", width, height, vec![0; len]).unwrap()
    }

    fn style(margin_mm: f32, border_width_mm: f32) -> StyleConfig {
        StyleConfig {
            margin_mm,
            border_width_mm,
            ..Default::default()
        }
    }

    #[test]
    fn test_a4_portrait_example() {
        let spec = layout_page(&blank(400, 300), &style(10.0, 1.0), 210.0, 297.0).unwrap();

        assert!((spec.image_rect.x - 10.0).abs() < 0.001);
        assert!((spec.image_rect.y - 10.0).abs() < 0.001);
        assert!((spec.image_rect.width - 188.0).abs() < 0.001);
        assert!((spec.image_rect.height - 141.0).abs() < 0.001);

        assert!((spec.border_rect.x - 9.0).abs() < 0.001);
        assert!((spec.border_rect.y - 9.0).abs() < 0.001);
        assert!((spec.border_rect.width - 190.0).abs() < 0.001);
        assert!((spec.border_rect.height - 143.0).abs() < 0.001);

        assert!(!spec.overflows);
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let spec = layout_page(&blank(123, 457), &style(12.5, 0.5), 215.9, 355.6).unwrap();

        let expected_height = spec.image_rect.width * 457.0 / 123.0;
        assert!((spec.image_rect.height - expected_height).abs() < 0.001);
    }

    #[test]
    fn test_border_encloses_image() {
        let spec = layout_page(&blank(10, 10), &style(20.0, 3.0), 210.0, 297.0).unwrap();

        assert!((spec.image_rect.x - spec.border_rect.x - 3.0).abs() < 0.001);
        assert!((spec.border_rect.right() - spec.image_rect.right() - 3.0).abs() < 0.001);
        assert!((spec.border_rect.bottom() - spec.image_rect.bottom() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_border_matches_image() {
        let spec = layout_page(&blank(10, 20), &style(5.0, 0.0), 210.0, 297.0).unwrap();
        assert_eq!(spec.border_rect, spec.image_rect);
    }

    #[test]
    fn test_tall_image_overflows() {
        // 1:4 aspect on A4 portrait: 190mm wide needs 760mm of height
        let spec = layout_page(&blank(100, 400), &style(10.0, 0.0), 210.0, 297.0).unwrap();

        assert!(spec.overflows);
        assert!((spec.image_rect.height - 760.0).abs() < 0.01);
    }

    #[test]
    fn test_margin_too_large_for_width() {
        let result = layout_page(&blank(10, 10), &style(110.0, 0.0), 210.0, 297.0);
        assert!(matches!(result, Err(ConvertError::InvalidLayout(_))));
    }

    #[test]
    fn test_exactly_zero_drawable_width_rejected() {
        // 2 * (100 + 5) == 210 leaves nothing to draw on
        let result = layout_page(&blank(10, 10), &style(100.0, 5.0), 210.0, 297.0);
        assert!(matches!(result, Err(ConvertError::InvalidLayout(_))));
    }

    #[test]
    fn test_margin_too_large_for_height() {
        // Fits the 297mm width, not the 210mm height
        let result = layout_page(&blank(10, 10), &style(106.0, 0.0), 297.0, 210.0);
        assert!(matches!(result, Err(ConvertError::InvalidLayout(_))));
    }

    #[test]
    fn test_non_finite_lengths_rejected() {
        for (margin, border) in [(f32::NAN, 1.0), (10.0, f32::NAN), (f32::INFINITY, 0.0)] {
            let result = layout_page(&blank(4, 3), &style(margin, border), 210.0, 297.0);
            assert!(
                matches!(result, Err(ConvertError::InvalidLayout(_))),
                "margin {} border {} should be rejected",
                margin,
                border
            );
        }

        let result = layout_page(&blank(4, 3), &style(10.0, 1.0), f32::NAN, 297.0);
        assert!(matches!(result, Err(ConvertError::InvalidLayout(_))));
    }

    #[test]
    fn test_negative_lengths_rejected() {
        // Would otherwise place a 250mm wide image on a 210mm page
        let result = layout_page(&blank(4, 3), &style(-20.0, 0.0), 210.0, 297.0);
        assert!(matches!(result, Err(ConvertError::InvalidLayout(_))));

        let result = layout_page(&blank(4, 3), &style(10.0, -1.0), 210.0, 297.0);
        assert!(matches!(result, Err(ConvertError::InvalidLayout(_))));
    }

    #[test]
    fn test_zero_width_image() {
        let result = layout_page(&blank(0, 10), &style(10.0, 1.0), 210.0, 297.0);
        match result {
            Err(ConvertError::InvalidImage { label, .. }) => assert_eq!(label, "blank"),
            other => panic!("Expected InvalidImage, got {:?}", other),
        }
    }
}
