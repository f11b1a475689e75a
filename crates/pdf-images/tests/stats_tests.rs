use pdf_images::*;

fn blank(label: &str, width: u32, height: u32) -> SourceImage {
    let len = width as usize * height as usize * 3;
    SourceImage::from_rgb8(label, width, height, vec![0; len]).unwrap()
}

#[test]
fn test_summary_portrait_a4() {
    let images = vec![blank("a", 400, 300), blank("b", 300, 400)];
    let summary = calculate_summary(&images, &StyleConfig::default()).unwrap();

    assert_eq!(summary.page_count, 2);
    assert_eq!(summary.page_size, PageSize::A4);
    assert_eq!(summary.orientation, Orientation::Portrait);
    assert_eq!(summary.page_width_mm, 210.0);
    assert_eq!(summary.page_height_mm, 297.0);
    assert!((summary.drawable_width_mm - 188.0).abs() < 0.001);
    assert!(summary.overflowing_pages.is_empty());
}

#[test]
fn test_summary_reports_overflow() {
    // A4 landscape leaves 190mm of height; a 1:1 image at 275mm wide can't fit
    let config = StyleConfig {
        orientation: Orientation::Landscape,
        ..Default::default()
    };
    let images = vec![blank("wide", 400, 100), blank("square", 100, 100), blank("wider", 800, 100)];
    let summary = calculate_summary(&images, &config).unwrap();

    assert_eq!(summary.page_count, 3);
    assert_eq!(summary.overflowing_pages, vec![1]);
}

#[test]
fn test_summary_legal_tall_image_fits() {
    // 195.9mm wide on Legal portrait, a 1:1.5 image needs 293.85mm of 335.6mm
    let config = StyleConfig {
        page_size: PageSize::Legal,
        border_width_mm: 0.0,
        ..Default::default()
    };
    let summary = calculate_summary(&[blank("tall", 200, 300)], &config).unwrap();
    assert!(summary.overflowing_pages.is_empty());
}

#[test]
fn test_summary_empty() {
    let result = calculate_summary(&[], &StyleConfig::default());
    assert!(matches!(result, Err(ConvertError::EmptyInput)));
}

#[test]
fn test_summary_invalid_layout() {
    let config = StyleConfig {
        margin_mm: 110.0,
        border_width_mm: 0.0,
        ..Default::default()
    };
    let result = calculate_summary(&[blank("a", 1, 1)], &config);
    assert!(matches!(result, Err(ConvertError::InvalidLayout(_))));
}
