use pdf_images::*;

#[test]
fn test_page_size_dimensions() {
    assert_eq!(PageSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PageSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PageSize::Legal.dimensions_mm(), (215.9, 355.6));
}

#[test]
fn test_orientation_swaps_dimensions() {
    assert_eq!(
        PageSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
    assert_eq!(
        PageSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PageSize::Legal.dimensions_with_orientation(Orientation::Landscape),
        (355.6, 215.9)
    );
}

#[test]
fn test_color_parsing() {
    assert_eq!("#ffffff".parse::<Rgb>().unwrap(), Rgb::WHITE);
    assert_eq!("000000".parse::<Rgb>().unwrap(), Rgb::BLACK);
    assert_eq!("#1A2b3C".parse::<Rgb>().unwrap(), Rgb::new(0x1a, 0x2b, 0x3c));

    // Shorthand
    assert_eq!("#f80".parse::<Rgb>().unwrap(), Rgb::new(0xff, 0x88, 0x00));
}

#[test]
fn test_color_parsing_rejects_garbage() {
    for input in ["", "#", "#12345", "#1234567", "#gggggg", "red", "#ééé", "#+f+f+f"] {
        let result = input.parse::<Rgb>();
        assert!(
            matches!(result, Err(ConvertError::Config(_))),
            "{:?} should not parse",
            input
        );
    }
}

#[test]
fn test_color_display() {
    assert_eq!(Rgb::new(0x1a, 0x2b, 0x3c).to_string(), "#1a2b3c");
    assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
}

#[test]
fn test_color_to_unit() {
    assert_eq!(Rgb::WHITE.to_unit(), (1.0, 1.0, 1.0));
    assert_eq!(Rgb::BLACK.to_unit(), (0.0, 0.0, 0.0));
}

#[test]
fn test_rect_helpers() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(rect.right(), 110.0);
    assert_eq!(rect.bottom(), 70.0);
    assert_eq!(rect.expand(2.0), Rect::new(8.0, 18.0, 104.0, 54.0));
}
