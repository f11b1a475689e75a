//! PDF output through `printpdf`
//!
//! printpdf builds pages from `Op` lists in PDF user space: points, origin at
//! the bottom-left. Layout rects are top-left millimeters, so every rect is
//! flipped against the current page height before it becomes an op.

use crate::constants::{DEFAULT_TITLE, IMAGE_DPI, mm_to_pt};
use crate::layout::Rect;
use crate::source::SourceImage;
use crate::types::{ConvertError, Result, Rgb};
use printpdf::{
    Color, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point,
    Polygon, PolygonRing, Pt, RawImage, RawImageData, RawImageFormat, WindingOrder,
    XObjectTransform,
};

use super::DocumentWriter;

struct OpenPage {
    width_mm: f32,
    height_mm: f32,
    ops: Vec<Op>,
}

/// `DocumentWriter` producing PDF bytes
pub struct PdfWriter {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    current: Option<OpenPage>,
}

impl PdfWriter {
    /// Create a writer whose document carries `title` in its metadata
    pub fn new(title: &str) -> Self {
        Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            current: None,
        }
    }

    fn open_page(&mut self) -> Result<&mut OpenPage> {
        self.current
            .as_mut()
            .ok_or_else(|| ConvertError::Pdf("Drawing outside of a page".to_string()))
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl DocumentWriter for PdfWriter {
    type Output = Vec<u8>;

    fn begin_page(&mut self, width_mm: f32, height_mm: f32) -> Result<()> {
        if self.current.is_some() {
            return Err(ConvertError::Pdf(
                "Previous page was not finished".to_string(),
            ));
        }

        self.current = Some(OpenPage {
            width_mm,
            height_mm,
            ops: Vec::new(),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: &Rect, color: Rgb) -> Result<()> {
        let page = self.open_page()?;
        let polygon = rect_polygon(rect, page.height_mm, PaintMode::Fill);

        page.ops.push(Op::SaveGraphicsState);
        page.ops.push(Op::SetFillColor {
            col: pdf_color(color),
        });
        page.ops.push(Op::DrawPolygon { polygon });
        page.ops.push(Op::RestoreGraphicsState);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: &Rect, color: Rgb, line_width_mm: f32) -> Result<()> {
        let page = self.open_page()?;
        // PDF strokes straddle their path, so trace the band's centerline
        let path = rect.expand(-line_width_mm / 2.0);
        let polygon = rect_polygon(&path, page.height_mm, PaintMode::Stroke);

        page.ops.push(Op::SaveGraphicsState);
        page.ops.push(Op::SetOutlineColor {
            col: pdf_color(color),
        });
        page.ops.push(Op::SetOutlineThickness {
            pt: Pt(mm_to_pt(line_width_mm)),
        });
        page.ops.push(Op::DrawPolygon { polygon });
        page.ops.push(Op::RestoreGraphicsState);
        Ok(())
    }

    fn place_image(&mut self, image: &SourceImage, rect: &Rect) -> Result<()> {
        if self.current.is_none() {
            return Err(ConvertError::Pdf("Drawing outside of a page".to_string()));
        }

        let raw = RawImage {
            pixels: RawImageData::U8(image.pixels().to_vec()),
            width: image.width() as usize,
            height: image.height() as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = self.doc.add_image(&raw);

        let page = self.open_page()?;

        // At IMAGE_DPI one pixel is one point, so the scale is target size over pixels
        let scale_x = mm_to_pt(rect.width) / image.width() as f32;
        let scale_y = mm_to_pt(rect.height) / image.height() as f32;
        let bottom_mm = page.height_mm - rect.bottom();

        page.ops.push(Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Mm(rect.x).into_pt()),
                translate_y: Some(Mm(bottom_mm).into_pt()),
                rotate: None,
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(IMAGE_DPI),
            },
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        let page = self
            .current
            .take()
            .ok_or_else(|| ConvertError::Pdf("No page to finish".to_string()))?;

        self.pages
            .push(PdfPage::new(Mm(page.width_mm), Mm(page.height_mm), page.ops));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        if self.current.is_some() {
            return Err(ConvertError::Pdf(
                "Document finished with a page still open".to_string(),
            ));
        }

        let page_count = self.pages.len();
        self.doc.with_pages(self.pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);

        log::debug!(
            "Serialized {} pages ({} bytes, {} warnings)",
            page_count,
            bytes.len(),
            warnings.len()
        );
        Ok(bytes)
    }
}

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(printpdf::Rgb {
        r,
        g,
        b,
        icc_profile: None,
    })
}

/// Closed four-corner path for `rect` in PDF user space
fn rect_polygon(rect: &Rect, page_height_mm: f32, mode: PaintMode) -> Polygon {
    let left = mm_to_pt(rect.x);
    let right = mm_to_pt(rect.right());
    let top = mm_to_pt(page_height_mm - rect.y);
    let bottom = mm_to_pt(page_height_mm - rect.bottom());

    let corner = |x: f32, y: f32| LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    };

    Polygon {
        rings: vec![PolygonRing {
            points: vec![
                corner(left, bottom),
                corner(right, bottom),
                corner(right, top),
                corner(left, top),
            ],
        }],
        mode,
        winding_order: WindingOrder::NonZero,
    }
}
