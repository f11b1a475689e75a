//! Layout data types
//!
//! These types sit between the style configuration and PDF rendering.
//! All values are millimeters measured from the page's top-left corner.

/// A rectangular area in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge, growing downward)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Grow the rectangle by `amount` on every side
    pub fn expand(&self, amount: f32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }
}

/// Computed layout of a single page
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpec {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Where the image is drawn
    pub image_rect: Rect,
    /// Outer edge of the border band, enclosing `image_rect` with no gap
    pub border_rect: Rect,
    /// The image runs past the bottom margin. Width always fits; height is
    /// derived from the aspect ratio and is never shrunk to fit.
    pub overflows: bool,
}

impl PageSpec {
    /// Full-page rectangle used for the background fill
    pub fn page_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page_width_mm, self.page_height_mm)
    }
}

/// Layout of a whole document, one page per source image in input order
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub pages: Vec<PageSpec>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Indices of pages whose image runs past the bottom margin
    pub fn overflowing_pages(&self) -> Vec<usize> {
        self.pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.overflows)
            .map(|(idx, _)| idx)
            .collect()
    }
}
