//! Per-page draw commands
//!
//! Order matters: the background covers the whole page, so it has to be
//! painted before the border and the image.

use crate::layout::{PageSpec, Rect};
use crate::options::StyleConfig;
use crate::types::Rgb;

/// A single drawing step on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Paint a filled rectangle
    FillRect { rect: Rect, color: Rgb },
    /// Stroke the outline of a rectangle
    StrokeRect {
        rect: Rect,
        color: Rgb,
        line_width_mm: f32,
    },
    /// Draw the page's source image into `rect`
    PlaceImage { rect: Rect },
}

/// Build the draw commands for one page: background, border, image.
///
/// A zero border width produces no stroke.
pub fn render_page(spec: &PageSpec, config: &StyleConfig) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(3);

    commands.push(DrawCommand::FillRect {
        rect: spec.page_rect(),
        color: config.background_color,
    });

    if config.border_width_mm > 0.0 {
        commands.push(DrawCommand::StrokeRect {
            rect: spec.border_rect,
            color: config.border_color,
            line_width_mm: config.border_width_mm,
        });
    }

    commands.push(DrawCommand::PlaceImage {
        rect: spec.image_rect,
    });

    commands
}
