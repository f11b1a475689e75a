//! Shared constants for image-to-PDF conversion

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// Images are embedded at 72 DPI so one pixel maps to one point before scaling
pub const IMAGE_DPI: f32 = 72.0;

// =============================================================================
// Style Defaults
// =============================================================================

pub const DEFAULT_MARGIN_MM: f32 = 10.0;

pub const DEFAULT_BORDER_WIDTH_MM: f32 = 1.0;

// =============================================================================
// Output
// =============================================================================

/// File name used when the caller doesn't pick one
pub const DEFAULT_OUTPUT_FILE: &str = "download.pdf";

/// Title written to the PDF metadata
pub const DEFAULT_TITLE: &str = "Images";

/// Tolerance for comparing millimeter values
pub const MM_EPSILON: f32 = 1e-3;
