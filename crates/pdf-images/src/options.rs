use crate::constants::{DEFAULT_BORDER_WIDTH_MM, DEFAULT_MARGIN_MM};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout parameters applied uniformly to every page of one conversion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct StyleConfig {
    pub orientation: Orientation,
    pub page_size: PageSize,

    /// Blank space between the page edge and the border
    pub margin_mm: f32,

    /// Fill covering the whole page, painted first
    pub background_color: Rgb,

    pub border_color: Rgb,
    /// Zero disables the border
    pub border_width_mm: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            page_size: PageSize::A4,
            margin_mm: DEFAULT_MARGIN_MM,
            background_color: Rgb::WHITE,
            border_color: Rgb::BLACK,
            border_width_mm: DEFAULT_BORDER_WIDTH_MM,
        }
    }
}

impl StyleConfig {
    /// Load a style preset from a JSON file. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Self::from_json(&bytes)
    }

    /// Parse a style preset from JSON bytes
    #[cfg(feature = "serde")]
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| ConvertError::Config(format!("Failed to parse style: {}", e)))
    }

    /// Page dimensions in mm with orientation applied
    pub fn page_dimensions_mm(&self) -> (f32, f32) {
        self.page_size.dimensions_with_orientation(self.orientation)
    }

    /// Horizontal space left for the image once margins and border are removed
    pub fn drawable_width_mm(&self) -> f32 {
        let (page_width, _) = self.page_dimensions_mm();
        page_width - 2.0 * self.margin_mm - 2.0 * self.border_width_mm
    }

    /// Validate the style
    pub fn validate(&self) -> Result<()> {
        let (page_width, page_height) = self.page_dimensions_mm();
        check_page_geometry(page_width, page_height, self.margin_mm, self.border_width_mm)
    }
}

/// Lengths must be finite and non-negative, and both page dimensions must
/// leave room after margins and border on each side
pub(crate) fn check_page_geometry(
    page_width_mm: f32,
    page_height_mm: f32,
    margin_mm: f32,
    border_width_mm: f32,
) -> Result<()> {
    if !margin_mm.is_finite() || margin_mm < 0.0 {
        return Err(ConvertError::InvalidLayout(format!(
            "Margin must be a non-negative number, got {}",
            margin_mm
        )));
    }

    if !border_width_mm.is_finite() || border_width_mm < 0.0 {
        return Err(ConvertError::InvalidLayout(format!(
            "Border width must be a non-negative number, got {}",
            border_width_mm
        )));
    }

    if !page_width_mm.is_finite() || !page_height_mm.is_finite() {
        return Err(ConvertError::InvalidLayout(format!(
            "Page size must be finite, got {}x{}mm",
            page_width_mm, page_height_mm
        )));
    }

    let inset = 2.0 * (margin_mm + border_width_mm);

    // NaN fails both comparisons
    if !(page_width_mm > inset && page_height_mm > inset) {
        return Err(ConvertError::InvalidLayout(format!(
            "Margin {}mm and border {}mm leave no drawable area on a {}x{}mm page",
            margin_mm, border_width_mm, page_width_mm, page_height_mm
        )));
    }

    Ok(())
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Colors travel as "#rrggbb" strings
    impl Serialize for Rgb {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Rgb {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}
