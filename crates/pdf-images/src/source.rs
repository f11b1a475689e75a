//! Decoded source images and loading them from disk

use crate::types::*;
use std::fmt;
use std::path::Path;

/// A decoded raster ready to be placed on a page.
///
/// Pixels are stored as tightly packed RGB8 samples, row-major from the top.
/// Alpha channels are dropped during decoding without compositing, so fully
/// transparent areas show whatever color they store (often black) rather
/// than the page background.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceImage {
    label: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SourceImage {
    /// Decode an encoded image (JPEG, PNG, ...) from memory
    pub fn decode(label: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let label = label.into();

        let decoded = image::load_from_memory(bytes).map_err(|e| ConvertError::InvalidImage {
            label: label.clone(),
            reason: e.to_string(),
        })?;

        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidImage {
                label,
                reason: format!("image has no pixels ({}x{})", width, height),
            });
        }

        Ok(Self {
            label,
            width,
            height,
            pixels: decoded.to_rgb8().into_raw(),
        })
    }

    /// Wrap raw RGB8 samples
    pub fn from_rgb8(
        label: impl Into<String>,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        let label = label.into();
        let expected = width as usize * height as usize * 3;

        if pixels.len() != expected {
            return Err(ConvertError::InvalidImage {
                label,
                reason: format!(
                    "expected {} bytes of RGB data for {}x{}, got {}",
                    expected,
                    width,
                    height,
                    pixels.len()
                ),
            });
        }

        Ok(Self {
            label,
            width,
            height,
            pixels,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("label", &self.label)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Load and decode a single image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref().to_owned();
    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || SourceImage::decode(label, &bytes)).await??;

    log::debug!(
        "Decoded {} ({}x{})",
        image.label(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Load multiple images, keeping the order of `paths`
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        images.push(load_image(path).await?);
    }
    Ok(images)
}
