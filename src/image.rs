use std::path::Path;

use egui::{ColorImage, Vec2};
use image::RgbaImage;

use crate::error::ImageLoadError;

/// Extensions accepted by [`LoadedImage::is_supported`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// A decoded image the shapes are measured on.
#[derive(Clone)]
pub struct LoadedImage {
    name: String,
    pixels: RgbaImage,
}

impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("name", &self.name)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl LoadedImage {
    pub fn new(name: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            name: name.into(),
            pixels,
        }
    }

    /// Decode an in-memory file, guessing its format from the content.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, ImageLoadError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::new(name, decoded.to_rgba8()))
    }

    pub fn open(path: &Path) -> Result<Self, ImageLoadError> {
        if !Self::is_supported(path) {
            return Err(ImageLoadError::Unsupported(path.display().to_string()));
        }
        let bytes = std::fs::read(path).map_err(|source| ImageLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(file_name(path), &bytes)
    }

    /// Whether the extension of `path` names a format we decode.
    pub fn is_supported(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
