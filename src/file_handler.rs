use std::path::Path;

use eframe::egui;

use crate::error::ImageLoadError;
use crate::image::{file_name, LoadedImage};

/// Turns files dropped on the window into decoded images.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect files dropped this frame. Returns true if there are any.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decode the first dropped image; only one image is edited at a time.
    pub fn take_dropped_image(&mut self) -> Option<Result<LoadedImage, ImageLoadError>> {
        let files = std::mem::take(&mut self.dropped_files);
        if files.len() > 1 {
            log::info!("{} files dropped; using the first", files.len());
        }
        files.first().map(load_dropped_file)
    }

    /// Dim the window and list the files while they hover over it.
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop an image to measure:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

/// Load an image given on the command line.
pub fn load_path(path: &Path) -> Result<LoadedImage, ImageLoadError> {
    log::info!("Loading image from path: {}", path.display());
    LoadedImage::open(path)
}

fn load_dropped_file(file: &egui::DroppedFile) -> Result<LoadedImage, ImageLoadError> {
    let name = match &file.path {
        Some(path) => file_name(path),
        None if !file.name.is_empty() => file.name.clone(),
        None => "unknown".to_owned(),
    };

    if !is_image_file(file) {
        log::warn!("Dropped file is not a supported type: {name}");
        return Err(ImageLoadError::Unsupported(name));
    }

    if let Some(bytes) = &file.bytes {
        log::info!("Processing image from memory: {name} ({} bytes)", bytes.len());
        LoadedImage::from_bytes(name, bytes)
    } else if let Some(path) = &file.path {
        load_path(path)
    } else {
        Err(ImageLoadError::NoData(name))
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else if let Some(path) = &file.path {
        LoadedImage::is_supported(path)
    } else {
        LoadedImage::is_supported(Path::new(&file.name))
    }
}
