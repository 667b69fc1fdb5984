use std::path::Path;

use crate::config::EditorConfig;
use crate::error::ExportError;
use crate::export::{self, AreaReport};
use crate::file_handler::FileHandler;
use crate::image::LoadedImage;
use crate::input::{route_event, CanvasTransform, InputHandler};
use crate::panels::{central_panel, side_panel, status_bar};
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// A status-bar message and the frame time it was posted at.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub posted_at: f64,
}

/// The measuring window: side panel, canvas and status bar.
///
/// Only the [`EditorConfig`] survives a restart; shapes live as long as
/// the image they were drawn on.
#[derive(Debug)]
pub struct MeasureApp {
    editor: EditorContext,
    renderer: Renderer,
    input_handler: InputHandler,
    file_handler: FileHandler,
    image: Option<LoadedImage>,
    status: Option<StatusMessage>,
    /// Text of the unit field; may be blank while the calibration uses the fallback unit.
    pub(crate) unit_text: String,
    /// Image passed on the command line, uploaded on the first frame.
    pending_image: Option<LoadedImage>,
}

impl Default for MeasureApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl MeasureApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_image: Option<LoadedImage>) -> Self {
        let config: EditorConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::debug!("Starting with {config:?}");

        let mut app = Self::with_config(config);
        app.pending_image = initial_image;
        app
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let unit_text = config.scale_unit.clone();
        Self {
            editor: EditorContext::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            file_handler: FileHandler::new(),
            image: None,
            status: None,
            unit_text,
            pending_image: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Replace the current image; the editor starts over on it.
    pub fn set_image(&mut self, ctx: &egui::Context, image: LoadedImage) {
        log::info!("Loaded {} ({}x{})", image.name(), image.width(), image.height());
        self.renderer.set_image(ctx, &image);
        self.editor.load_image(image.width(), image.height());
        self.image = Some(image);
    }

    /// Forget the image and everything drawn on it.
    pub fn reset(&mut self) {
        self.renderer.clear_image();
        self.editor.reset_all();
        self.image = None;
        self.status = None;
    }

    pub fn show_status(&mut self, ctx: &egui::Context, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            posted_at: ctx.input(|i| i.time),
        });
    }

    /// Screen mapping for the canvas occupying `canvas`.
    pub fn canvas_transform(&self, canvas: egui::Rect) -> CanvasTransform {
        let size = self
            .image
            .as_ref()
            .map(LoadedImage::size)
            .unwrap_or_else(|| canvas.size());
        CanvasTransform::fit(canvas, size)
    }

    /// Feed this frame's canvas input to the editor.
    pub fn handle_input(&mut self, ctx: &egui::Context, transform: &CanvasTransform) {
        for event in self.input_handler.process_input(ctx, transform) {
            route_event(&event, &mut self.editor);
        }
    }

    pub fn export_text(&self) -> Result<(), ExportError> {
        self.report()?.save_text(Path::new(export::TEXT_REPORT_FILE))
    }

    pub fn export_json(&self) -> Result<(), ExportError> {
        self.report()?.save_json(Path::new(export::JSON_REPORT_FILE))
    }

    pub fn export_overlay(&self) -> Result<(), ExportError> {
        let image = self.image.as_ref().ok_or(ExportError::NothingToExport)?;
        export::save_overlay(Path::new(export::OVERLAY_FILE), image.pixels(), &self.editor)
    }

    pub(crate) fn report_export(&mut self, ctx: &egui::Context, what: &str, result: Result<(), ExportError>) {
        match result {
            Ok(()) => self.show_status(ctx, format!("{what} exported.")),
            Err(err) => {
                log::error!("{what} export failed: {err}");
                self.show_status(ctx, err.to_string());
            }
        }
    }

    fn report(&self) -> Result<AreaReport, ExportError> {
        AreaReport::from_editor(&self.editor, self.image.as_ref().map(LoadedImage::name))
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        match self.file_handler.take_dropped_image() {
            Some(Ok(image)) => self.set_image(ctx, image),
            Some(Err(err)) => {
                log::error!("{err}");
                self.show_status(ctx, err.to_string());
            }
            None => {}
        }
    }

    fn publish_events(&mut self, ctx: &egui::Context) {
        for event in self.editor.drain_events() {
            log::trace!("{event:?}");
            if let Some(text) = event.status_message() {
                self.show_status(ctx, text);
            }
        }

        let now = ctx.input(|i| i.time);
        let timeout = self.editor.config().status_timeout_secs;
        if let Some(status) = &self.status {
            let remaining = status.posted_at + timeout - now;
            if remaining <= 0.0 {
                self.status = None;
            } else {
                ctx.request_repaint_after(std::time::Duration::from_secs_f64(remaining));
            }
        }
    }
}

impl eframe::App for MeasureApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.editor.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = self.pending_image.take() {
            self.set_image(ctx, image);
        }
        self.handle_dropped_files(ctx);

        side_panel(self, ctx);
        status_bar(self, ctx);
        central_panel(self, ctx);

        self.publish_events(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_field_starts_from_config() {
        let config = EditorConfig {
            scale_unit: "mm".to_owned(),
            ..Default::default()
        };
        let app = MeasureApp::with_config(config);
        assert_eq!(app.unit_text, "mm");
        assert_eq!(app.editor().calibration().unit(), "mm");
    }

    #[test]
    fn exports_need_shapes() {
        let app = MeasureApp::default();
        assert!(matches!(app.export_text(), Err(ExportError::NothingToExport)));
        assert!(matches!(app.export_overlay(), Err(ExportError::NothingToExport)));
    }
}
