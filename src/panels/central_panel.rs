use crate::MeasureApp;

pub fn central_panel(app: &mut MeasureApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        if app.image().is_none() {
            painter.text(
                canvas_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Drop an image here to start measuring",
                egui::FontId::proportional(18.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        let transform = app.canvas_transform(canvas_rect);
        app.handle_input(ctx, &transform);

        let editor = app.editor();
        app.renderer().render(&painter, &transform, editor);
        if response.hovered() {
            ctx.set_cursor_icon(editor.cursor_icon());
            app.renderer().render_zoom_lens(&painter, &transform, editor);
        }
    });
}

pub fn status_bar(app: &mut MeasureApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Mode: {}", app.editor().mode().name()));
            ui.separator();
            if let Some(status) = app.status() {
                ui.label(&status.text);
            }
        });
    });
}
