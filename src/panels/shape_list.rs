use crate::export::format_area;
use crate::shape::ShapeId;
use crate::MeasureApp;

/// One row per shape: swatch, name, area and a delete button.
pub fn shape_list(app: &mut MeasureApp, ui: &mut egui::Ui) {
    let editor = app.editor();
    if editor.shapes().is_empty() {
        ui.weak("No shapes yet");
        return;
    }

    let unit = editor.calibration().unit().to_owned();
    let mut select: Option<ShapeId> = None;
    let mut delete: Option<ShapeId> = None;

    egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
        for shape in editor.shapes() {
            let id = shape.id();
            let selected = editor.selected_id() == Some(id);
            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().rect_filled(swatch, 2.0, shape.color());

                let label = format!("{}\n{}", shape.display_name(), format_area(editor.area_of(id), &unit));
                if ui.selectable_label(selected, label).clicked() {
                    select = Some(id);
                }
                if ui.small_button("✕").on_hover_text("Delete").clicked() {
                    delete = Some(id);
                }
            });
        }
    });

    ui.separator();
    ui.strong(format!("Total: {}", format_area(editor.total_area(), &unit)));

    if let Some(id) = select {
        log::debug!("Shape {id} selected from list");
        app.editor_mut().select_shape(id);
    }
    if let Some(id) = delete {
        app.editor_mut().delete_shape(id);
    }
}
