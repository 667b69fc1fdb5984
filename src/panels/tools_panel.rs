use crate::shape::ShapeKind;
use crate::MeasureApp;

use super::shape_list;

pub fn side_panel(app: &mut MeasureApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("ShapeAreaCalc");
            match app.image() {
                Some(image) => ui.label(format!("{} ({}x{})", image.name(), image.width(), image.height())),
                None => ui.weak("No file selected"),
            };
            ui.separator();

            scale_section(app, ui);
            ui.separator();
            shape_section(app, ui);
            ui.separator();

            ui.heading("Shapes");
            shape_list(app, ui);
            ui.separator();

            export_section(app, ui, ctx);
        });
}

fn scale_section(app: &mut MeasureApp, ui: &mut egui::Ui) {
    ui.strong("Scale");

    let mut length = app.editor().calibration().real_length();
    ui.horizontal(|ui| {
        ui.label("Length:");
        let response = ui.add(egui::DragValue::new(&mut length).speed(0.1).range(0.0..=f32::MAX));
        if response.changed() {
            app.editor_mut().set_real_length(length);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Unit:");
        let response = ui.add(egui::TextEdit::singleline(&mut app.unit_text).desired_width(60.0));
        if response.changed() {
            let unit = app.unit_text.clone();
            app.editor_mut().set_unit(&unit);
        }
    });

    let has_image = app.editor().has_image();
    let calibrating = app.editor().mode().is_calibrating();
    if ui
        .add_enabled(has_image && !calibrating, egui::Button::new("Set Scale"))
        .clicked()
    {
        app.editor_mut().begin_calibration();
    }
    ui.label(app.editor().calibration().describe());
}

fn shape_section(app: &mut MeasureApp, ui: &mut egui::Ui) {
    ui.strong("Shape type");

    let active = app.editor().active_kind();
    ui.horizontal(|ui| {
        for &kind in ShapeKind::all() {
            if ui.selectable_label(active == kind, kind.label()).clicked() {
                log::info!("Shape type selected: {}", kind.label());
                app.editor_mut().set_active_kind(kind);
            }
        }
    });
    ui.weak(app.editor().active_kind().draw_hint());

    let can_add = app.editor().has_image() && app.editor().calibration().is_defined();
    let button = ui
        .add_enabled(can_add, egui::Button::new("Add Shape"))
        .on_disabled_hover_text("Load an image and set the scale first");
    if button.clicked() {
        app.editor_mut().begin_add_shape();
    }
}

fn export_section(app: &mut MeasureApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    let has_shapes = !app.editor().shapes().is_empty();
    ui.horizontal(|ui| {
        if ui.add_enabled(has_shapes, egui::Button::new("Export PNG")).clicked() {
            let result = app.export_overlay();
            app.report_export(ctx, "Image", result);
        }
        if ui.add_enabled(has_shapes, egui::Button::new("Export TXT")).clicked() {
            let result = app.export_text();
            app.report_export(ctx, "TXT", result);
        }
        if ui.add_enabled(has_shapes, egui::Button::new("Export JSON")).clicked() {
            let result = app.export_json();
            app.report_export(ctx, "JSON", result);
        }
    });

    ui.add_space(8.0);
    if ui.button("Reset").clicked() {
        log::info!("Reset requested");
        app.reset();
    }
}
