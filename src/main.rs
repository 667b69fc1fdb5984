#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use shape_area_calc::file_handler;
use shape_area_calc::MeasureApp;

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional image to open on start.
    let initial_image = std::env::args_os().nth(1).map(PathBuf::from).and_then(|path| {
        file_handler::load_path(&path)
            .map_err(|err| log::error!("{err}"))
            .ok()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ShapeAreaCalc")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "ShapeAreaCalc",
        native_options,
        Box::new(|cc| Ok(Box::new(MeasureApp::new(cc, initial_image)))),
    )
}
