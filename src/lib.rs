#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod calibration;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod file_handler;
pub mod geometry;
pub mod gizmo;
pub mod id_generator;
pub mod image;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;

pub use app::MeasureApp;
pub use calibration::ScaleCalibration;
pub use config::EditorConfig;
pub use event::EditorEvent;
pub use input::{EditorKey, InputEvent};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeGeometry, ShapeId, ShapeKind};
pub use state::{EditorContext, EditorMode};
