use serde::{Deserialize, Serialize};

use crate::calibration::DEFAULT_UNIT;

/// Tunables for the editor, persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Visual size of a handle, in image pixels.
    pub handle_size: f32,
    /// Extra slack around a handle when picking it.
    pub pick_margin: f32,
    /// Distance from the top extent to the rotation handle.
    pub rotation_handle_distance: f32,
    /// Magnification of the zoom lens.
    pub zoom_level: f32,
    /// Edge length of the zoom lens, in screen points.
    pub zoom_lens_size: f32,
    /// How long a status message stays visible.
    pub status_timeout_secs: f64,
    /// Last calibration length entered.
    pub scale_length: f32,
    /// Last calibration unit entered.
    pub scale_unit: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle_size: 8.0,
            pick_margin: 4.0,
            rotation_handle_distance: 30.0,
            zoom_level: 5.0,
            zoom_lens_size: 240.0,
            status_timeout_secs: 4.0,
            scale_length: 1.0,
            scale_unit: DEFAULT_UNIT.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Distance within which the cursor picks a handle (inclusive).
    pub fn pick_radius(&self) -> f32 {
        self.handle_size + self.pick_margin
    }
}
