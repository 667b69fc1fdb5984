//! Two-point pixel-to-physical scale calibration.

use egui::Pos2;

pub const DEFAULT_UNIT: &str = "µm";
/// Used when the unit field is cleared.
pub const FALLBACK_UNIT: &str = "units";

/// Scale between image pixels and a real-world length unit.
///
/// `factor` is physical units per pixel. It is only ever a finite,
/// positive number; every other outcome is reported as undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCalibration {
    p1: Option<Pos2>,
    p2: Option<Pos2>,
    real_length: f32,
    unit: String,
    factor: Option<f32>,
}

impl Default for ScaleCalibration {
    fn default() -> Self {
        Self {
            p1: None,
            p2: None,
            real_length: 1.0,
            unit: DEFAULT_UNIT.to_owned(),
            factor: None,
        }
    }
}

impl ScaleCalibration {
    pub fn new(real_length: f32, unit: impl Into<String>) -> Self {
        let mut calibration = Self::default();
        calibration.set_real_length(real_length);
        calibration.set_unit(unit);
        calibration
    }

    /// Forget both points ahead of a new two-click capture.
    pub fn begin(&mut self) {
        self.clear_points();
    }

    /// Drop points and factor, keeping the entered length and unit.
    pub fn clear_points(&mut self) {
        self.p1 = None;
        self.p2 = None;
        self.factor = None;
    }

    pub fn place_first_point(&mut self, pos: Pos2) {
        self.p1 = Some(pos);
        self.p2 = None;
        self.factor = None;
    }

    /// Completes the calibration. Requires a first point.
    pub fn place_second_point(&mut self, pos: Pos2) {
        if self.p1.is_none() {
            log::warn!("Second calibration point placed before the first; ignoring");
            return;
        }
        self.p2 = Some(pos);
        self.recompute();
    }

    /// Update the real-world length; recomputes the factor if already defined.
    pub fn set_real_length(&mut self, length: f32) {
        self.real_length = if length.is_finite() { length } else { 0.0 };
        if self.is_defined() {
            self.recompute();
        }
    }

    /// Update the unit label; an empty label falls back to [`FALLBACK_UNIT`].
    pub fn set_unit(&mut self, unit: impl Into<String>) {
        let unit = unit.into();
        let unit = unit.trim();
        self.unit = if unit.is_empty() {
            FALLBACK_UNIT.to_owned()
        } else {
            unit.to_owned()
        };
        if self.is_defined() {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        let Some(pixels) = self.pixel_distance() else {
            self.factor = None;
            return;
        };

        let factor = self.real_length / pixels;
        self.factor = (pixels > 0.0 && factor.is_finite() && factor > 0.0).then_some(factor);
        match self.factor {
            Some(f) => log::info!("Scale set: 1 px = {f} {}", self.unit),
            None => log::warn!(
                "Scale undefined (pixel distance {pixels}, length {})",
                self.real_length
            ),
        }
    }

    /// Both points are placed.
    pub fn is_defined(&self) -> bool {
        self.p1.is_some() && self.p2.is_some()
    }

    /// Physical units per pixel, if the calibration yields a usable number.
    pub fn factor(&self) -> Option<f32> {
        if self.is_defined() { self.factor } else { None }
    }

    pub fn pixel_distance(&self) -> Option<f32> {
        match (self.p1, self.p2) {
            (Some(a), Some(b)) => Some(a.distance(b)),
            _ => None,
        }
    }

    pub fn points(&self) -> (Option<Pos2>, Option<Pos2>) {
        (self.p1, self.p2)
    }

    pub fn real_length(&self) -> f32 {
        self.real_length
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Human readable scale line, e.g. `1 px = 0.5000 µm`.
    pub fn describe(&self) -> String {
        match self.factor() {
            Some(f) => format!("1 px = {} {}", to_precision(f, 4), self.unit),
            None => "Scale not defined".to_owned(),
        }
    }
}

/// Format with `digits` significant digits, like JavaScript's `toPrecision`.
pub fn to_precision(value: f32, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let digits = digits.max(1);
    // Rounding first settles the exponent: 0.99996 becomes 1.000e0.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -6 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{}", exponent.abs());
    }
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_formatting() {
        assert_eq!(to_precision(0.5, 4), "0.5000");
        assert_eq!(to_precision(12.3456, 4), "12.35");
        assert_eq!(to_precision(0.0012345, 4), "0.001235");
    }

    #[test]
    fn precision_rounding_carries_into_next_digit() {
        assert_eq!(to_precision(0.99996, 4), "1.000");
        assert_eq!(to_precision(9.99996, 4), "10.00");
        assert_eq!(to_precision(9999.6, 4), "1.000e+4");
    }

    #[test]
    fn precision_exponent_has_explicit_sign() {
        assert_eq!(to_precision(12346.0, 4), "1.235e+4");
        assert_eq!(to_precision(1.5e-7, 2), "1.5e-7");
    }
}
