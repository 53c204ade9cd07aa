//! Resolution context - everything needed to turn specified lengths into
//! resolved ones.

use crate::errors::ContextError;
use crate::value::Unit;

/// CSS pixels per inch
const PX_PER_IN: f64 = 96.0;
const PX_PER_CM: f64 = PX_PER_IN / 2.54;

/// Settings used when resolving lengths.
///
/// Font sizes and the viewport are in unzoomed CSS pixels; every resolved
/// absolute length is multiplied by `zoom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolutionContext {
    zoom: f64,
    font_size: f64,
    root_font_size: f64,
    viewport_width: f64,
    viewport_height: f64,
}

impl Default for ResolutionContext {
    fn default() -> Self {
        ResolutionContext {
            zoom: 1.0,
            font_size: 16.0,
            root_font_size: 16.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

impl ResolutionContext {
    /// Create a context with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(zoom: f64) -> Result<Self, ContextError> {
        Ok(ResolutionContext {
            zoom: positive("zoom", zoom)?,
            ..Default::default()
        })
    }

    pub fn with_font_size(self, font_size: f64) -> Result<Self, ContextError> {
        Ok(ResolutionContext {
            font_size: positive("font_size", font_size)?,
            ..self
        })
    }

    pub fn with_root_font_size(self, root_font_size: f64) -> Result<Self, ContextError> {
        Ok(ResolutionContext {
            root_font_size: positive("root_font_size", root_font_size)?,
            ..self
        })
    }

    pub fn with_viewport(self, width: f64, height: f64) -> Result<Self, ContextError> {
        Ok(ResolutionContext {
            viewport_width: non_negative("viewport_width", width)?,
            viewport_height: non_negative("viewport_height", height)?,
            ..self
        })
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn root_font_size(&self) -> f64 {
        self.root_font_size
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    /// Unzoomed CSS pixels in one `unit`; `None` for angle units.
    pub fn px_per_unit(&self, unit: Unit) -> Option<f64> {
        let px = match unit {
            Unit::Px => 1.0,
            Unit::In => PX_PER_IN,
            Unit::Cm => PX_PER_CM,
            Unit::Mm => PX_PER_CM / 10.0,
            Unit::Q => PX_PER_CM / 40.0,
            Unit::Pt => PX_PER_IN / 72.0,
            Unit::Pc => PX_PER_IN / 6.0,
            Unit::Em => self.font_size,
            Unit::Rem => self.root_font_size,
            Unit::Vw => self.viewport_width / 100.0,
            Unit::Vh => self.viewport_height / 100.0,
            Unit::Vmin => self.viewport_width.min(self.viewport_height) / 100.0,
            Unit::Vmax => self.viewport_width.max(self.viewport_height) / 100.0,
            Unit::Deg | Unit::Rad | Unit::Grad | Unit::Turn => return None,
        };
        Some(px)
    }

    /// Resolve `value` in `unit` to zoomed pixels
    pub fn zoomed_px(&self, value: f64, unit: Unit) -> Option<f64> {
        self.px_per_unit(unit).map(|px| value * px * self.zoom)
    }

    /// Undo the zoom on a resolved pixel value
    pub fn unzoomed_px(&self, px: f64) -> f64 {
        px / self.zoom
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, ContextError> {
    if non_negative(field, value)? == 0.0 {
        Err(ContextError::NotPositive { field })
    } else {
        Ok(value)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ContextError> {
    if value.is_nan() {
        Err(ContextError::NaN { field })
    } else if value.is_infinite() {
        Err(ContextError::Infinite { field })
    } else if value < 0.0 {
        Err(ContextError::Negative { field })
    } else {
        Ok(value)
    }
}

/// Degrees in one angle `unit`; `None` for length units.
pub fn degrees_per_unit(unit: Unit) -> Option<f64> {
    match unit {
        Unit::Deg => Some(1.0),
        Unit::Grad => Some(0.9),
        Unit::Rad => Some(180.0 / std::f64::consts::PI),
        Unit::Turn => Some(360.0),
        _ => None,
    }
}
