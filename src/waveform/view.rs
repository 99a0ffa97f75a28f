use crate::foundation::error::{WaveError, WaveResult};

/// The window of audio a draw call covers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewState {
    /// First sample of the window.
    pub start: i64,
    /// Output columns.
    pub width: i64,
    /// Samples represented per output column.
    pub density: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            start: 0,
            width: 0,
            density: 1.0,
        }
    }
}

impl ViewState {
    /// Build a view, truncating `start` and `width` toward zero. Nothing is validated here.
    pub fn new(start: f64, width: f64, density: f64) -> Self {
        Self {
            start: start as i64,
            width: width as i64,
            density,
        }
    }

    /// Reject windows that cannot be drawn: `width <= 0`, or a density that is not a
    /// finite positive number.
    pub fn validate(&self) -> WaveResult<()> {
        if self.width <= 0 {
            return Err(WaveError::invalid_view(format!(
                "view width must be > 0 (got {})",
                self.width
            )));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(WaveError::invalid_view(format!(
                "view density must be finite and > 0 (got {})",
                self.density
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/view.rs"]
mod tests;
