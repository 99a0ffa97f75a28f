use std::path::Path;

use crate::foundation::error::{WaveError, WaveResult};
use crate::style::palette::{ColorSet, DEFAULT_HUE};

/// Density cutoffs controlling which layers are drawn and how they fade.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayerThresholds {
    /// The mean line is drawn while `density < line_below`.
    pub line_below: f64,
    /// The gradient is drawn while `density > gradient_above`.
    pub gradient_above: f64,
    /// Density span over which the gradient fades from 0 to full opacity.
    pub gradient_ramp: f64,
    /// The envelope is drawn while `density < envelope_below`.
    pub envelope_below: f64,
    /// Below this density the envelope is fully opaque.
    pub envelope_full_below: f64,
}

impl Default for LayerThresholds {
    fn default() -> Self {
        Self {
            line_below: 8.0,
            gradient_above: 8.0,
            gradient_ramp: 96.0,
            envelope_below: 128.0,
            envelope_full_below: 32.0,
        }
    }
}

impl LayerThresholds {
    /// Reject non-finite or inverted cutoffs.
    pub fn validate(&self) -> WaveResult<()> {
        let all = [
            self.line_below,
            self.gradient_above,
            self.gradient_ramp,
            self.envelope_below,
            self.envelope_full_below,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(WaveError::validation("layer thresholds must be finite"));
        }
        // The inner highlight scales by `1 - 1/ln(density)`, which is negative below `e`.
        if self.gradient_above < std::f64::consts::E {
            return Err(WaveError::validation(format!(
                "gradient_above must be >= e (got {})",
                self.gradient_above
            )));
        }
        if self.gradient_ramp <= 0.0 {
            return Err(WaveError::validation("gradient_ramp must be > 0"));
        }
        if self.envelope_below <= self.envelope_full_below {
            return Err(WaveError::validation(
                "envelope_below must be > envelope_full_below",
            ));
        }
        Ok(())
    }
}

/// Renderer configuration, loadable from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Base hue in turns.
    pub hue: f64,
    /// Layer selection cutoffs.
    pub thresholds: LayerThresholds,
    /// Background for raster surfaces; `None` keeps them transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            thresholds: LayerThresholds::default(),
            clear_rgba: None,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> WaveResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_path(path: &Path) -> WaveResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            WaveError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> WaveResult<()> {
        if !self.hue.is_finite() {
            return Err(WaveError::validation("hue must be finite"));
        }
        self.thresholds.validate()
    }

    /// Palette derived from [`RenderConfig::hue`].
    pub fn palette(&self) -> ColorSet {
        ColorSet::from_hue(self.hue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
