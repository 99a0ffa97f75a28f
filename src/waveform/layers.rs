use crate::style::config::LayerThresholds;

/// Which layers a band gets at a given density, and at what opacity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerPlan {
    /// Filled min/max envelope opacity, if drawn.
    pub envelope_alpha: Option<f64>,
    /// Statistical gradient opacity, if drawn.
    pub gradient_alpha: Option<f64>,
    /// Whether the mean trace is drawn.
    pub mean_line: bool,
}

impl LayerPlan {
    /// Select layers for `density`.
    ///
    /// Envelope and gradient overlap so that zooming cross-fades between them. Below
    /// `line_below` only the mean trace is drawn.
    pub fn for_density(density: f64, t: &LayerThresholds) -> Self {
        if density < t.line_below {
            return Self {
                envelope_alpha: None,
                gradient_alpha: None,
                mean_line: true,
            };
        }
        Self {
            envelope_alpha: (density < t.envelope_below).then(|| envelope_alpha(density, t)),
            gradient_alpha: (density > t.gradient_above).then(|| gradient_alpha(density, t)),
            mean_line: false,
        }
    }

    /// Number of layers drawn on top of the origin line.
    pub fn layer_count(&self) -> usize {
        usize::from(self.envelope_alpha.is_some())
            + usize::from(self.gradient_alpha.is_some())
            + usize::from(self.mean_line)
    }
}

/// `1 - x^2` where `x` is the density's position inside the envelope fade span.
pub fn envelope_alpha(density: f64, t: &LayerThresholds) -> f64 {
    let span = t.envelope_below - t.envelope_full_below;
    let x = (density.clamp(t.envelope_full_below, t.envelope_below) - t.envelope_full_below) / span;
    (1.0 - x * x).clamp(0.0, 1.0)
}

/// Linear fade-in starting at `gradient_above`.
pub fn gradient_alpha(density: f64, t: &LayerThresholds) -> f64 {
    ((density - t.gradient_above) / t.gradient_ramp).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/layers.rs"]
mod tests;
