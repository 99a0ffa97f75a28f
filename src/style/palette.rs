use crate::foundation::core::Rgb;

/// Default base hue (`212/365`, in turns).
pub const DEFAULT_HUE: f64 = 212.0 / 365.0;

/// The three colors a waveform is drawn with.
///
/// Derived once from a base hue and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSet {
    /// Zero line.
    pub grid: Rgb,
    /// Mean line, envelope fill and outer gradient.
    pub main: Rgb,
    /// Inner highlight gradient.
    pub fore: Rgb,
}

impl ColorSet {
    /// Derive the palette from a hue expressed in turns (`0.0..1.0`, wrapping).
    pub fn from_hue(hue: f64) -> Self {
        Self {
            grid: Rgb::gray(0.2),
            main: Rgb::from_hls(hue, 0.5, 1.0),
            fore: Rgb::from_hls(hue, 0.75, 1.0),
        }
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::from_hue(DEFAULT_HUE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/palette.rs"]
mod tests;
