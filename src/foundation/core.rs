pub use kurbo::{Affine, Point};

/// Straight (non-premultiplied) RGB color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Rgb {
    /// Construct from components in `[0, 1]`.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Gray with equal components.
    pub const fn gray(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Convert hue/lightness/saturation (all in `[0, 1]`) to RGB.
    ///
    /// Hue wraps, so `1.25` and `0.25` name the same color.
    pub fn from_hls(h: f64, l: f64, s: f64) -> Self {
        const ONE_THIRD: f64 = 1.0 / 3.0;
        const ONE_SIXTH: f64 = 1.0 / 6.0;
        const TWO_THIRD: f64 = 2.0 / 3.0;

        fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
            let hue = hue.rem_euclid(1.0);
            if hue < ONE_SIXTH {
                m1 + (m2 - m1) * hue * 6.0
            } else if hue < 0.5 {
                m2
            } else if hue < TWO_THIRD {
                m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
            } else {
                m1
            }
        }

        if s == 0.0 {
            return Self::gray(l);
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Self {
            r: channel(m1, m2, h + ONE_THIRD),
            g: channel(m1, m2, h),
            b: channel(m1, m2, h - ONE_THIRD),
        }
    }

    /// Quantize to straight RGB8.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            crate::foundation::math::unit_to_u8(self.r),
            crate::foundation::math::unit_to_u8(self.g),
            crate::foundation::math::unit_to_u8(self.b),
        ]
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        use crate::foundation::math::mul_div255_u8;

        Self {
            r: mul_div255_u8(u16::from(r), u16::from(a)),
            g: mul_div255_u8(u16::from(g), u16::from(a)),
            b: mul_div255_u8(u16::from(b), u16::from(a)),
            a,
        }
    }

    /// Byte layout used by pixel buffers.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
