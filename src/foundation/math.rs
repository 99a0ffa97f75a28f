/// Guard added to ramp denominators so gradients stay continuous as spread approaches zero.
pub const EPSILON: f64 = 1e-6;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Round a `[0, 1]` value to a byte; out-of-range input saturates, NaN maps to 0.
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    if !v.is_finite() {
        return if v == f64::INFINITY { 255 } else { 0 };
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Clamp to `[0, 1]`; NaN maps to 0.
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
