//! Deterministic test signals.

/// `secs` seconds of a sine wave at `freq_hz`, peak amplitude `amp`.
pub fn sine(freq_hz: f64, sample_rate: u32, secs: f64, amp: f32) -> Vec<f32> {
    let n = (secs.max(0.0) * f64::from(sample_rate)).round() as usize;
    let w = 2.0 * std::f64::consts::PI * freq_hz / f64::from(sample_rate);
    (0..n).map(|i| amp * (w * i as f64).sin() as f32).collect()
}

/// `n` samples of uniform white noise in `[-amp, amp]` from a seeded splitmix64 stream.
pub fn noise(seed: u64, n: usize, amp: f32) -> Vec<f32> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let bits = mix64(state) >> 11;
            let unit = bits as f64 / (1u64 << 53) as f64;
            amp * (unit * 2.0 - 1.0) as f32
        })
        .collect()
}

/// Sine whose amplitude decays exponentially with time constant `tau_secs`.
pub fn decaying_sine(freq_hz: f64, sample_rate: u32, secs: f64, tau_secs: f64) -> Vec<f32> {
    let sr = f64::from(sample_rate);
    sine(freq_hz, sample_rate, secs, 1.0)
        .into_iter()
        .enumerate()
        .map(|(i, s)| s * (-(i as f64) / (sr * tau_secs.max(1e-9))).exp() as f32)
        .collect()
}

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "../../tests/unit/overview/tone.rs"]
mod tests;
