use super::*;

#[test]
fn sine_has_expected_length_and_peak() {
    let s = sine(440.0, 44_100, 1.0, 0.8);
    assert_eq!(s.len(), 44_100);
    let peak = s.iter().fold(0.0f32, |m, v| m.max(v.abs()));
    assert!(peak <= 0.8 + 1e-6);
    assert!(peak > 0.79);
}

#[test]
fn noise_is_seeded_and_bounded() {
    let a = noise(7, 512, 0.5);
    let b = noise(7, 512, 0.5);
    let c = noise(8, 512, 0.5);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|v| v.abs() <= 0.5));
}

#[test]
fn decaying_sine_loses_energy() {
    let s = decaying_sine(100.0, 8_000, 1.0, 0.1);
    let head = s[..800].iter().fold(0.0f32, |m, v| m.max(v.abs()));
    let tail = s[7_200..].iter().fold(0.0f32, |m, v| m.max(v.abs()));
    assert!(head > tail * 10.0);
}
