use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WaveError::invalid_view("x")
            .to_string()
            .contains("invalid view:")
    );
    assert!(WaveError::domain("x").to_string().contains("domain error:"));
    assert!(
        WaveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WaveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WaveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: WaveError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, WaveError::Serde(_)));
}
