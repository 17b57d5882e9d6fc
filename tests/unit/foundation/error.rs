use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DeckError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DeckError::invalid_project("x")
            .to_string()
            .starts_with("invalid project file:")
    );
    assert!(DeckError::asset("x").to_string().contains("asset error:"));
    assert!(
        DeckError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_structural_failures_are_invalid_project() {
    assert!(DeckError::invalid_project("missing manifest").is_invalid_project());
    assert!(!DeckError::asset("gone").is_invalid_project());
    assert!(!DeckError::validation("x").is_invalid_project());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DeckError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
