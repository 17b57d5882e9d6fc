use super::*;

#[test]
fn audio_entry_accepts_legacy_name_field() {
    let legacy: AudioEntry =
        serde_json::from_str(r#"{"path":"assets/music_1.bin","name":"song.mp3"}"#).unwrap();
    assert_eq!(legacy.display_name, "song.mp3");

    let current: AudioEntry =
        serde_json::from_str(r#"{"path":"assets/music_1.bin","displayName":"song.mp3"}"#).unwrap();
    assert_eq!(current, legacy);

    let out = serde_json::to_value(&current).unwrap();
    assert_eq!(out["displayName"], "song.mp3");
    assert!(out.get("name").is_none());
}

#[test]
fn timestamp_tolerates_floats_and_junk() {
    let m: ProjectManifest =
        serde_json::from_str(r#"{"version":"1.0.2","slides":[],"timestamp":1.5e3}"#).unwrap();
    assert_eq!(m.timestamp, 1500);
    let m: ProjectManifest =
        serde_json::from_str(r#"{"version":"1.0.2","slides":[],"timestamp":"soon"}"#).unwrap();
    assert_eq!(m.timestamp, 0);
    let m: ProjectManifest = serde_json::from_str(r#"{"version":"1.0.2","slides":[]}"#).unwrap();
    assert_eq!(m.timestamp, 0);
    assert!(m.audio.is_none());
}

#[test]
fn major_version_check() {
    let mut m: ProjectManifest =
        serde_json::from_str(r#"{"version":"1.0.0","slides":[]}"#).unwrap();
    assert!(m.is_same_major_version());
    m.version = "2.0.0".into();
    assert!(!m.is_same_major_version());
}
