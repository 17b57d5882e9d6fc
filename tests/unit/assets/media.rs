use super::*;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

#[test]
fn images_are_recognised_by_signature() {
    let m = sniff_media(PNG_MAGIC);
    assert_eq!(m.mime, "image/png");
    assert_eq!(m.extension, "png");
}

#[test]
fn audio_containers_are_recognised() {
    assert_eq!(sniff_media(b"ID3\x04\x00rest").extension, "mp3");
    assert_eq!(sniff_media(b"OggS\x00\x02").mime, "audio/ogg");
    assert_eq!(sniff_media(b"RIFF\x24\x00\x00\x00WAVEfmt ").extension, "wav");
}

#[test]
fn unknown_bytes_fall_back_to_octet_stream() {
    let m = sniff_media(b"plain text");
    assert_eq!(m.mime, "application/octet-stream");
    assert_eq!(m.extension, "bin");
    assert_eq!(sniff_media(&[]).extension, "bin");
}

#[test]
fn normalize_path_cross_platform() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./img//x.png").unwrap(), "img/x.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn deck_references_outside_the_deck_are_refused() {
    let err = normalize_rel_path("C:\\slides\\bg.png").unwrap_err().to_string();
    assert!(err.contains("is absolute"), "{err}");
    let err = normalize_rel_path("img/../../bg.png").unwrap_err().to_string();
    assert!(err.contains("outside the deck directory"), "{err}");
    let err = normalize_rel_path(" . ").unwrap_err().to_string();
    assert!(err.contains("names no file"), "{err}");
    assert_eq!(normalize_rel_path(" media/./song.mp3 ").unwrap(), "media/song.mp3");
}
