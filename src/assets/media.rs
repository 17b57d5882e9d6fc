use crate::foundation::error::{DeckError, DeckResult};

/// Content type and preferred file extension for a blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaType {
    /// MIME type.
    pub mime: &'static str,
    /// File extension without the dot.
    pub extension: &'static str,
}

const OCTET_STREAM: MediaType = MediaType {
    mime: "application/octet-stream",
    extension: "bin",
};

/// Guess what `bytes` contain from their leading signature.
///
/// Raster images are recognised through `image`; common audio containers by magic bytes.
/// Unknown data maps to `application/octet-stream` / `bin`.
pub fn sniff_media(bytes: &[u8]) -> MediaType {
    if let Ok(format) = image::guess_format(bytes) {
        return MediaType {
            mime: format.to_mime_type(),
            extension: format.extensions_str().first().copied().unwrap_or("bin"),
        };
    }
    sniff_audio(bytes).unwrap_or(OCTET_STREAM)
}

fn sniff_audio(bytes: &[u8]) -> Option<MediaType> {
    let audio = |mime, extension| Some(MediaType { mime, extension });
    if bytes.starts_with(b"ID3") || bytes.starts_with(&[0xFF, 0xFB]) {
        return audio("audio/mpeg", "mp3");
    }
    if bytes.starts_with(b"OggS") {
        return audio("audio/ogg", "ogg");
    }
    if bytes.starts_with(b"fLaC") {
        return audio("audio/flac", "flac");
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE" {
        return audio("audio/wav", "wav");
    }
    if bytes.len() >= 8 && &bytes[4..8] == b"ftyp" {
        return audio("audio/mp4", "m4a");
    }
    None
}

/// Clean up an image or audio reference written relative to the deck file.
///
/// Backslashes become `/`, empty and `.` segments are dropped. References that are absolute
/// (leading `/` or a drive letter), climb out of the deck directory or name no file are refused.
pub fn normalize_rel_path(source: &str) -> DeckResult<String> {
    let unified = source.trim().replace('\\', "/");
    let bytes = unified.as_bytes();
    let drive = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    if unified.starts_with('/') || drive {
        return Err(DeckError::validation(format!(
            "deck media reference {source:?} is absolute; use a path next to the deck file"
        )));
    }

    let segments = unified
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .map(|seg| match seg {
            ".." => Err(DeckError::validation(format!(
                "deck media reference {source:?} points outside the deck directory"
            ))),
            _ => Ok(seg),
        })
        .collect::<DeckResult<Vec<_>>>()?;

    if segments.is_empty() {
        return Err(DeckError::validation(format!(
            "deck media reference {source:?} names no file"
        )));
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/media.rs"]
mod tests;
