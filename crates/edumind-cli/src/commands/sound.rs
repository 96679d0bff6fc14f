//! Sound selections as `data:` URIs and their playback.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use edumind_core::NotificationSound;

/// System sounds tried when the selection is a remote URL.
const SYSTEM_SOUNDS: [&str; 3] = [
    "/usr/share/sounds/freedesktop/stereo/complete.oga",
    "/usr/share/sounds/sound-icons/guitar-11.wav",
    "/usr/share/sounds/generic.wav",
];

const PLAYERS: [&str; 2] = ["paplay", "aplay"];

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg" | "oga") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("flac") => "audio/flac",
        _ => "application/octet-stream",
    }
}

/// Read an audio file into a custom sound selection.
pub fn custom_sound(path: &Path) -> std::io::Result<NotificationSound> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "custom".to_string());
    Ok(NotificationSound {
        url: format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes)),
        name,
    })
}

/// Bytes of a base64 `data:` URI, `None` for anything else.
pub fn decode_data_uri(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}

fn local_file(sound: &NotificationSound) -> Option<PathBuf> {
    if let Some(bytes) = decode_data_uri(&sound.url) {
        let path = std::env::temp_dir().join("edumind-custom-sound");
        match std::fs::write(&path, bytes) {
            Ok(()) => return Some(path),
            Err(e) => tracing::warn!(error = %e, "could not stage custom sound"),
        }
    }
    SYSTEM_SOUNDS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Start playback in a detached player process. Falls back to the
/// terminal bell when no player or file is available.
pub fn play(sound: &NotificationSound) {
    if let Some(file) = local_file(sound) {
        for player in PLAYERS {
            let spawned = Command::new(player)
                .arg(&file)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            if spawned.is_ok() {
                return;
            }
        }
        tracing::debug!("no audio player found");
    }
    eprint!("\x07");
}
