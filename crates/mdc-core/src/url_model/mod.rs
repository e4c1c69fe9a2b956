//! URL normalization and target filename derivation.
//!
//! A work item's target name is derived deterministically from its source
//! URL (last path segment, sanitized for Linux filesystems), so the same URL
//! always maps to the same artifact and re-runs stay idempotent.

mod normalize;
mod path;
mod sanitize;

pub use normalize::normalize_url;
pub use path::filename_from_url;
pub use sanitize::sanitize_filename;

use crate::error::TaskError;
use url::Url;

/// Derives the local video file name for a download URL.
///
/// Fails with `InvalidUrl` when the URL has no usable path segment; unlike a
/// generic downloader, a video URL without a file name is not worth a
/// placeholder.
pub fn target_video_name(url: &Url) -> Result<String, TaskError> {
    let raw = filename_from_url(url)
        .ok_or_else(|| TaskError::InvalidUrl(format!("no file name in {url}")))?;
    let name = sanitize_filename(&raw);
    if name.is_empty() {
        return Err(TaskError::InvalidUrl(format!("no usable file name in {url}")));
    }
    Ok(name)
}

/// Maps a video file name to the audio artifact name (`a.mp4` → `a.mp3`).
pub fn target_audio_name(video_name: &str) -> String {
    std::path::Path::new(video_name)
        .with_extension("mp3")
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_name_is_url_basename() {
        let url = Url::parse("https://x.com/videos/a.mp4").unwrap();
        assert_eq!(target_video_name(&url).unwrap(), "a.mp4");
    }

    #[test]
    fn video_name_strips_query() {
        let url = Url::parse("https://x.com/a.mp4?token=abc").unwrap();
        assert_eq!(target_video_name(&url).unwrap(), "a.mp4");
    }

    #[test]
    fn rootless_url_is_invalid() {
        let url = Url::parse("https://x.com/").unwrap();
        assert!(matches!(
            target_video_name(&url),
            Err(TaskError::InvalidUrl(_))
        ));
    }

    #[test]
    fn audio_name_swaps_extension() {
        assert_eq!(target_audio_name("a.mp4"), "a.mp3");
        assert_eq!(target_audio_name("clip.v2.mp4"), "clip.v2.mp3");
        assert_eq!(target_audio_name("noext"), "noext.mp3");
    }
}
