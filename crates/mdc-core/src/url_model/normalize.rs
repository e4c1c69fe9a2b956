//! Raw input line → validated HTTP(S) URL.

use crate::error::TaskError;
use url::Url;

/// Validates and normalizes a raw URL line.
///
/// Scheme-less input is prefixed with `https://` before parsing. Anything
/// that does not end up as an HTTP(S) URL with a host fails with
/// `InvalidUrl`.
pub fn normalize_url(raw: &str) -> Result<Url, TaskError> {
    let line = raw.trim();
    if line.is_empty() {
        return Err(TaskError::InvalidUrl("empty line".to_string()));
    }

    let candidate = if line.starts_with("http://") || line.starts_with("https://") {
        line.to_string()
    } else {
        format!("https://{line}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| TaskError::InvalidUrl(format!("{line}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(TaskError::InvalidUrl(line.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_explicit_schemes() {
        assert_eq!(
            normalize_url("http://x.com/a.mp4").unwrap().as_str(),
            "http://x.com/a.mp4"
        );
        assert_eq!(
            normalize_url("https://x.com/a.mp4").unwrap().as_str(),
            "https://x.com/a.mp4"
        );
    }

    #[test]
    fn prefixes_https_when_scheme_missing() {
        assert_eq!(
            normalize_url("x.com/a.mp4").unwrap().as_str(),
            "https://x.com/a.mp4"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            normalize_url("  x.com/a.mp4\n").unwrap().as_str(),
            "https://x.com/a.mp4"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(normalize_url("").is_err());
        assert!(normalize_url("   ").is_err());
        assert!(normalize_url("ht tp://broken").is_err());
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(normalize_url("ftp://x.com/a.mp4").is_err());
        assert!(normalize_url("file:///etc/passwd").is_err());
    }
}
