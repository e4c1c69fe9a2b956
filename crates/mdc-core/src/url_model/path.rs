//! Filename extraction from a URL path.

use url::Url;

/// Last non-empty path segment of `url`, used as the local file name hint.
/// Query strings and fragments are not part of the path and never leak in.
pub fn filename_from_url(url: &Url) -> Option<String> {
    let segment = url.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
