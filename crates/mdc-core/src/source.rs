//! URL list source: the text file of videos to fetch.

use crate::error::TaskError;
use crate::url_model;
use std::path::Path;
use url::Url;

/// Reads the URL list file and returns the normalized URLs in file order.
///
/// Blank lines are skipped. An invalid line is fatal for that line only: it
/// is logged and dropped. The batch aborts only when the file had candidate
/// lines and every one of them was invalid.
pub fn read_video_urls(path: &Path) -> Result<Vec<Url>, TaskError> {
    let text = std::fs::read_to_string(path)?;

    let mut urls = Vec::new();
    let mut invalid = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match url_model::normalize_url(line) {
            Ok(url) => urls.push(url),
            Err(e) => {
                invalid += 1;
                tracing::warn!(line, error = %e, "skipping invalid URL line");
            }
        }
    }

    if urls.is_empty() && invalid > 0 {
        return Err(TaskError::InvalidUrl(format!(
            "all {invalid} line(s) in {} are invalid",
            path.display()
        )));
    }
    Ok(urls)
}
