//! Map task errors onto retry policy error kinds.

use crate::error::TaskError;
use crate::retry::policy::ErrorKind;

/// Classify a task error into an `ErrorKind` for the retry decision.
pub fn classify(e: &TaskError) -> ErrorKind {
    match e {
        TaskError::InvalidUrl(_) => ErrorKind::InvalidUrl,
        TaskError::Http(_) => ErrorKind::Http,
        TaskError::Network(_) => ErrorKind::Network,
        TaskError::Codec(_) => ErrorKind::Codec,
        TaskError::Io(_) => ErrorKind::Io,
        TaskError::Interrupted => ErrorKind::Interrupted,
    }
}
