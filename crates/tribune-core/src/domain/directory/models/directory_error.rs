// tribune-core/tribune-core
//
// Copyright: 2026, Tribune Maintainers
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    /// The directory could not be reached within the configured timeout.
    /// Callers may retry; the result of the attempted operation is unknown.
    #[error("The representative directory is unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("The representative directory returned an unexpected response: {reason}")]
    UnexpectedResponse { reason: String },
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
