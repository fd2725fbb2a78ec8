//! Error types for loading content and mounting the page.

use std::path::PathBuf;

/// Failure to load or validate a content registry.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content file {}: {source}", path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON for [`crate::content::Content`].
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A URL field is not an absolute http(s) URL.
    #[error("{field} is not an absolute http(s) URL: {value:?}")]
    InvalidUrl {
        /// Dotted path of the offending field
        field: String,
        /// Value found there
        value: String,
    },

    /// A section list has no entries.
    #[error("section `{0}` has no entries")]
    EmptySection(&'static str),

    /// A visible text field is empty or whitespace.
    #[error("{field} must not be blank")]
    BlankText {
        /// Dotted path of the offending field
        field: String,
    },
}

/// Failure to attach the page to the hosting document.
#[cfg(feature = "csr")]
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// `window` or `document` is unavailable.
    #[error("no browser document to mount into")]
    NoDocument,

    /// No element carries the mount id.
    #[error("mount container #{0} not found")]
    MissingContainer(&'static str),

    /// The element exists but is not an HTML element.
    #[error("mount container #{0} is not an HTML element")]
    NotHtmlElement(&'static str),
}
