//! Typed errors for the content boundary

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or loading site content.
///
/// Anything past this boundary (template rendering, file writes) uses
/// `anyhow` and propagates up to the CLI.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A route or link references a slug with no content file behind it.
    #[error("no content file for slug '{slug}' (expected {path})")]
    MissingContent { slug: String, path: PathBuf },

    /// Slugs come from configuration, but the store still refuses anything
    /// that could escape the content directory.
    #[error("invalid slug '{0}': must not contain path separators or '..'")]
    InvalidSlug(String),

    /// The content file exists but could not be read as UTF-8 text.
    #[error("failed to read content for slug '{slug}'")]
    ContentRead {
        slug: String,
        #[source]
        source: std::io::Error,
    },
}
