//! Content store - raw markdown text keyed by slug

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SiteError;

/// Loads raw post text from the content directory.
///
/// One markdown file per post; the file name minus the `.md` extension is
/// the slug.
pub struct ContentStore {
    content_dir: PathBuf,
}

impl ContentStore {
    /// Create a store over the given content directory
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    /// Resolve the file path for a slug, rejecting anything that could
    /// escape the content directory.
    pub fn path_for(&self, slug: &str) -> Result<PathBuf, SiteError> {
        if slug.is_empty()
            || slug.contains('/')
            || slug.contains('\\')
            || slug.contains("..")
        {
            return Err(SiteError::InvalidSlug(slug.to_string()));
        }
        Ok(self.content_dir.join(format!("{}.md", slug)))
    }

    /// Whether a content file exists for the slug
    pub fn exists(&self, slug: &str) -> bool {
        self.path_for(slug).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Load the raw markdown text for a slug
    pub fn load(&self, slug: &str) -> Result<String, SiteError> {
        let path = self.path_for(slug)?;
        if !path.is_file() {
            return Err(SiteError::MissingContent {
                slug: slug.to_string(),
                path,
            });
        }
        fs::read_to_string(&path).map_err(|source| SiteError::ContentRead {
            slug: slug.to_string(),
            source,
        })
    }

    /// All slugs present in the content directory, sorted
    pub fn slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = match fs::read_dir(&self.content_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("md"))
                .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
                .collect(),
            Err(_) => Vec::new(),
        };
        slugs.sort();
        slugs
    }
}
