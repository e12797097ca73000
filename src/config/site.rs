//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Home page
    pub profile: ProfileConfig,

    /// The article list: one entry per post. This is the single source of
    /// both the route table and the home page's article links. Adding a
    /// post means adding an entry here.
    pub articles: Vec<ArticleEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Homespun".to_string(),
            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            profile: ProfileConfig::default(),
            articles: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Static content for the home/profile page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            role: "Your Role".to_string(),
            bio: "A few words about yourself.".to_string(),
            links: Vec::new(),
        }
    }
}

/// A labelled link on the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkEntry {
    pub name: String,
    pub url: String,
}

/// A post registered with the site: its slug and display title
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleEntry {
    pub slug: String,
    pub title: String,
}
