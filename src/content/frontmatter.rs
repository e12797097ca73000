//! Front-matter parsing

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter data from a post.
///
/// `date` is kept as the literal string from the file; it is displayed, not
/// interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a leading `---` fenced YAML block from the content.
    /// Returns (front_matter, remaining_content).
    ///
    /// A file without a front-matter block, or with one that does not parse
    /// as YAML, yields default (empty) metadata and the content untouched;
    /// a bad block never fails the post.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start();
        let Some(rest) = trimmed.strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence: treat the whole file as body
            return (FrontMatter::default(), content);
        };

        let yaml_block = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_block.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_block) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                tracing::warn!("Malformed front matter, rendering without metadata: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2021-03-02
---

This is the content.
"#;
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.date, Some("2021-03-02".to_string()));
        assert!(remaining.starts_with("This is the content."));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body, no metadata.\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(fm.date, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let content = "---\ntitle: Oops\nno closing fence here";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_malformed_yaml_falls_back_to_empty() {
        let content = "---\ntitle: [unclosed\n---\nBody text.\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(remaining.contains("Body text."));
    }

    #[test]
    fn test_extra_fields_retained() {
        let content = "---\ntitle: T\ntags: [a, b]\n---\nBody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("T".to_string()));
        assert!(fm.extra.contains_key("tags"));
    }

    #[test]
    fn test_date_kept_as_string() {
        let content = "---\ndate: March 2nd, whenever\n---\nBody\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.date, Some("March 2nd, whenever".to_string()));
    }
}
