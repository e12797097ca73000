//! Post model

use anyhow::Result;
use serde::Serialize;

use super::{ContentStore, FrontMatter, MarkdownRenderer};

/// A blog post, derived fresh from its content file on every build
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// URL-safe identifier; also the content file name minus `.md`
    pub slug: String,

    /// Post title (front matter, falling back to the slug)
    pub title: String,

    /// Publication date, displayed verbatim
    pub date: String,

    /// Raw markdown body (after front matter)
    pub raw: String,

    /// Rendered HTML content
    pub content: String,
}

impl Post {
    /// Load and render the post for a slug
    pub fn load(store: &ContentStore, renderer: &MarkdownRenderer, slug: &str) -> Result<Post> {
        let text = store.load(slug)?;
        let (fm, body) = FrontMatter::parse(&text);

        let title = fm.title.unwrap_or_else(|| slug.to_string());
        let date = fm.date.unwrap_or_default();
        let content = renderer.render(body)?;

        Ok(Post {
            slug: slug.to_string(),
            title,
            date,
            raw: body.to_string(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture(dir: &std::path::Path, slug: &str, text: &str) -> ContentStore {
        fs::write(dir.join(format!("{}.md", slug)), text).unwrap();
        ContentStore::new(dir)
    }

    #[test]
    fn test_load_post_with_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        let store = fixture(dir.path(), "t-post", "---\ntitle: \"T\"\ndate: \"D\"\n---\nhello\n");
        let renderer = MarkdownRenderer::new();

        let post = Post::load(&store, &renderer, "t-post").unwrap();
        assert_eq!(post.title, "T");
        assert_eq!(post.date, "D");
        assert!(post.content.contains("<p>hello</p>"));
    }

    #[test]
    fn test_load_post_without_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        let store = fixture(dir.path(), "bare", "just a body\n");
        let renderer = MarkdownRenderer::new();

        let post = Post::load(&store, &renderer, "bare").unwrap();
        assert_eq!(post.title, "bare");
        assert_eq!(post.date, "");
        assert!(post.content.contains("just a body"));
    }

    #[test]
    fn test_load_missing_post_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        let renderer = MarkdownRenderer::new();

        assert!(Post::load(&store, &renderer, "missing").is_err());
    }
}
