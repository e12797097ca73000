//! Page templates using the Tera template engine
//!
//! Both page templates are embedded directly in the binary; the site ships
//! no theme directory.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded templates loaded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies arrive pre-rendered as HTML; autoescaping would
        // mangle them
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("home.html", include_str!("theme/home.html")),
            ("post.html", include_str!("theme/post.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub root: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileData {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub links: Vec<LinkData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkData {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleData {
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    pub date: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            title: "Test Site".to_string(),
            root: "/".to_string(),
        }
    }

    #[test]
    fn test_render_home_template() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert(
            "profile",
            &ProfileData {
                name: "Emerson Lackey".to_string(),
                role: "Director of Engineering".to_string(),
                bio: "Hi there.".to_string(),
                links: vec![LinkData {
                    name: "GitHub".to_string(),
                    url: "https://github.com/emerson".to_string(),
                }],
            },
        );
        context.insert(
            "articles",
            &vec![ArticleData {
                title: "EmberJS with XState".to_string(),
                path: "/posts/emberjs-with-xstate".to_string(),
            }],
        );

        let html = renderer.render("home.html", &context).unwrap();
        assert!(html.contains("<h1>Emerson Lackey</h1>"));
        assert!(html.contains("Director of Engineering"));
        assert!(html.contains(r#"<a href="/posts/emberjs-with-xstate">EmberJS with XState</a>"#));
        assert!(html.contains("https://github.com/emerson"));
    }

    #[test]
    fn test_render_post_template() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert(
            "post",
            &PostData {
                title: "T".to_string(),
                date: "D".to_string(),
                content: "<p>hello</p>".to_string(),
            },
        );

        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("<h1>T</h1>"));
        assert!(html.contains("Published: D"));
        assert!(html.contains("<p>hello</p>"));
        assert!(html.contains("markdown-body"));
        assert!(html.contains(r#"class="article__back-link""#));
    }

    #[test]
    fn test_layout_links_stylesheets() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("site", &site());
        context.insert(
            "post",
            &PostData {
                title: "T".to_string(),
                date: "D".to_string(),
                content: String::new(),
            },
        );

        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("/css/markdown.css"));
        assert!(html.contains("/css/style.css"));
    }
}
