//! Generator module - renders the route table into static HTML files

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::content::{ContentStore, MarkdownRenderer, Post};
use crate::routes::{Route, RouteTable, Template};
use crate::templates::{ArticleData, LinkData, PostData, ProfileData, SiteData, TemplateRenderer};
use crate::Site;
use tera::Context;

/// Static site generator
pub struct Generator {
    site: Site,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
    store: ContentStore,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            templates: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
            store: ContentStore::new(&site.content_dir),
        })
    }

    /// Generate the entire site.
    ///
    /// The route table is validated first: a slug with no content file
    /// fails the build up front, with every missing slug reported.
    pub fn generate(&self) -> Result<()> {
        let table = RouteTable::build(&self.site.config);

        if let Err(errors) = table.validate(&self.store) {
            let list: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::bail!(
                "route table references missing content:\n  {}",
                list.join("\n  ")
            );
        }

        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_static_assets()?;

        for route in table.routes() {
            let html = self.render_route(route)?;
            let output = self.site.public_dir.join(route.output_path());
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, html)?;
            tracing::debug!("Wrote {:?}", output);
        }

        Ok(())
    }

    /// Render a single route to HTML
    pub fn render_route(&self, route: &Route) -> Result<String> {
        match &route.template {
            Template::Home => self.render_home(),
            Template::Post { slug } => self.render_post(slug),
        }
    }

    fn render_home(&self) -> Result<String> {
        let profile = &self.site.config.profile;

        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context.insert(
            "profile",
            &ProfileData {
                name: profile.name.clone(),
                role: profile.role.clone(),
                bio: profile.bio.clone(),
                links: profile
                    .links
                    .iter()
                    .map(|l| LinkData {
                        name: l.name.clone(),
                        url: l.url.clone(),
                    })
                    .collect(),
            },
        );
        context.insert(
            "articles",
            &self
                .site
                .config
                .articles
                .iter()
                .map(|a| ArticleData {
                    title: a.title.clone(),
                    path: self.url_for(&format!("posts/{}", a.slug)),
                })
                .collect::<Vec<_>>(),
        );

        self.templates.render("home.html", &context)
    }

    fn render_post(&self, slug: &str) -> Result<String> {
        let post = Post::load(&self.store, &self.markdown, slug)?;

        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context.insert(
            "post",
            &PostData {
                title: post.title,
                date: post.date,
                content: post.content,
            },
        );

        self.templates.render("post.html", &context)
    }

    fn site_data(&self) -> SiteData {
        SiteData {
            title: self.site.config.title.clone(),
            root: self.site.config.root.clone(),
        }
    }

    /// Generate a URL with the root path
    fn url_for(&self, path: &str) -> String {
        let root = self.site.config.root.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", root)
        } else {
            format!("{}/{}", root, path)
        }
    }

    /// Copy the static asset directory (stylesheets) into the public
    /// directory, preserving relative paths. Linking the stylesheets is an
    /// explicit part of generation, not a side effect.
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(static_dir).unwrap_or(path);
            let target = self.site.public_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            tracing::debug!("Copied asset {:?}", relative);
        }

        Ok(())
    }
}
