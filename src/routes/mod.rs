//! Route table - the finite set of pages the site exports

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::error::SiteError;

/// The template a route renders through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Home,
    Post { slug: String },
}

/// One exported page: a URL path bound to a template
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub template: Template,
}

impl Route {
    /// Output file for this route, relative to the public directory.
    /// `/` becomes `index.html`, `/posts/<slug>` a pretty-URL directory.
    pub fn output_path(&self) -> PathBuf {
        match &self.template {
            Template::Home => PathBuf::from("index.html"),
            Template::Post { slug } => PathBuf::from("posts").join(slug).join("index.html"),
        }
    }
}

/// Static route table built from configuration.
///
/// Fixed once the config is loaded: the root path plus one post path per
/// article entry. Adding a post means adding an entry to `articles` in
/// site.yml.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the table from the configured article list
    pub fn build(config: &SiteConfig) -> Self {
        let mut routes = vec![Route {
            path: "/".to_string(),
            template: Template::Home,
        }];

        for article in &config.articles {
            routes.push(Route {
                path: format!("/posts/{}", article.slug),
                template: Template::Post {
                    slug: article.slug.clone(),
                },
            });
        }

        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Check every post route against the content directory.
    /// Returns all offending slugs, so one pass reports every problem.
    pub fn validate(&self, store: &ContentStore) -> Result<(), Vec<SiteError>> {
        let mut errors = Vec::new();

        for route in &self.routes {
            if let Template::Post { slug } = &route.template {
                match store.path_for(slug) {
                    Ok(path) => {
                        if !path.is_file() {
                            errors.push(SiteError::MissingContent {
                                slug: slug.clone(),
                                path,
                            });
                        }
                    }
                    Err(e) => errors.push(e),
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArticleEntry;
    use std::fs;

    fn config_with(slugs: &[&str]) -> SiteConfig {
        SiteConfig {
            articles: slugs
                .iter()
                .map(|s| ArticleEntry {
                    slug: s.to_string(),
                    title: s.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_route_table() {
        let table = RouteTable::build(&config_with(&["emberjs-with-xstate"]));
        let routes = table.routes();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/");
        assert_eq!(routes[0].template, Template::Home);
        assert_eq!(routes[1].path, "/posts/emberjs-with-xstate");
        assert_eq!(
            routes[1].template,
            Template::Post {
                slug: "emberjs-with-xstate".to_string()
            }
        );
    }

    #[test]
    fn test_output_paths() {
        let table = RouteTable::build(&config_with(&["a-post"]));
        let routes = table.routes();

        assert_eq!(routes[0].output_path(), PathBuf::from("index.html"));
        assert_eq!(
            routes[1].output_path(),
            PathBuf::from("posts/a-post/index.html")
        );
    }

    #[test]
    fn test_validate_reports_missing_slugs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("here.md"), "x").unwrap();
        let store = ContentStore::new(dir.path());

        let table = RouteTable::build(&config_with(&["here", "gone", "also-gone"]));
        let errors = table.validate(&store).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], SiteError::MissingContent { slug, .. } if slug == "gone"));
    }

    #[test]
    fn test_validate_ok() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("here.md"), "x").unwrap();
        let store = ContentStore::new(dir.path());

        let table = RouteTable::build(&config_with(&["here"]));
        assert!(table.validate(&store).is_ok());
    }
}
