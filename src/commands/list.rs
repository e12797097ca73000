//! List the route table with validation status

use anyhow::Result;

use crate::content::ContentStore;
use crate::routes::{RouteTable, Template};
use crate::Site;

/// Print every registered route and whether its content file exists
pub fn run(site: &Site) -> Result<()> {
    let table = RouteTable::build(&site.config);
    let store = ContentStore::new(&site.content_dir);

    println!("Routes ({}):", table.routes().len());
    for route in table.routes() {
        match &route.template {
            Template::Home => println!("  {} -> home", route.path),
            Template::Post { slug } => {
                let status = if store.exists(slug) {
                    "ok"
                } else {
                    "missing content file"
                };
                println!("  {} -> post [{}] ({})", route.path, slug, status);
            }
        }
    }

    // Content files no route points at
    let routed: Vec<&str> = table
        .routes()
        .iter()
        .filter_map(|r| match &r.template {
            Template::Post { slug } => Some(slug.as_str()),
            Template::Home => None,
        })
        .collect();

    let unrouted: Vec<String> = store
        .slugs()
        .into_iter()
        .filter(|s| !routed.contains(&s.as_str()))
        .collect();

    if !unrouted.is_empty() {
        println!("Content without a route ({}):", unrouted.len());
        for slug in unrouted {
            println!("  {}", slug);
        }
    }

    Ok(())
}
