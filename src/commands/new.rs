//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create `content/<slug>.md` with a front-matter stub.
///
/// The route table is configuration, not a directory scan, so this also
/// prints the `articles` entry to add to site.yml.
pub fn run(site: &Site, title: &str) -> Result<()> {
    let slug = slug::slugify(title);
    let now = chrono::Local::now();

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n\n",
        title,
        now.format("%Y-%m-%d")
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);
    println!("Add it to site.yml to publish it:");
    println!("  articles:");
    println!("    - slug: {}", slug);
    println!("      title: {}", title);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_new_post_written_with_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());

        run(&site, "EmberJS with XState").unwrap();

        let text =
            fs::read_to_string(dir.path().join("content/emberjs-with-xstate.md")).unwrap();
        assert!(text.starts_with("---\ntitle: EmberJS with XState\ndate: "));
    }

    #[test]
    fn test_new_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());

        run(&site, "Once").unwrap();
        assert!(run(&site, "Once").is_err());
    }
}
