//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Site
title: Homespun
url: http://localhost:4000
root: /

# Directory
content_dir: content
public_dir: public
static_dir: static

# Home page
profile:
  name: Your Name
  role: Your Role
  bio: A few words about yourself.
  links:
    - name: GitHub
      url: https://github.com/you

# One entry per post. The slug must match a file in content_dir.
articles:
  - slug: hello-world
    title: Hello World
"#;

const SAMPLE_POST: &str = r#"---
title: Hello World
date: 2021-03-02
---

Welcome! This post lives in `content/hello-world.md`.

Code blocks with a language tag are syntax highlighted:

```js
const a = 1;
```

Those without one are left plain:

```
plain text block
```
"#;

const STYLE_CSS: &str = r#"body {
  margin: 0;
  font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
}

.container {
  max-width: 42rem;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.article__back-link {
  display: inline-block;
  margin-bottom: 1rem;
  text-decoration: none;
}

.article__date {
  display: block;
  margin-bottom: 1.5rem;
  color: #6a737d;
  font-size: 0.875rem;
}
"#;

const MARKDOWN_CSS: &str = r#"/* Markdown body styling, in the spirit of github-markdown-css */
.markdown-body {
  line-height: 1.6;
  word-wrap: break-word;
}

.markdown-body h1,
.markdown-body h2 {
  padding-bottom: 0.3em;
  border-bottom: 1px solid #eaecef;
}

.markdown-body blockquote {
  margin: 0;
  padding: 0 1em;
  color: #6a737d;
  border-left: 0.25em solid #dfe2e5;
}

.markdown-body code {
  padding: 0.2em 0.4em;
  background-color: rgba(27, 31, 35, 0.05);
  border-radius: 3px;
  font-size: 85%;
}

.markdown-body pre {
  padding: 1em;
  overflow: auto;
  border-radius: 3px;
}

.markdown-body pre code {
  padding: 0;
  background-color: transparent;
}

.markdown-body table {
  border-collapse: collapse;
}

.markdown-body table th,
.markdown-body table td {
  padding: 6px 13px;
  border: 1px solid #dfe2e5;
}
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("site.yml");
    if config_path.exists() {
        anyhow::bail!("site.yml already exists in {:?}", target_dir);
    }

    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join("static/css"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    fs::write(target_dir.join("content/hello-world.md"), SAMPLE_POST)?;
    fs::write(target_dir.join("static/css/style.css"), STYLE_CSS)?;
    fs::write(target_dir.join("static/css/markdown.css"), MARKDOWN_CSS)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::Site;

    #[test]
    fn test_init_scaffolds_a_buildable_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("site.yml").is_file());
        assert!(dir.path().join("content/hello-world.md").is_file());
        assert!(dir.path().join("static/css/style.css").is_file());

        // The scaffold must generate cleanly as-is
        let site = Site::new(dir.path()).unwrap();
        Generator::new(&site).unwrap().generate().unwrap();
        assert!(dir.path().join("public/posts/hello-world/index.html").is_file());
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
