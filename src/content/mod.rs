//! Content module - loading, front matter and markdown rendering

mod frontmatter;
mod markdown;
mod post;
mod store;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::Post;
pub use store::ContentStore;
