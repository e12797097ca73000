//! Configuration module

mod site;

pub use site::ArticleEntry;
pub use site::LinkEntry;
pub use site::ProfileConfig;
pub use site::SiteConfig;
