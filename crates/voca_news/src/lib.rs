pub mod address;
pub mod cli;
pub mod config;
pub mod content;
pub mod dom;
pub mod index;
pub mod listing;
pub mod logging;
pub mod sources;

pub use address::resolve_index;
pub use cli::{NewsArgs, NewsCommands};
pub use config::NewsConfig;
pub use content::extract_article;
pub use index::extract_articles;
pub use listing::render_listing;
pub use logging::{init_logging, Logger};
pub use sources::{create_source, NewsSource};

pub mod prelude {
    pub use super::sources::NewsSource;
    pub use voca_core::{Article, ArticleContent, Error, RelatedArticle, Result};
}
