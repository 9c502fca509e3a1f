use async_trait::async_trait;
use voca_core::{Article, Error, Result};

use crate::config::NewsConfig;
use crate::listing::render_listing;

pub mod apnews;

pub use apnews::ApNews;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the display name of the news source
    fn name(&self) -> &str;

    /// Returns a list of CLI shorthand names for this source
    fn cli_names(&self) -> Vec<&str> {
        vec![]
    }

    /// The catalogue from the last homepage fetch
    fn articles(&self) -> &[Article];

    /// Fetches the homepage and rebuilds the catalogue, returning its size
    async fn fetch_articles(&mut self) -> Result<usize>;

    /// Fetches the article printed as `index` and renders it as Markdown
    async fn retrieve_article(&self, index: &str) -> Result<String>;

    fn list_articles(&self) -> Result<String> {
        render_listing(self.articles())
    }
}

pub fn all_sources(config: &NewsConfig) -> Result<Vec<Box<dyn NewsSource>>> {
    let apnews: Box<dyn NewsSource> = Box::new(ApNews::new(config.clone())?);
    Ok(vec![apnews])
}

/// Looks a source up by one of its CLI names.
pub fn create_source(name: &str, config: &NewsConfig) -> Result<Box<dyn NewsSource>> {
    let name = name.to_lowercase();
    for source in all_sources(config)? {
        if source.cli_names().contains(&name.as_str()) {
            return Ok(source);
        }
    }
    Err(Error::UnsupportedSource(name))
}
