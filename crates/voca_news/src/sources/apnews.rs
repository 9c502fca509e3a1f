use async_trait::async_trait;
use scraper::Html;
use url::Url;
use voca_core::{Article, Error, Result};

use crate::address::resolve_index;
use crate::config::NewsConfig;
use crate::content::extract_article;
use crate::index::extract_articles;
use crate::logging::Logger;
use crate::sources::NewsSource;

/// Reads the AP News homepage and the articles it links to.
pub struct ApNews {
    client: reqwest::Client,
    base_url: Url,
    articles: Vec<Article>,
    logger: Logger,
}

impl ApNews {
    pub fn new(config: NewsConfig) -> Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            base_url: config.base_url()?,
            articles: Vec::new(),
            logger: Logger::new().with_prefix("📰").with_prefix("AP News"),
        })
    }

    /// Replaces the catalogue with the one extracted from `html`.
    pub fn load_listing(&mut self, html: &str) -> usize {
        let document = Html::parse_document(html);
        self.articles = extract_articles(&document);
        if self.articles.is_empty() {
            self.logger.warn("no articles found on the homepage");
        }
        self.articles.len()
    }

    /// Absolute URL of the entry printed as `index` in the listing.
    pub fn article_url(&self, index: &str) -> Result<Url> {
        if self.articles.is_empty() {
            return Err(Error::NoArticles);
        }
        let href = resolve_index(&self.articles, index)?;
        self.base_url
            .join(href)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", href, e)))
    }

    /// Extracts the article in `html` and renders it for display under `url`.
    pub fn render_article(url: &Url, html: &str) -> Result<String> {
        let document = Html::parse_document(html);
        let content = extract_article(&document)?;
        Ok(content.to_markdown(url.as_str()))
    }

    async fn fetch_page(&self, url: &Url) -> Result<String> {
        self.logger.debug(&format!("GET {}", url));
        let response = self.client.get(url.clone()).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl NewsSource for ApNews {
    fn name(&self) -> &str {
        "AP News"
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["apnews", "ap"]
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    async fn fetch_articles(&mut self) -> Result<usize> {
        let base_url = self.base_url.clone();
        let html = self.fetch_page(&base_url).await?;
        let count = self.load_listing(&html);
        self.logger.info(&format!("found {} articles", count));
        Ok(count)
    }

    async fn retrieve_article(&self, index: &str) -> Result<String> {
        let url = self.article_url(index)?;
        let html = self.fetch_page(&url).await?;
        Self::render_article(&url, &html)
    }
}
