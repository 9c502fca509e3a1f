/// One homepage entry together with the related links listed beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub related_articles: Vec<RelatedArticle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedArticle {
    pub title: String,
    pub url: String,
}

/// Title and Markdown body extracted from a single article page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: String,
    pub body: String,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            related_articles: Vec::new(),
        }
    }

    pub fn with_related(mut self, related: Vec<RelatedArticle>) -> Self {
        self.related_articles = related;
        self
    }

    /// True when both title and URL are present.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }
}

impl RelatedArticle {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.url.is_empty()
    }
}

impl ArticleContent {
    /// Renders the article for the pager: an H1 carrying an OSC-8 hyperlink
    /// to `url`, a blank line, then the Markdown body.
    pub fn to_markdown(&self, url: &str) -> String {
        format!(
            "\n# \x1b]8;;{}\x07{}\x1b]8;;\x07\n\n{}",
            url, self.title, self.body
        )
    }
}
