use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A marker the page layout should carry (container, headline, body) is absent.
    #[error("{0} not found")]
    StructuralNotFound(&'static str),

    #[error("article content is empty")]
    EmptyContent,

    #[error("article with index {0} not found")]
    AddressNotFound(String),

    #[error("article at index {0} is missing title or URL")]
    IncompleteEntry(String),

    #[error("no articles available")]
    NoArticles,

    #[error("unsupported news source: {0}")]
    UnsupportedSource(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
