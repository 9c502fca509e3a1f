//! Maps the numbers printed in the listing back to article URLs.

use voca_core::{Article, Error, Result};

/// Resolves a listing index to the URL it points at.
///
/// `"N"` addresses the N-th article and `"N-M"` the M-th related article
/// beneath it, both 1-based, exactly as printed by the listing.
pub fn resolve_index<'a>(articles: &'a [Article], index: &str) -> Result<&'a str> {
    for (i, article) in articles.iter().enumerate() {
        let position = (i + 1).to_string();
        if position == index {
            if !article.is_complete() {
                return Err(Error::IncompleteEntry(index.to_string()));
            }
            return Ok(&article.url);
        }

        for (j, related) in article.related_articles.iter().enumerate() {
            if format!("{}-{}", position, j + 1) == index {
                if !related.is_complete() {
                    return Err(Error::IncompleteEntry(index.to_string()));
                }
                return Ok(&related.url);
            }
        }
    }

    Err(Error::AddressNotFound(index.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voca_core::RelatedArticle;

    fn catalogue() -> Vec<Article> {
        vec![
            Article::new("Title A", "/a1").with_related(vec![RelatedArticle::new("Title B", "/a2")]),
            Article::new("Second", "/b").with_related(vec![
                RelatedArticle::new("R1", "/b1"),
                RelatedArticle::new("", "/b2"),
            ]),
            Article::new("No link", ""),
        ]
    }

    #[test]
    fn test_resolve_article() {
        let articles = catalogue();
        assert_eq!(resolve_index(&articles, "1").unwrap(), "/a1");
        assert_eq!(resolve_index(&articles, "2").unwrap(), "/b");
    }

    #[test]
    fn test_resolve_related() {
        let articles = catalogue();
        assert_eq!(resolve_index(&articles, "1-1").unwrap(), "/a2");
        assert_eq!(resolve_index(&articles, "2-1").unwrap(), "/b1");
    }

    #[test]
    fn test_not_found() {
        let articles = catalogue();
        for index in ["1-2", "4", "0", "", "01", "1-", "x"] {
            assert!(
                matches!(resolve_index(&articles, index), Err(Error::AddressNotFound(ref i)) if i == index),
                "index {:?} should not resolve",
                index
            );
        }
    }

    #[test]
    fn test_incomplete_entries() {
        let articles = catalogue();
        assert!(matches!(resolve_index(&articles, "3"), Err(Error::IncompleteEntry(_))));
        assert!(matches!(resolve_index(&articles, "2-2"), Err(Error::IncompleteEntry(_))));
    }

    #[test]
    fn test_round_trip_over_every_position() {
        let articles = catalogue();
        for (i, article) in articles.iter().enumerate() {
            if article.is_complete() {
                assert_eq!(resolve_index(&articles, &(i + 1).to_string()).unwrap(), article.url);
            }
            for (j, related) in article.related_articles.iter().enumerate() {
                if related.is_complete() {
                    let index = format!("{}-{}", i + 1, j + 1);
                    assert_eq!(resolve_index(&articles, &index).unwrap(), related.url);
                }
            }
        }
    }
}
