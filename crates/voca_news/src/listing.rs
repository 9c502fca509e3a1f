//! The `Number / Title` table shown before the prompt.

use voca_core::{Article, Error, Result};

const COLUMN_PADDING: usize = 4;

/// Renders the catalogue as a two-column `Number / Title` table.
///
/// Related articles are indented by one space and numbered `N-M`. Rows
/// without a URL are left out but still consume their number, so every
/// printed index resolves back to the same entry.
pub fn render_listing(articles: &[Article]) -> Result<String> {
    if articles.is_empty() {
        return Err(Error::NoArticles);
    }

    let mut rows = vec![("Number".to_string(), "Title")];
    for (i, article) in articles.iter().enumerate() {
        if article.url.is_empty() {
            continue;
        }
        rows.push(((i + 1).to_string(), article.title.as_str()));
        for (j, related) in article.related_articles.iter().enumerate() {
            if related.url.is_empty() {
                continue;
            }
            rows.push((format!(" {}-{}", i + 1, j + 1), related.title.as_str()));
        }
    }

    let width = rows
        .iter()
        .map(|(number, _)| number.chars().count())
        .max()
        .unwrap_or_default()
        + COLUMN_PADDING;

    Ok(rows
        .into_iter()
        .map(|(number, title)| format!("{:<width$}{}\n", number, title, width = width))
        .collect())
}
