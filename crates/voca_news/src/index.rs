//! Builds the article catalogue from the AP News homepage.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::Html;
use tracing::debug;
use voca_core::{Article, RelatedArticle};

use crate::dom::{self, DomNode};

/// The first of these holds the story listing; everything else on the page is ignored.
pub const LISTING_CONTAINER_CLASS: &str = "TwoColumnContainer7030-container";
pub const ITEMS_CLASS: &str = "PageListStandardE-items";
pub const SECONDARY_ITEMS_CLASS: &str = "PageListStandardE-items-secondary";
pub const HEADLINE_TAG: &str = "bsp-custom-headline";

/// Extracts the homepage catalogue in document order.
///
/// Item blocks come first, each contributing its leading anchored headline
/// plus the headlines of its secondary blocks as related articles. Headlines
/// standing outside any item block follow as articles of their own. A page
/// without the listing container yields an empty catalogue.
pub fn extract_articles(document: &Html) -> Vec<Article> {
    let root = dom::root(document);
    let Some(container) = dom::find_first(root, |node| dom::has_class(node, LISTING_CONTAINER_CLASS))
    else {
        debug!("listing container {} not found", LISTING_CONTAINER_CLASS);
        return Vec::new();
    };

    let mut articles = Vec::new();
    let mut visited = HashSet::new();
    collect_item_blocks(container, &mut visited, &mut articles);
    let from_blocks = articles.len();

    articles.extend(standalone_articles(container));
    debug!(
        "extracted {} articles ({} from item blocks, {} standalone)",
        articles.len(),
        from_blocks,
        articles.len() - from_blocks
    );

    articles
}

fn is_headline(node: DomNode<'_>) -> bool {
    dom::is_tag(node, HEADLINE_TAG)
}

fn collect_item_blocks(
    node: DomNode<'_>,
    visited: &mut HashSet<NodeId>,
    articles: &mut Vec<Article>,
) {
    if dom::has_class(node, ITEMS_CLASS) {
        if visited.insert(node.id()) {
            if let Some(article) = item_block_article(node) {
                articles.push(article);
            }
        }
        return;
    }

    for child in node.children() {
        collect_item_blocks(child, visited, articles);
    }
}

fn item_block_article(block: DomNode<'_>) -> Option<Article> {
    let primary = block
        .descendants()
        .filter(|node| is_headline(*node))
        .find_map(dom::extract_first_anchor)?;

    let related = block
        .descendants()
        .filter(|node| dom::has_class(*node, SECONDARY_ITEMS_CLASS))
        .flat_map(anchored_headlines)
        .collect();

    Some(Article::new(primary.text, primary.href).with_related(related))
}

fn anchored_headlines(node: DomNode<'_>) -> Vec<RelatedArticle> {
    node.descendants()
        .filter(|node| is_headline(*node))
        .filter_map(dom::extract_first_anchor)
        .map(|anchor| RelatedArticle::new(anchor.text, anchor.href))
        .collect()
}

fn standalone_articles(container: DomNode<'_>) -> Vec<Article> {
    let mut seen = HashSet::new();
    container
        .descendants()
        .filter(|node| is_headline(*node) && !dom::is_under_class(*node, ITEMS_CLASS))
        .filter(|node| seen.insert(node.id()))
        .filter_map(dom::extract_first_anchor)
        .map(|anchor| Article::new(anchor.text, anchor.href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(inner: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><main><div class="TwoColumnContainer7030-container">{}</div></main></body></html>"#,
            inner
        ))
    }

    #[test]
    fn test_missing_container_yields_empty() {
        let document = Html::parse_document(
            r#"<div class="PageListStandardE-items"><bsp-custom-headline><a href="/x">X</a></bsp-custom-headline></div>"#,
        );
        assert!(extract_articles(&document).is_empty());
    }

    #[test]
    fn test_item_block_with_secondary() {
        let document = listing(
            r#"<div class="PageListStandardE-items">
                 <bsp-custom-headline><a href="/a1">Title A</a></bsp-custom-headline>
                 <div class="PageListStandardE-items-secondary">
                   <bsp-custom-headline><a href="/a2">Title B</a></bsp-custom-headline>
                 </div>
               </div>"#,
        );
        assert_eq!(
            extract_articles(&document),
            vec![Article::new("Title A", "/a1").with_related(vec![RelatedArticle::new("Title B", "/a2")])]
        );
    }

    #[test]
    fn test_related_concatenated_across_secondary_blocks() {
        let document = listing(
            r#"<div class="PageListStandardE-items">
                 <bsp-custom-headline><a href="/p">Primary</a></bsp-custom-headline>
                 <div class="PageListStandardE-items-secondary">
                   <bsp-custom-headline><a href="/r1">R1</a></bsp-custom-headline>
                   <bsp-custom-headline><span>no link</span></bsp-custom-headline>
                   <bsp-custom-headline><a href="/r2">R2</a></bsp-custom-headline>
                 </div>
                 <div class="PageListStandardE-items-secondary">
                   <bsp-custom-headline><a href="/r3">R3</a></bsp-custom-headline>
                 </div>
               </div>"#,
        );
        let articles = extract_articles(&document);
        assert_eq!(articles.len(), 1);
        let urls: Vec<_> = articles[0].related_articles.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["/r1", "/r2", "/r3"]);
    }

    #[test]
    fn test_primary_is_first_anchored_headline() {
        let document = listing(
            r#"<div class="PageListStandardE-items">
                 <bsp-custom-headline><span>Video</span></bsp-custom-headline>
                 <bsp-custom-headline><a href="/real">Real story</a></bsp-custom-headline>
               </div>"#,
        );
        let articles = extract_articles(&document);
        assert_eq!(articles, vec![Article::new("Real story", "/real")]);
    }

    #[test]
    fn test_block_without_anchor_is_skipped() {
        let document = listing(
            r#"<div class="PageListStandardE-items">
                 <bsp-custom-headline><span>No link here</span></bsp-custom-headline>
               </div>
               <div class="PageListStandardE-items">
                 <bsp-custom-headline><a href="/kept">Kept</a></bsp-custom-headline>
               </div>"#,
        );
        assert_eq!(extract_articles(&document), vec![Article::new("Kept", "/kept")]);
    }

    #[test]
    fn test_identical_blocks_are_distinct_nodes() {
        let block = r#"<div class="PageListStandardE-items">
                         <bsp-custom-headline><a href="/same">Same</a></bsp-custom-headline>
                       </div>"#;
        let document = listing(&format!("{}{}", block, block));
        assert_eq!(extract_articles(&document).len(), 2);
    }

    #[test]
    fn test_standalone_headlines_follow_blocks() {
        let document = listing(
            r#"<bsp-custom-headline><a href="/s1">Standalone 1</a></bsp-custom-headline>
               <div class="PageListStandardE-items">
                 <bsp-custom-headline><a href="/b1">Block 1</a></bsp-custom-headline>
               </div>
               <section>
                 <bsp-custom-headline><a href="/s2">Standalone 2</a></bsp-custom-headline>
                 <bsp-custom-headline><span>skip</span></bsp-custom-headline>
               </section>
               <div class="PageListStandardE-items">
                 <bsp-custom-headline><a href="/b2">Block 2</a></bsp-custom-headline>
               </div>"#,
        );
        let urls: Vec<_> = extract_articles(&document).into_iter().map(|a| a.url).collect();
        assert_eq!(urls, vec!["/b1", "/b2", "/s1", "/s2"]);
    }

    #[test]
    fn test_only_first_container_is_scanned() {
        let document = Html::parse_document(
            r#"<div class="TwoColumnContainer7030-container">
                 <bsp-custom-headline><a href="/in">In</a></bsp-custom-headline>
               </div>
               <div class="TwoColumnContainer7030-container">
                 <bsp-custom-headline><a href="/out">Out</a></bsp-custom-headline>
               </div>"#,
        );
        assert_eq!(extract_articles(&document), vec![Article::new("In", "/in")]);
    }

    #[test]
    fn test_nested_items_block_is_not_revisited() {
        let document = listing(
            r#"<div class="PageListStandardE-items">
                 <bsp-custom-headline><a href="/outer">Outer</a></bsp-custom-headline>
                 <div class="PageListStandardE-items">
                   <bsp-custom-headline><a href="/inner">Inner</a></bsp-custom-headline>
                 </div>
               </div>"#,
        );
        let articles = extract_articles(&document);
        assert_eq!(articles, vec![Article::new("Outer", "/outer")]);
        assert!(articles.iter().all(|article| article.url != "/inner"));
    }
}
