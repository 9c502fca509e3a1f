//! Turns an AP News article page into a title and a Markdown body.

use scraper::Html;
use tracing::debug;
use voca_core::{ArticleContent, Error, Result};

use crate::dom::{self, DomNode};

pub const HEADLINE_CLASS: &str = "Page-headline";
pub const CONTENT_BODY_CLASS: &str = "RichTextBody";
pub const INFOBOX_CLASS: &str = "Infobox";
pub const INFOBOX_ITEMS_CLASS: &str = "Infobox-items";

/// Elements of the article body that produce Markdown. Anything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockTag {
    List,
    ListItem,
    Paragraph,
    Heading(usize),
    InfoBox,
    InfoBoxItems,
}

impl BlockTag {
    fn classify(node: DomNode<'_>) -> Option<Self> {
        let element = node.value().as_element()?;
        match element.name() {
            "ul" => Some(Self::List),
            "li" => Some(Self::ListItem),
            "p" => Some(Self::Paragraph),
            "h2" => Some(Self::Heading(2)),
            "h3" => Some(Self::Heading(3)),
            "h4" => Some(Self::Heading(4)),
            "h5" => Some(Self::Heading(5)),
            "h6" => Some(Self::Heading(6)),
            "div" if dom::has_class(node, INFOBOX_CLASS) => Some(Self::InfoBox),
            "div" if dom::has_class(node, INFOBOX_ITEMS_CLASS) => Some(Self::InfoBoxItems),
            _ => None,
        }
    }
}

/// Extracts the headline and body of an article page.
pub fn extract_article(document: &Html) -> Result<ArticleContent> {
    let root = dom::root(document);

    let headline = dom::find_first(root, |node| dom::has_class(node, HEADLINE_CLASS))
        .ok_or(Error::StructuralNotFound("header"))?;
    let content_body = dom::find_first(root, |node| dom::has_class(node, CONTENT_BODY_CLASS))
        .ok_or(Error::StructuralNotFound("content"))?;

    let title = dom::extract_text(headline);
    let mut body = String::new();
    render_blocks(content_body, &mut body);

    if title.is_empty() || body.is_empty() {
        return Err(Error::EmptyContent);
    }

    debug!("extracted article '{}' ({} bytes of markdown)", title, body.len());
    Ok(ArticleContent { title, body })
}

fn push_block(out: &mut String, block: &str) {
    out.push_str(block);
    out.push_str("\n\n");
}

fn render_blocks(node: DomNode<'_>, out: &mut String) {
    for child in node.children() {
        if !child.value().is_element() {
            continue;
        }
        let text = dom::extract_text(child);
        if text.is_empty() {
            continue;
        }

        match BlockTag::classify(child) {
            Some(BlockTag::List) | Some(BlockTag::InfoBox) => render_blocks(child, out),
            Some(BlockTag::ListItem) => push_block(out, &format!("- {}", text)),
            // Infobox fields read as small headings.
            Some(BlockTag::Paragraph) if dom::is_under_class(child, INFOBOX_CLASS) => {
                push_block(out, &format!("### {}", text))
            }
            Some(BlockTag::Paragraph) => push_block(out, &text),
            Some(BlockTag::Heading(level)) => {
                push_block(out, &format!("{} {}", "#".repeat(level), text))
            }
            Some(BlockTag::InfoBoxItems) => {
                if child.has_children() {
                    push_block(out, "## Information");
                    render_blocks(child, out);
                }
            }
            None => {}
        }
    }
}
