//! Read-only queries over a parsed `scraper` tree, walked node by node.
//!
//! Searches are pre-order and include the starting node. Node identity is
//! the `ego_tree::NodeId` assigned at parse time.

use ego_tree::NodeRef;
use scraper::{CaseSensitivity, Html, Node};

pub type DomNode<'a> = NodeRef<'a, Node>;

/// An `<a>` element reduced to its target and visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// Root of a parsed document.
pub fn root(document: &Html) -> DomNode<'_> {
    document.tree.root()
}

/// Flattens the text beneath `node` into one line.
///
/// Text nodes are trimmed and their inner ASCII whitespace runs collapsed, so
/// non-breaking spaces inside the text survive. The non-empty fragments of a
/// subtree are joined with single spaces.
pub fn extract_text(node: DomNode<'_>) -> String {
    if let Some(text) = node.value().as_text() {
        return text.trim().split_ascii_whitespace().collect::<Vec<_>>().join(" ");
    }

    node.children()
        .map(extract_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pre-order search for the first node (including `node` itself) that
/// satisfies `predicate`.
pub fn find_first<'a, P>(node: DomNode<'a>, predicate: P) -> Option<DomNode<'a>>
where
    P: Fn(DomNode<'a>) -> bool,
{
    node.descendants().find(|candidate| predicate(*candidate))
}

pub fn is_tag(node: DomNode<'_>, name: &str) -> bool {
    node.value()
        .as_element()
        .map_or(false, |element| element.name() == name)
}

/// True if the node's `class` attribute lists `token` as one of its
/// whitespace-separated entries.
pub fn has_class(node: DomNode<'_>, token: &str) -> bool {
    node.value()
        .as_element()
        .map_or(false, |element| element.has_class(token, CaseSensitivity::CaseSensitive))
}

/// True if any strict ancestor of `node` carries the class `token`.
pub fn is_under_class(node: DomNode<'_>, token: &str) -> bool {
    node.ancestors().any(|ancestor| has_class(ancestor, token))
}

pub fn extract_first_anchor(node: DomNode<'_>) -> Option<Anchor> {
    find_first(node, |candidate| is_tag(candidate, "a")).map(|anchor| Anchor {
        href: anchor
            .value()
            .as_element()
            .and_then(|element| element.attr("href"))
            .unwrap_or_default()
            .to_string(),
        text: extract_text(anchor),
    })
}
