//! Tree queries used by the extraction heuristics.
//!
//! The heuristics only need "walk the subtree under N in document order and
//! keep what matches P", so they are written against [`DomNode`] rather than a
//! particular HTML library. `scraper` provides the concrete implementation.

use scraper::{ElementRef, Node};

/// Minimal element view the heuristics run against.
pub trait DomNode: Copy {
    fn tag_name(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
    /// All text in the subtree, concatenated as-is (line breaks preserved).
    fn full_text(&self) -> String;
    /// Text only when the element wraps a single text node, possibly through
    /// single-child elements. Mixed content yields `None`.
    fn sole_text(&self) -> Option<String>;
    fn parent_element(&self) -> Option<Self>;
    /// Descendant elements in document order, excluding `self`.
    fn descendant_elements(&self) -> Vec<Self>;
    fn same_node(&self, other: &Self) -> bool;
}

impl<'a> DomNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn full_text(&self) -> String {
        self.text().collect()
    }

    fn sole_text(&self) -> Option<String> {
        let mut children = self.children();
        let only = children.next()?;
        if children.next().is_some() {
            return None;
        }
        match only.value() {
            Node::Text(text) => Some(String::from(&**text)),
            Node::Element(_) => ElementRef::wrap(only)?.sole_text(),
            _ => None,
        }
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn descendant_elements(&self) -> Vec<Self> {
        self.descendants().skip(1).filter_map(ElementRef::wrap).collect()
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// First descendant of `scope` (document order) matching `pred`.
pub fn find_first<N, P>(scope: N, pred: P) -> Option<N>
where
    N: DomNode,
    P: Fn(&N) -> bool,
{
    scope.descendant_elements().into_iter().find(|n| pred(n))
}

/// Every descendant of `scope` matching `pred`, in document order.
pub fn find_all<N, P>(scope: N, pred: P) -> Vec<N>
where
    N: DomNode,
    P: Fn(&N) -> bool,
{
    scope
        .descendant_elements()
        .into_iter()
        .filter(|n| pred(n))
        .collect()
}

/// First element inside `scope` that follows `anchor`'s subtree in document
/// order and matches `pred`. Never leaves `scope`.
pub fn find_after<N, P>(scope: N, anchor: N, pred: P) -> Option<N>
where
    N: DomNode,
    P: Fn(&N) -> bool,
{
    let all = scope.descendant_elements();
    let start = all.iter().position(|n| n.same_node(&anchor))?;
    all.into_iter()
        .skip(start + 1)
        .filter(|n| !is_within(*n, anchor))
        .find(|n| pred(n))
}

/// True when `node` is a strict descendant of `ancestor`.
pub fn is_within<N: DomNode>(node: N, ancestor: N) -> bool {
    let mut current = node.parent_element();
    while let Some(p) = current {
        if p.same_node(&ancestor) {
            return true;
        }
        current = p.parent_element();
    }
    false
}

// ── Predicate helpers ──

pub fn is_tag<N: DomNode>(node: &N, tag: &str) -> bool {
    node.tag_name().eq_ignore_ascii_case(tag)
}

/// Whole `class` attribute equals `class_attr` exactly.
pub fn class_is<N: DomNode>(node: &N, class_attr: &str) -> bool {
    node.attribute("class") == Some(class_attr)
}

/// One of the whitespace-separated classes equals `class`.
pub fn has_class<N: DomNode>(node: &N, class: &str) -> bool {
    node.attribute("class")
        .is_some_and(|c| c.split_whitespace().any(|t| t == class))
}

/// The raw `class` attribute contains `needle` anywhere.
pub fn class_contains<N: DomNode>(node: &N, needle: &str) -> bool {
    node.attribute("class").is_some_and(|c| c.contains(needle))
}
