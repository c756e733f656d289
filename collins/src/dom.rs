//! Typed queries over a parsed document.
//!
//! The extraction logic in [`crate::types`] only talks to the [`Node`] trait, which is implemented
//! once for [`scraper::ElementRef`].

use scraper::ElementRef;

/// Identifies the descendants of a node to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Elements carrying the given class name.
    Class(&'static str),
    /// Elements with the given tag name.
    Tag(&'static str),
}

/// An element in a parsed document that can be queried for its descendants.
///
/// Matches never include the node being queried, and are always returned in document order.
pub trait Node: Copy {
    /// Returns the first descendant matching `selector`, if any.
    fn find_first(self, selector: Selector) -> Option<Self>;

    /// Returns every descendant matching `selector`.
    fn find_all(self, selector: Selector) -> Vec<Self>;

    /// Returns the concatenated text content of the node.
    fn text(self) -> String;

    /// Returns the raw value of the attribute `name`.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Returns `true` if `self` and `other` refer to the same element.
    fn is_same(self, other: Self) -> bool;
}

impl Selector {
    fn matches(self, element: &scraper::node::Element) -> bool {
        match self {
            Selector::Class(class) => element.classes().any(|name| name == class),
            Selector::Tag(tag) => element.name() == tag,
        }
    }
}

impl<'a> Node for ElementRef<'a> {
    fn find_first(self, selector: Selector) -> Option<ElementRef<'a>> {
        descendants(self).find(|elem| selector.matches(elem.value()))
    }

    fn find_all(self, selector: Selector) -> Vec<ElementRef<'a>> {
        descendants(self)
            .filter(|elem| selector.matches(elem.value()))
            .collect()
    }

    fn text(self) -> String {
        ElementRef::text(&self).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn is_same(self, other: ElementRef<'a>) -> bool {
        std::ptr::eq(self.value(), other.value())
    }
}

/// Returns the element descendants of `elem`, excluding `elem` itself.
fn descendants(elem: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    elem.descendants().skip(1).filter_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    const HTML: &str = r#"<div class="outer">
        <span class="a b">first</span>
        <p class="a">second <span class="b">nested</span></p>
    </div>"#;

    fn outer(html: &Html) -> ElementRef<'_> {
        html.root_element()
            .find_first(Selector::Class("outer"))
            .expect("outer div")
    }

    #[test]
    fn find_first_returns_first_match_in_document_order() {
        let html = Html::parse_fragment(HTML);
        let first = outer(&html).find_first(Selector::Class("b")).unwrap();

        assert_eq!(Node::text(first), "first");
    }

    #[test]
    fn find_all_preserves_document_order() {
        let html = Html::parse_fragment(HTML);
        let texts: Vec<String> = outer(&html)
            .find_all(Selector::Class("b"))
            .into_iter()
            .map(Node::text)
            .collect();

        assert_eq!(texts, ["first", "nested"]);
    }

    #[test]
    fn queries_exclude_the_parent() {
        let html = Html::parse_fragment(HTML);
        let outer = outer(&html);

        assert!(outer.find_first(Selector::Class("outer")).is_none());
        assert_eq!(outer.find_all(Selector::Tag("span")).len(), 2);
    }

    #[test]
    fn text_concatenates_descendant_text() {
        let html = Html::parse_fragment(HTML);
        let p = outer(&html).find_first(Selector::Tag("p")).unwrap();

        assert_eq!(Node::text(p), "second nested");
        assert_eq!(Node::attr(&p, "class"), Some("a"));
    }

    #[test]
    fn is_same_compares_identity() {
        let html = Html::parse_fragment(HTML);
        let outer = outer(&html);
        let a = outer.find_first(Selector::Class("a")).unwrap();
        let b = outer.find_first(Selector::Class("b")).unwrap();
        let p = outer.find_first(Selector::Tag("p")).unwrap();

        assert!(a.is_same(b));
        assert!(!a.is_same(p));
    }
}
