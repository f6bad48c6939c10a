//! Integration tests for combining selectors.

use selcraft_selector::{Combinator, Selector, SelectorBuilder, SelectorError};
use strum::IntoEnumIterator;

fn compound(element: &str, id: &str) -> Selector {
    SelectorBuilder::element(element).id(id).unwrap().into()
}

#[test]
fn test_next_sibling() {
    let selector = SelectorBuilder::combine(
        compound("div", "main"),
        Combinator::NextSibling,
        compound("table", "data"),
    );
    assert_eq!(selector.stringify(), "div#main + table#data");
}

#[test]
fn test_child_and_subsequent_sibling() {
    let child = SelectorBuilder::combine(
        SelectorBuilder::element("ul"),
        Combinator::Child,
        SelectorBuilder::element("li"),
    );
    assert_eq!(child.stringify(), "ul > li");

    let sibling = SelectorBuilder::combine(
        SelectorBuilder::element("h1"),
        Combinator::SubsequentSibling,
        SelectorBuilder::element("p"),
    );
    assert_eq!(sibling.stringify(), "h1 ~ p");
}

#[test]
fn test_descendant_is_padded_like_other_symbols() {
    let selector = SelectorBuilder::combine(
        SelectorBuilder::element("nav"),
        Combinator::Descendant,
        SelectorBuilder::element("a"),
    );
    assert_eq!(selector.stringify(), "nav   a");
}

#[test]
fn test_nested_combine() {
    let inner = SelectorBuilder::combine(
        SelectorBuilder::element("ul"),
        Combinator::Child,
        SelectorBuilder::element("li"),
    );
    let outer = SelectorBuilder::combine(
        inner.clone(),
        Combinator::NextSibling,
        SelectorBuilder::class("footer"),
    );
    assert_eq!(outer.stringify(), "ul > li + .footer");

    let right_nested = SelectorBuilder::combine(
        SelectorBuilder::id("app"),
        Combinator::SubsequentSibling,
        inner,
    );
    assert_eq!(right_nested.stringify(), "#app ~ ul > li");
}

#[test]
fn test_combine_does_not_validate_fragments() {
    // Both sides have an element and an id; that is fine across a combinator.
    let selector = SelectorBuilder::combine(
        compound("div", "a"),
        Combinator::Child,
        compound("div", "a"),
    );
    assert_eq!(selector.stringify(), "div#a > div#a");
}

#[test]
fn test_combined_accessors() {
    let selector = SelectorBuilder::combine(
        SelectorBuilder::element("ul"),
        Combinator::Child,
        SelectorBuilder::element("li"),
    );
    let combined = selector.as_combined().unwrap();
    assert_eq!(combined.combinator(), Combinator::Child);
    assert_eq!(combined.left().stringify(), "ul");
    assert_eq!(combined.right().stringify(), "li");
    assert!(selector.as_compound().is_none());
}

#[test]
fn test_combine_str() {
    let selector = SelectorBuilder::combine_str(
        SelectorBuilder::element("div"),
        "+",
        SelectorBuilder::element("p"),
    )
    .unwrap();
    assert_eq!(selector.to_string(), "div + p");
}

#[test]
fn test_combine_str_rejects_unknown_symbol() {
    let err = SelectorBuilder::combine_str(
        SelectorBuilder::element("div"),
        "||",
        SelectorBuilder::element("p"),
    )
    .unwrap_err();
    assert_eq!(err, SelectorError::InvalidCombinator("||".to_string()));
}

#[test]
fn test_parse_combinator_symbols() {
    assert_eq!(" ".parse::<Combinator>().unwrap(), Combinator::Descendant);
    assert_eq!("\t".parse::<Combinator>().unwrap(), Combinator::Descendant);
    assert_eq!(">".parse::<Combinator>().unwrap(), Combinator::Child);
    assert_eq!(" > ".parse::<Combinator>().unwrap(), Combinator::Child);
    assert_eq!("+".parse::<Combinator>().unwrap(), Combinator::NextSibling);
    assert_eq!("~".parse::<Combinator>().unwrap(), Combinator::SubsequentSibling);
    assert!("".parse::<Combinator>().is_err());
    assert!(">>".parse::<Combinator>().is_err());
}

#[test]
fn test_symbol_parses_back() {
    for combinator in Combinator::iter() {
        assert_eq!(combinator.symbol().parse::<Combinator>().unwrap(), combinator);
    }
}
