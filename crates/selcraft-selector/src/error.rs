//! Errors raised while building a selector.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Error returned when an append or combine would produce an invalid selector.
///
/// A failed append never touches the selector it was called on; the caller
/// keeps the previous value and can continue from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element fragment was appended to a compound
    /// selector that already has one of the same kind.
    ///
    /// Example: `div` followed by `span`, or `#a` followed by `#b`
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector"
    )]
    DuplicateFragment {
        /// The kind that was appended a second time.
        kind: FragmentKind,
    },

    /// A fragment was appended after a fragment of strictly higher rank.
    ///
    /// Example: `.container` followed by `#main`
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The kind that was appended out of order.
        kind: FragmentKind,
        /// The highest-ranked kind already present in the selector.
        after: FragmentKind,
    },

    /// The combinator symbol is not one of `" "`, `">"`, `"+"` or `"~"`.
    #[error("invalid combinator {0:?}: expected one of \" \", \">\", \"+\", \"~\"")]
    InvalidCombinator(String),
}
