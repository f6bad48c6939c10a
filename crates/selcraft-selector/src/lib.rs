//! Builder for CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Ordering checks: element, id, class, attribute, pseudo-class, pseudo-element
//!   - Uniqueness checks: one element, one id and one pseudo-element at most
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! Every builder value is immutable. Appending returns a new value, so a
//! partial selector can be reused as the prefix of several others.
//!
//! # Not Implemented
//!
//! - Parsing selector text back into fragments
//! - Matching selectors against a document tree
//! - Validating or normalizing fragment payloads (they are embedded verbatim)

/// Entry point for building selectors.
pub mod builder;
/// Combinators per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Compound selectors per [§ 4.2](https://www.w3.org/TR/selectors-4/#compound).
pub mod compound;
/// Builder errors.
pub mod error;
/// Fragment kinds and fragments.
pub mod fragment;
/// Complex selectors per [§ 4.3](https://www.w3.org/TR/selectors-4/#complex).
pub mod selector;
/// Specificity per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use compound::CompoundSelector;
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind};
pub use selector::{CombinedSelector, Selector};
pub use specificity::Specificity;
