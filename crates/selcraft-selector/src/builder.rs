//! Entry point for building selectors.

use crate::combinator::Combinator;
use crate::compound::CompoundSelector;
use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};
use crate::selector::{CombinedSelector, Selector};

/// Starts new selectors and joins existing ones.
///
/// Each constructor returns a one-fragment [`CompoundSelector`]; extend it
/// with the methods of the same name on [`CompoundSelector`].
///
/// ```
/// use selcraft_selector::{Combinator, SelectorBuilder};
///
/// let link = SelectorBuilder::element("a")
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(link.as_str(), r#"a[href$=".png"]:focus"#);
///
/// let pair = SelectorBuilder::combine(
///     SelectorBuilder::element("div").id("main")?,
///     Combinator::NextSibling,
///     SelectorBuilder::element("table").id("data")?,
/// );
/// assert_eq!(pair.stringify(), "div#main + table#data");
/// # Ok::<(), selcraft_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Start a selector with a type selector, e.g. `div`.
    #[must_use]
    pub fn element(value: impl Into<String>) -> CompoundSelector {
        Self::start(FragmentKind::Element, value)
    }

    /// Start a selector with an id selector, e.g. `#main`.
    #[must_use]
    pub fn id(value: impl Into<String>) -> CompoundSelector {
        Self::start(FragmentKind::Id, value)
    }

    /// Start a selector with a class selector, e.g. `.container`.
    #[must_use]
    pub fn class(value: impl Into<String>) -> CompoundSelector {
        Self::start(FragmentKind::Class, value)
    }

    /// Start a selector with an attribute selector, e.g. `[href]`.
    #[must_use]
    pub fn attr(value: impl Into<String>) -> CompoundSelector {
        Self::start(FragmentKind::Attribute, value)
    }

    /// Start a selector with a pseudo-class, e.g. `:hover`.
    #[must_use]
    pub fn pseudo_class(value: impl Into<String>) -> CompoundSelector {
        Self::start(FragmentKind::PseudoClass, value)
    }

    /// Start a selector with a pseudo-element, e.g. `::before`.
    #[must_use]
    pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
        Self::start(FragmentKind::PseudoElement, value)
    }

    /// Start a selector with an arbitrary fragment.
    #[must_use]
    pub fn fragment(fragment: Fragment) -> CompoundSelector {
        CompoundSelector::single(fragment)
    }

    fn start(kind: FragmentKind, value: impl Into<String>) -> CompoundSelector {
        Self::fragment(Fragment::new(kind, value))
    }

    /// Join two selectors of any shape. No fragment validation happens here.
    #[must_use]
    pub fn combine(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Selector {
        CombinedSelector::new(left.into(), combinator, right.into()).into()
    }

    /// Join two selectors with a combinator given as text (`" "`, `">"`,
    /// `"+"` or `"~"`).
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidCombinator`] for any other symbol.
    pub fn combine_str(
        left: impl Into<Selector>,
        combinator: &str,
        right: impl Into<Selector>,
    ) -> Result<Selector, SelectorError> {
        Ok(Self::combine(left, combinator.parse()?, right))
    }
}
