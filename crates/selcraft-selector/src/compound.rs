//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."

use std::fmt;

use selcraft_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};

/// A compound selector built one fragment at a time.
///
/// Every append validates the new fragment against the full fragment history
/// and returns a new value; the receiver is never modified, so one selector
/// can serve as the shared prefix of several continuations:
///
/// ```
/// use selcraft_selector::SelectorBuilder;
///
/// let base = SelectorBuilder::element("button");
/// let primary = base.class("primary")?;
/// let danger = base.class("danger")?;
///
/// assert_eq!(base.as_str(), "button");
/// assert_eq!(primary.as_str(), "button.primary");
/// assert_eq!(danger.as_str(), "button.danger");
/// # Ok::<(), selcraft_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Fragment>", into = "Vec<Fragment>")]
pub struct CompoundSelector {
    /// Fragments in append order.
    fragments: Vec<Fragment>,
    /// Rendered text, extended on every append.
    text: String,
}

impl CompoundSelector {
    /// A compound selector holding exactly one fragment. A single fragment
    /// cannot violate ordering or uniqueness.
    pub(crate) fn single(fragment: Fragment) -> Self {
        warn_if_suspicious(&fragment);
        let text = fragment.to_string();
        Self {
            fragments: vec![fragment],
            text,
        }
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateFragment`] if an element is already present.
    pub fn element(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Fragment::new(FragmentKind::Element, value))
    }

    /// Append an id selector; `main` becomes `#main`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateFragment`] if an id is already present, or
    /// [`SelectorError::OrderViolation`] if a class, attribute or pseudo fragment precedes it.
    pub fn id(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Fragment::new(FragmentKind::Id, value))
    }

    /// Append a class selector; `container` becomes `.container`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OrderViolation`] if an attribute or pseudo fragment precedes it.
    pub fn class(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Fragment::new(FragmentKind::Class, value))
    }

    /// Append an attribute selector; `href$=".png"` becomes `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OrderViolation`] if a pseudo fragment precedes it.
    pub fn attr(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Fragment::new(FragmentKind::Attribute, value))
    }

    /// Append a pseudo-class; `focus` becomes `:focus`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OrderViolation`] if a pseudo-element precedes it.
    pub fn pseudo_class(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Fragment::new(FragmentKind::PseudoClass, value))
    }

    /// Append a pseudo-element; `before` becomes `::before`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateFragment`] if a pseudo-element is already present.
    pub fn pseudo_element(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(Fragment::new(FragmentKind::PseudoElement, value))
    }

    /// Append an arbitrary fragment.
    ///
    /// Uniqueness is checked before ordering, so appending a second element
    /// after a class reports [`SelectorError::DuplicateFragment`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateFragment`] when an element, id or
    /// pseudo-element is repeated, and [`SelectorError::OrderViolation`] when
    /// the fragment ranks below a fragment already present.
    pub fn append(&self, fragment: Fragment) -> Result<Self, SelectorError> {
        let kind = fragment.kind;

        if kind.is_unique() && self.kinds().any(|seen| seen == kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }

        if let Some(after) = self
            .kinds()
            .max_by_key(|seen| seen.rank())
            .filter(|after| kind.rank() < after.rank())
        {
            return Err(SelectorError::OrderViolation { kind, after });
        }

        warn_if_suspicious(&fragment);

        let mut next = self.clone();
        next.text.push_str(&fragment.to_string());
        next.fragments.push(fragment);
        Ok(next)
    }

    /// Fragments in the order they were appended.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Kinds of the fragments, oldest first.
    pub fn kinds(&self) -> impl Iterator<Item = FragmentKind> + '_ {
        self.fragments.iter().map(|fragment| fragment.kind)
    }

    /// Whether the selector holds no fragments. Only a deserialized empty
    /// fragment list produces one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The rendered selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The rendered selector text as an owned string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Replays the fragments through [`CompoundSelector::append`], so a
/// deserialized selector satisfies the same rules as a built one.
impl TryFrom<Vec<Fragment>> for CompoundSelector {
    type Error = SelectorError;

    fn try_from(fragments: Vec<Fragment>) -> Result<Self, Self::Error> {
        let empty = Self {
            fragments: Vec::with_capacity(fragments.len()),
            text: String::new(),
        };
        fragments
            .into_iter()
            .try_fold(empty, |selector, fragment| selector.append(fragment))
    }
}

impl From<CompoundSelector> for Vec<Fragment> {
    fn from(selector: CompoundSelector) -> Self {
        selector.fragments
    }
}

/// Payloads are embedded verbatim. Empty payloads and stray whitespace are
/// accepted but almost always a mistake, so report them.
fn warn_if_suspicious(fragment: &Fragment) {
    let kind = fragment.kind;
    if fragment.text.is_empty() {
        warn_once("Selector", &format!("empty {kind} fragment"));
    } else if !kind.allows_whitespace() && fragment.text.chars().any(char::is_whitespace) {
        warn_once(
            "Selector",
            &format!("{kind} fragment '{}' contains whitespace", fragment.text),
        );
    }
}
