//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//!
//! "A complex selector is a chain of one or more compound selectors separated
//! by combinators."

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combinator::Combinator;
use crate::compound::CompoundSelector;
use crate::specificity::Specificity;

/// A finished selector: either a single compound selector or two selectors
/// joined by a combinator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// A single compound selector, e.g. `a#main.container`.
    Compound(CompoundSelector),
    /// Two selectors joined by a combinator, e.g. `div#main + table#data`.
    Combined(CombinedSelector),
}

/// Two selectors of any shape joined by a combinator.
///
/// Carries no fragment history of its own; the sides were validated when
/// they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinedSelector {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`.
    #[must_use]
    pub fn new(left: Selector, combinator: Combinator, right: Selector) -> Self {
        Self {
            left: Box::new(left),
            combinator,
            right: Box::new(right),
        }
    }

    /// The selector before the combinator.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining the two sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The selector after the combinator.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }
}

impl Selector {
    /// Render the selector to text.
    ///
    /// Combined selectors render as `left + " " + symbol + " " + right`,
    /// innermost combinations first. The descendant combinator's symbol is a
    /// space, so it is padded to three spaces.
    #[must_use]
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Compound(compound) => out.push_str(compound.as_str()),
            Self::Combined(combined) => {
                combined.left.write_to(out);
                out.push(' ');
                out.push_str(combined.combinator.symbol());
                out.push(' ');
                combined.right.write_to(out);
            }
        }
    }

    /// Specificity of the whole selector, summed over every compound selector
    /// in it.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Combined(combined) => {
                combined.left.specificity() + combined.right.specificity()
            }
        }
    }

    /// The compound selector, if this is not a combination.
    #[must_use]
    pub const fn as_compound(&self) -> Option<&CompoundSelector> {
        match self {
            Self::Compound(compound) => Some(compound),
            Self::Combined(_) => None,
        }
    }

    /// The combination, if this is one.
    #[must_use]
    pub const fn as_combined(&self) -> Option<&CombinedSelector> {
        match self {
            Self::Compound(_) => None,
            Self::Combined(combined) => Some(combined),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}
