//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::compound::CompoundSelector;
use crate::fragment::FragmentKind;

/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

impl CompoundSelector {
    /// Specificity of this compound selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();

        for kind in self.kinds() {
            match kind {
                // "count the number of ID selectors in the selector (= A)"
                FragmentKind::Id => spec.0 += 1,

                // "count the number of class selectors, attributes selectors,
                // and pseudo-classes in the selector (= B)"
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    spec.1 += 1;
                }

                // "count the number of type selectors and pseudo-elements
                // in the selector (= C)"
                FragmentKind::Element | FragmentKind::PseudoElement => spec.2 += 1,
            }
        }

        spec
    }
}
