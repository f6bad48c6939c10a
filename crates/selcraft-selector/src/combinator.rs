//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error::SelectorError;

/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Serialized as its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately), where A and B share the
    /// same parent."
    SubsequentSibling,
}

impl Combinator {
    /// The symbol written between the two selectors.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts `">"`, `"+"` and `"~"` with optional surrounding whitespace. A
/// non-empty run of whitespace is the descendant combinator.
impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            "" if !symbol.is_empty() => Ok(Self::Descendant),
            _ => Err(SelectorError::InvalidCombinator(symbol.to_string())),
        }
    }
}

impl TryFrom<String> for Combinator {
    type Error = SelectorError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        symbol.parse()
    }
}

impl From<Combinator> for &'static str {
    fn from(combinator: Combinator) -> Self {
        combinator.symbol()
    }
}
