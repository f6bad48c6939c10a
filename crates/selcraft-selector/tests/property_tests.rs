//! Property tests for ordering, uniqueness and rendering.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use selcraft_selector::{
    Combinator, CompoundSelector, Fragment, FragmentKind, SelectorBuilder, SelectorError,
};
use strum::IntoEnumIterator;

/// A sequence of fragments with arbitrary kinds and short payloads.
#[derive(Debug, Clone)]
struct Plan(Vec<Fragment>);

impl Arbitrary for Plan {
    fn arbitrary(g: &mut Gen) -> Self {
        let kinds: Vec<FragmentKind> = FragmentKind::iter().collect();
        let len = usize::arbitrary(g) % 12;
        let fragments = (0..len)
            .map(|i| {
                let kind = *g.choose(&kinds).unwrap_or(&FragmentKind::Class);
                Fragment::new(kind, format!("f{i}"))
            })
            .collect();
        Self(fragments)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let fragments = self.0.clone();
        Box::new((0..fragments.len()).rev().map(move |len| Self(fragments[..len].to_vec())))
    }
}

/// What appending `kind` after `history` should do, computed independently
/// of the builder.
fn expected(history: &[FragmentKind], kind: FragmentKind) -> Result<(), SelectorError> {
    if kind.is_unique() && history.contains(&kind) {
        return Err(SelectorError::DuplicateFragment { kind });
    }
    match history.iter().copied().max_by_key(|k| k.rank()) {
        Some(after) if kind.rank() < after.rank() => {
            Err(SelectorError::OrderViolation { kind, after })
        }
        _ => Ok(()),
    }
}

fn empty() -> CompoundSelector {
    CompoundSelector::try_from(Vec::new()).unwrap()
}

#[quickcheck]
fn prop_append_matches_model(plan: Plan) -> bool {
    let mut selector = empty();
    let mut history = Vec::new();

    for fragment in plan.0 {
        let kind = fragment.kind;
        let before = selector.clone();
        match (selector.append(fragment), expected(&history, kind)) {
            (Ok(next), Ok(())) => {
                history.push(kind);
                selector = next;
            }
            (Err(actual), Err(model)) => {
                if actual != model || selector != before {
                    return false;
                }
            }
            _ => return false,
        }
    }

    selector.kinds().eq(history)
}

#[quickcheck]
fn prop_valid_selector_renders_fragments_in_order(plan: Plan) -> bool {
    // Keep only a valid sequence: sort by rank, drop repeated unique kinds.
    let mut fragments = plan.0;
    fragments.sort_by_key(|f| f.kind.rank());
    let mut seen = Vec::new();
    fragments.retain(|f| {
        if f.kind.is_unique() && seen.contains(&f.kind) {
            return false;
        }
        seen.push(f.kind);
        true
    });

    let expected: String = fragments.iter().map(ToString::to_string).collect();
    match CompoundSelector::try_from(fragments) {
        Ok(selector) => selector.stringify() == expected,
        Err(_) => false,
    }
}

#[quickcheck]
fn prop_failed_append_keeps_receiver(plan: Plan, extra: u8) -> bool {
    let Ok(selector) = CompoundSelector::try_from(plan.0) else {
        return true;
    };
    let text = selector.stringify();
    let kinds: Vec<FragmentKind> = FragmentKind::iter().collect();
    let kind = kinds[usize::from(extra) % kinds.len()];

    let _ = selector.append(Fragment::new(kind, "extra"));
    selector.stringify() == text
}

#[quickcheck]
fn prop_combined_text_joins_sides(left: Plan, right: Plan) -> bool {
    let (Ok(left), Ok(right)) = (
        CompoundSelector::try_from(left.0),
        CompoundSelector::try_from(right.0),
    ) else {
        return true;
    };
    Combinator::iter().all(|combinator| {
        let combined = SelectorBuilder::combine(left.clone(), combinator, right.clone());
        combined.stringify()
            == format!("{} {} {}", left.as_str(), combinator.symbol(), right.as_str())
    })
}
