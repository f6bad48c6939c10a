//! selcraft CLI
//!
//! Builds one selector from an ordered list of steps and prints it.
//!
//! ```text
//! selcraft element=div id=main + element=table class=data
//! div#main + table.data
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use selcraft_common::warning::warn_once;
use selcraft_selector::{
    Combinator, CompoundSelector, Fragment, FragmentKind, Selector, SelectorBuilder,
};

/// Build a CSS selector from fragments and combinators.
#[derive(Debug, Parser)]
#[command(name = "selcraft", version, about)]
struct Cli {
    /// Print the selector as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Also print the selector's specificity as (a, b, c). With `--json`,
    /// both are printed as one object.
    #[arg(long)]
    specificity: bool,

    /// Steps, in order. A fragment is `kind=value` with kind one of element,
    /// id, class, attr, pseudo-class, pseudo-element. A combinator is `+`,
    /// `>`, `~` or `descendant`.
    #[arg(required = true)]
    steps: Vec<String>,
}

/// One command-line step.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Fragment(Fragment),
    Combinator(Combinator),
}

const DESCENDANT_PADDING: &str =
    "the descendant combinator renders as three spaces between the selectors";

fn parse_step(raw: &str) -> Result<Step> {
    if raw == "descendant" {
        return Ok(Step::Combinator(Combinator::Descendant));
    }

    // Attribute payloads contain '=' themselves, so split on the first one.
    if let Some((kind, value)) = raw.split_once('=') {
        let kind: FragmentKind = kind
            .parse()
            .with_context(|| format!("unknown fragment kind '{kind}' in step '{raw}'"))?;
        return Ok(Step::Fragment(Fragment::new(kind, value)));
    }

    let combinator = raw
        .parse()
        .with_context(|| format!("step '{raw}' is neither kind=value nor a combinator"))?;
    Ok(Step::Combinator(combinator))
}

/// Fold the steps left to right: fragments extend the current compound
/// selector, a combinator joins everything so far with the next compound.
fn build(steps: impl IntoIterator<Item = Step>) -> Result<Selector> {
    let mut pending: Option<(Selector, Combinator)> = None;
    let mut current: Option<CompoundSelector> = None;

    for (index, step) in steps.into_iter().enumerate() {
        match step {
            Step::Fragment(fragment) => {
                let next = match current.take() {
                    None => SelectorBuilder::fragment(fragment),
                    Some(compound) => compound
                        .append(fragment)
                        .with_context(|| format!("step {}", index + 1))?,
                };
                current = Some(next);
            }
            Step::Combinator(combinator) => {
                if combinator == Combinator::Descendant {
                    warn_once("CLI", DESCENDANT_PADDING);
                }
                let Some(right) = current.take() else {
                    bail!(
                        "step {}: combinator '{combinator}' has no selector before it",
                        index + 1
                    );
                };
                let left = match pending.take() {
                    None => right.into(),
                    Some((left, join)) => SelectorBuilder::combine(left, join, right),
                };
                pending = Some((left, combinator));
            }
        }
    }

    let Some(last) = current else {
        bail!("selector must end with a fragment");
    };
    Ok(match pending {
        None => last.into(),
        Some((left, combinator)) => SelectorBuilder::combine(left, combinator, last),
    })
}

/// Everything the command prints for `selector`, without a trailing newline.
fn render(cli: &Cli, selector: &Selector) -> Result<String> {
    if cli.json {
        let value = if cli.specificity {
            serde_json::json!({
                "selector": serde_json::to_value(selector).context("failed to encode selector")?,
                "specificity": serde_json::to_value(selector.specificity())
                    .context("failed to encode specificity")?,
            })
        } else {
            serde_json::to_value(selector).context("failed to encode selector")?
        };
        return serde_json::to_string_pretty(&value).context("failed to encode selector");
    }

    if cli.specificity {
        Ok(format!("{selector}\nspecificity: {}", selector.specificity()))
    } else {
        Ok(selector.to_string())
    }
}

fn run(cli: &Cli) -> Result<()> {
    let steps = cli
        .steps
        .iter()
        .map(|raw| parse_step(raw))
        .collect::<Result<Vec<_>>>()?;
    let selector = build(steps)?;
    println!("{}", render(cli, &selector)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
