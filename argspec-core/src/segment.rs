//! Segment and parameter extraction.
//!
//! A segment is the contiguous run of tokens owned by one matched argument:
//! the matching command token followed by everything up to the next token of
//! the same or an outranking tier. Segments are borrowed sub-slices of the
//! input, so the token stream is never copied or mutated.

use std::ops::Range;
use std::sync::Arc;

use tracing::trace;

use crate::argument::Argument;
use crate::compare::StringComparison;
use crate::registry::Registry;
use crate::sequence;

/// Whether `token` closes the segment of `argument`.
///
/// The token's tier is the registered specification with the longest
/// matching delimiter. Tokens of the argument's own tier or of a tier above
/// it end the segment; tokens of deeper tiers and free values do not.
fn ends_segment(
    registry: &Registry,
    argument: &Argument,
    token: &str,
    comparison: StringComparison,
) -> bool {
    match registry.classify(token, comparison) {
        Some(tier) => tier.hierarchy() <= argument.specification().hierarchy(),
        None => comparison.starts_with(token, argument.delimiter()),
    }
}

/// Index range of the first segment of `argument` inside `tokens`
fn locate<S: AsRef<str>>(
    registry: &Registry,
    argument: &Argument,
    tokens: &[S],
    comparison: StringComparison,
) -> Option<Range<usize>> {
    let start = sequence::position(tokens, argument.command(), comparison)?;
    let rest = &tokens[start + 1..];
    let length = 1 + sequence::take_until(rest, |token| {
        ends_segment(registry, argument, token, comparison)
    })
    .len();

    trace!(
        command = argument.command(),
        start,
        length,
        "located segment"
    );
    Some(start..start + length)
}

/// The first segment of `argument` in `tokens`, or an empty slice when the
/// command does not occur.
pub fn segment<'t, S: AsRef<str>>(
    registry: &Registry,
    argument: &Argument,
    tokens: &'t [S],
    comparison: StringComparison,
) -> &'t [S] {
    match locate(registry, argument, tokens, comparison) {
        Some(range) => &tokens[range],
        None => &tokens[..0],
    }
}

/// Segment of the last argument of a call-chain.
///
/// Each argument is searched only inside the segment of the one before it,
/// so a child counts only when it appears textually inside its parent. Once
/// a step comes up empty every later step searches an empty stream. An
/// empty chain selects the whole stream.
pub fn chain_segment<'t, S: AsRef<str>>(
    registry: &Registry,
    chain: &[Arc<Argument>],
    tokens: &'t [S],
    comparison: StringComparison,
) -> &'t [S] {
    chain.iter().fold(tokens, |scope, argument| {
        segment(registry, argument, scope, comparison)
    })
}

/// Free values following the command token of a segment, up to the first
/// token that starts with any registered delimiter.
fn trailing_values<'t, S: AsRef<str>>(
    registry: &Registry,
    segment: &'t [S],
    comparison: StringComparison,
) -> &'t [S] {
    match segment.split_first() {
        Some((_, rest)) => sequence::take_until(rest, |token| {
            registry.has_known_delimiter(token, comparison)
        }),
        None => segment,
    }
}

/// Parameters of `argument`: its segment minus the command token, cut at
/// the first token that belongs to any tier.
pub fn params<'t, S: AsRef<str>>(
    registry: &Registry,
    argument: &Argument,
    tokens: &'t [S],
    comparison: StringComparison,
) -> &'t [S] {
    trailing_values(
        registry,
        segment(registry, argument, tokens, comparison),
        comparison,
    )
}

/// Parameters of the last argument of a call-chain
pub fn chain_params<'t, S: AsRef<str>>(
    registry: &Registry,
    chain: &[Arc<Argument>],
    tokens: &'t [S],
    comparison: StringComparison,
) -> &'t [S] {
    if chain.is_empty() {
        return &tokens[..0];
    }
    trailing_values(
        registry,
        chain_segment(registry, chain, tokens, comparison),
        comparison,
    )
}

/// Every segment of `argument` in `tokens`, left to right.
///
/// Each step searches the tail that follows the previous segment, so
/// repeated top-level occurrences are reported separately. The iterator is
/// cheap to clone and can be restarted from the same inputs.
#[derive(Debug, Clone)]
pub struct Occurrences<'a, 't, S> {
    registry: &'a Registry,
    argument: &'a Argument,
    tokens: &'t [S],
    comparison: StringComparison,
    cursor: usize,
}

pub fn occurrences<'a, 't, S: AsRef<str>>(
    registry: &'a Registry,
    argument: &'a Argument,
    tokens: &'t [S],
    comparison: StringComparison,
) -> Occurrences<'a, 't, S> {
    Occurrences {
        registry,
        argument,
        tokens,
        comparison,
        cursor: 0,
    }
}

impl<S> Occurrences<'_, '_, S> {
    /// Tokens consumed so far; the last yielded segment ends here
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl<'a, 't, S: AsRef<str>> Iterator for Occurrences<'a, 't, S> {
    type Item = &'t [S];

    fn next(&mut self) -> Option<Self::Item> {
        let tail = &self.tokens[self.cursor..];
        let range = locate(self.registry, self.argument, tail, self.comparison)?;
        let found = &tail[range.clone()];
        self.cursor += range.end;
        Some(found)
    }
}
