//! Set and sequence helpers over token slices.

use crate::compare::StringComparison;

/// Index of the first token equal to `needle`
pub fn position<S: AsRef<str>>(
    tokens: &[S],
    needle: &str,
    comparison: StringComparison,
) -> Option<usize> {
    tokens
        .iter()
        .position(|token| comparison.equals(token.as_ref(), needle))
}

pub fn contains<S: AsRef<str>>(tokens: &[S], needle: &str, comparison: StringComparison) -> bool {
    position(tokens, needle, comparison).is_some()
}

/// The leading run of `tokens` before the first token matching `stop`
pub fn take_until<S, F>(tokens: &[S], stop: F) -> &[S]
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let end = tokens
        .iter()
        .position(|token| stop(token.as_ref()))
        .unwrap_or(tokens.len());
    &tokens[..end]
}

/// Unordered set equality; duplicates on either side are ignored.
pub fn same_members<A, B>(left: &[A], right: &[B], comparison: StringComparison) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    left.iter()
        .all(|item| contains(right, item.as_ref(), comparison))
        && right
            .iter()
            .all(|item| contains(left, item.as_ref(), comparison))
}

/// Join tokens with single spaces
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
