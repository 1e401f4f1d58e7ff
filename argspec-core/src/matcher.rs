//! Presence matching.
//!
//! A [`Matcher`] binds a registry to a comparison policy and answers
//! "is this argument, chain or grouping found" questions over a token
//! stream, optionally refined by [`FoundOptions`].

use std::sync::Arc;

use tracing::trace;

use crate::argument::{Argument, Grouping};
use crate::compare::StringComparison;
use crate::error::{ArgSpecError, Result};
use crate::options::{FoundOptions, FoundPolicy};
use crate::registry::Registry;
use crate::segment::{self, Occurrences};

impl Registry {
    /// A matcher using the registry's default comparison policy
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(self, self.comparison())
    }

    /// A matcher overriding the comparison policy for this use
    pub fn matcher_with(&self, comparison: StringComparison) -> Matcher<'_> {
        Matcher::new(self, comparison)
    }
}

/// Segment, parameter and presence queries against one registry.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'r> {
    registry: &'r Registry,
    comparison: StringComparison,
}

impl<'r> Matcher<'r> {
    pub fn new(registry: &'r Registry, comparison: StringComparison) -> Self {
        Self {
            registry,
            comparison,
        }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn comparison(&self) -> StringComparison {
        self.comparison
    }

    pub fn segment<'t, S: AsRef<str>>(&self, argument: &Argument, tokens: &'t [S]) -> &'t [S] {
        segment::segment(self.registry, argument, tokens, self.comparison)
    }

    pub fn chain_segment<'t, S: AsRef<str>>(
        &self,
        chain: &[Arc<Argument>],
        tokens: &'t [S],
    ) -> &'t [S] {
        segment::chain_segment(self.registry, chain, tokens, self.comparison)
    }

    pub fn params<'t, S: AsRef<str>>(&self, argument: &Argument, tokens: &'t [S]) -> &'t [S] {
        segment::params(self.registry, argument, tokens, self.comparison)
    }

    pub fn chain_params<'t, S: AsRef<str>>(
        &self,
        chain: &[Arc<Argument>],
        tokens: &'t [S],
    ) -> &'t [S] {
        segment::chain_params(self.registry, chain, tokens, self.comparison)
    }

    pub fn occurrences<'a, 't, S: AsRef<str>>(
        &'a self,
        argument: &'a Argument,
        tokens: &'t [S],
    ) -> Occurrences<'a, 't, S> {
        segment::occurrences(self.registry, argument, tokens, self.comparison)
    }

    /// Plain presence: the argument's command occurs in `tokens`
    pub fn is_present<S: AsRef<str>>(&self, argument: &Argument, tokens: &[S]) -> bool {
        !self.segment(argument, tokens).is_empty()
    }

    /// Whether another argument of the same tier occurs in `scope`
    pub fn has_siblings<S: AsRef<str>>(&self, argument: &Argument, scope: &[S]) -> bool {
        scope.iter().map(AsRef::as_ref).any(|token| {
            self.registry
                .classify(token, self.comparison)
                .is_some_and(|tier| tier.as_ref() == argument.specification().as_ref())
                && !self.comparison.equals(token, argument.command())
        })
    }

    /// Whether `argument` is found in `tokens` under `options`.
    ///
    /// Conflicting options fail before any matching happens.
    pub fn found<S: AsRef<str>>(
        &self,
        argument: &Argument,
        options: FoundOptions,
        tokens: &[S],
    ) -> Result<bool> {
        let policy = FoundPolicy::resolve(options)?;
        Ok(self.evaluate(argument, &policy, tokens))
    }

    /// Whether the last argument of `chain` is found under `options`,
    /// searching only inside the segment of the chain's parent prefix.
    pub fn found_chain<S: AsRef<str>>(
        &self,
        chain: &[Arc<Argument>],
        options: FoundOptions,
        tokens: &[S],
    ) -> Result<bool> {
        let policy = FoundPolicy::resolve(options)?;
        let (leaf, parents) = chain.split_last().ok_or(ArgSpecError::EmptyChain)?;
        let scope = self.chain_segment(parents, tokens);
        Ok(self.evaluate(leaf, &policy, scope))
    }

    /// Whether a grouping is found under `options`.
    ///
    /// The parent chain must nest as a call-chain and every child must occur
    /// inside the parent chain's segment. Options refine the last argument
    /// of the flattened grouping.
    pub fn found_grouping<S: AsRef<str>>(
        &self,
        grouping: &Grouping,
        options: FoundOptions,
        tokens: &[S],
    ) -> Result<bool> {
        let policy = FoundPolicy::resolve(options)?;
        Ok(self.evaluate_grouping(grouping, &policy, tokens))
    }

    /// Plain presence of a call-chain; an empty chain is never present
    pub fn is_chain_present<S: AsRef<str>>(
        &self,
        chain: &[Arc<Argument>],
        tokens: &[S],
    ) -> bool {
        !chain.is_empty() && !self.chain_segment(chain, tokens).is_empty()
    }

    /// Plain presence of a grouping
    pub fn is_grouping_present<S: AsRef<str>>(&self, grouping: &Grouping, tokens: &[S]) -> bool {
        self.evaluate_grouping(grouping, &FoundPolicy::default(), tokens)
    }

    fn evaluate_grouping<S: AsRef<str>>(
        &self,
        grouping: &Grouping,
        policy: &FoundPolicy,
        tokens: &[S],
    ) -> bool {
        let parents = grouping.parent_chain();
        let scope = self.chain_segment(parents, tokens);
        if scope.is_empty() {
            return false;
        }

        let found = match grouping.children().split_last() {
            None => match parents.split_last() {
                Some((leaf, prefix)) => {
                    self.evaluate(leaf, policy, self.chain_segment(prefix, tokens))
                }
                None => false,
            },
            Some((last_child, other_children)) => {
                other_children
                    .iter()
                    .all(|child| self.is_present(child, scope))
                    && self.evaluate(last_child, policy, scope)
            }
        };

        trace!(grouping = %grouping, found, "evaluated grouping");
        found
    }

    fn evaluate<S: AsRef<str>>(
        &self,
        argument: &Argument,
        policy: &FoundPolicy,
        scope: &[S],
    ) -> bool {
        let segment = self.segment(argument, scope);
        if segment.is_empty() {
            trace!(command = argument.command(), "not found");
            return false;
        }
        if policy.is_plain() {
            return true;
        }

        let found = policy.children.admits(segment.len() > 1)
            && policy
                .params
                .admits(!self.params(argument, scope).is_empty())
            && policy.siblings.admits(self.has_siblings(argument, scope));

        trace!(command = argument.command(), ?policy, found, "evaluated presence");
        found
    }
}
