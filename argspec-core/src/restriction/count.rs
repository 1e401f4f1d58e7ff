//! Restrictions on how many tokens appear.

use std::sync::Arc;

use crate::argument::{join_commands, Argument};
use crate::error::{ArgSpecError, Result};
use crate::matcher::Matcher;

use super::{Restriction, Violation};

/// Bounds on the number of parameters following a call-chain.
///
/// Only checked when the chain is present; an absent chain never violates.
#[derive(Debug, Clone)]
pub struct ParameterCountRestriction {
    chain: Vec<Arc<Argument>>,
    min: usize,
    max: usize,
}

impl ParameterCountRestriction {
    pub fn new(chain: Vec<Arc<Argument>>, min: usize, max: usize) -> Result<Self> {
        if chain.is_empty() {
            return Err(ArgSpecError::EmptyChain);
        }
        if min > max {
            return Err(ArgSpecError::InvalidBounds { min, max });
        }
        Ok(Self { chain, min, max })
    }

    /// Bounds on the parameters of a single argument, wherever it occurs
    pub fn for_argument(argument: Arc<Argument>, min: usize, max: usize) -> Result<Self> {
        Self::new(vec![argument], min, max)
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.min, self.max)
    }
}

impl Restriction for ParameterCountRestriction {
    fn kind(&self) -> &'static str {
        "ParameterCountRestriction"
    }

    fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        if !matcher.is_chain_present(&self.chain, tokens) {
            return Vec::new();
        }

        let count = matcher.chain_params(&self.chain, tokens).len();
        if (self.min..=self.max).contains(&count) {
            Vec::new()
        } else {
            vec![Violation::new(self.kind(), join_commands(&self.chain))]
        }
    }
}

/// The stream must not be empty.
#[derive(Debug, Clone, Default)]
pub struct MustContainAtLeastOneArgumentRestriction;

impl MustContainAtLeastOneArgumentRestriction {
    pub fn new() -> Self {
        Self
    }
}

impl Restriction for MustContainAtLeastOneArgumentRestriction {
    fn kind(&self) -> &'static str {
        "MustContainAtLeastOneArgumentRestriction"
    }

    fn violations(&self, _matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        if tokens.is_empty() {
            vec![Violation::new(self.kind(), "At least one argument is required")]
        } else {
            Vec::new()
        }
    }
}

/// Which stream state a [`CannotContainAnyArgumentsRestriction`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmptinessTrigger {
    /// Report when the stream is empty; the historical behavior
    WhenEmpty,

    /// Report when the stream holds any token
    WhenPresent,
}

/// The stream must contain no arguments.
///
/// Historically this reported an *empty* stream, the opposite of what the
/// name says. Callers pick the behavior explicitly through
/// [`EmptinessTrigger`].
#[derive(Debug, Clone)]
pub struct CannotContainAnyArgumentsRestriction {
    trigger: EmptinessTrigger,
}

impl CannotContainAnyArgumentsRestriction {
    pub fn new(trigger: EmptinessTrigger) -> Self {
        Self { trigger }
    }

    pub fn trigger(&self) -> EmptinessTrigger {
        self.trigger
    }
}

impl Restriction for CannotContainAnyArgumentsRestriction {
    fn kind(&self) -> &'static str {
        "CannotContainAnyArgumentsRestriction"
    }

    fn violations(&self, _matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        let violated = match self.trigger {
            EmptinessTrigger::WhenEmpty => tokens.is_empty(),
            EmptinessTrigger::WhenPresent => !tokens.is_empty(),
        };
        if violated {
            vec![Violation::new(self.kind(), "No arguments are allowed")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{convert_tool, tokens};
    use super::*;

    #[test]
    fn test_parameter_count_too_many() {
        let tool = convert_tool();
        let restriction =
            ParameterCountRestriction::for_argument(tool.input.clone(), 1, 1).unwrap();
        let stream = tokens(&["--convert", "-in", "a.txt", "b.txt", "-out", "c.cs"]);

        let violations = restriction.violations(&tool.registry.matcher(), &stream);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, "ParameterCountRestriction");
        assert_eq!(violations[0].message, "-in");
    }

    #[test]
    fn test_parameter_count_within_bounds() {
        let tool = convert_tool();
        let chain = vec![tool.convert.clone(), tool.input.clone()];
        let restriction = ParameterCountRestriction::new(chain, 1, 2).unwrap();
        let matcher = tool.registry.matcher();

        assert!(!restriction.is_violated(&matcher, &tokens(&["--convert", "-in", "a.txt"])));
        assert!(!restriction.is_violated(&matcher, &tokens(&["--convert", "-in", "a", "b"])));
        assert_eq!(
            restriction.violations(&matcher, &tokens(&["--convert", "-in"])),
            vec![Violation::new("ParameterCountRestriction", "--convert -in")]
        );
    }

    #[test]
    fn test_parameter_count_ignores_absent_chain() {
        let tool = convert_tool();
        let chain = vec![tool.convert.clone(), tool.output.clone()];
        let restriction = ParameterCountRestriction::new(chain, 1, 1).unwrap();
        // -out outside of --convert does not count
        let stream = tokens(&["-out", "--convert", "-in", "a.txt"]);
        assert!(!restriction.is_violated(&tool.registry.matcher(), &stream));
    }

    #[test]
    fn test_parameter_count_rejects_bad_declarations() {
        let tool = convert_tool();
        assert_eq!(
            ParameterCountRestriction::for_argument(tool.input.clone(), 3, 1).unwrap_err(),
            ArgSpecError::InvalidBounds { min: 3, max: 1 }
        );
        assert_eq!(
            ParameterCountRestriction::new(Vec::new(), 0, 1).unwrap_err(),
            ArgSpecError::EmptyChain
        );
    }

    #[test]
    fn test_must_contain_at_least_one() {
        let tool = convert_tool();
        let matcher = tool.registry.matcher();
        let restriction = MustContainAtLeastOneArgumentRestriction::new();
        assert_eq!(restriction.violations(&matcher, &[]).len(), 1);
        assert!(!restriction.is_violated(&matcher, &tokens(&["--list"])));
    }

    #[test]
    fn test_cannot_contain_any_triggers() {
        let tool = convert_tool();
        let matcher = tool.registry.matcher();
        let stream = tokens(&["--list"]);

        let historical = CannotContainAnyArgumentsRestriction::new(EmptinessTrigger::WhenEmpty);
        assert!(historical.is_violated(&matcher, &[]));
        assert!(!historical.is_violated(&matcher, &stream));

        let literal = CannotContainAnyArgumentsRestriction::new(EmptinessTrigger::WhenPresent);
        assert!(!literal.is_violated(&matcher, &[]));
        assert_eq!(
            literal.violations(&matcher, &stream),
            vec![Violation::new(
                "CannotContainAnyArgumentsRestriction",
                "No arguments are allowed"
            )]
        );
    }
}
