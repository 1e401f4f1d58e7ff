//! Restrictions on the overall shape of the argument vector.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::argument::Grouping;
use crate::matcher::Matcher;
use crate::sequence;
use crate::specification::Specification;

use super::{Restriction, Violation};

/// Every root-tier segment must match one declared grouping.
///
/// The stream is split at each occurrence of a known root command. A
/// segment is legal when the set of known commands it contains equals the
/// flattened command set of some grouping, ignoring order.
#[derive(Debug, Clone)]
pub struct LegalArgumentsRestriction {
    groupings: Vec<Grouping>,
}

impl LegalArgumentsRestriction {
    pub fn new(groupings: Vec<Grouping>) -> Self {
        Self { groupings }
    }

    pub fn groupings(&self) -> &[Grouping] {
        &self.groupings
    }
}

impl Restriction for LegalArgumentsRestriction {
    fn kind(&self) -> &'static str {
        "LegalArgumentsRestriction"
    }

    fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        let registry = matcher.registry();
        let comparison = matcher.comparison();
        let Some(root) = registry.root_specification() else {
            return Vec::new();
        };

        // Segments of every root argument, keyed by where they start
        let mut segments = BTreeMap::new();
        for argument in registry.arguments_of(root) {
            let mut found = matcher.occurrences(argument, tokens);
            while let Some(segment) = found.next() {
                let start = found.consumed() - segment.len();
                segments.entry(start).or_insert(segment);
            }
        }

        segments
            .into_values()
            .filter(|segment| {
                let commands: Vec<&str> = segment
                    .iter()
                    .map(String::as_str)
                    .filter(|token| registry.is_known_command(token, comparison))
                    .collect();
                !self.groupings.iter().any(|grouping| {
                    sequence::same_members(&commands, &grouping.commands(), comparison)
                })
            })
            .map(|segment| Violation::new(self.kind(), sequence::join(segment)))
            .collect()
    }
}

/// Switch-like tokens must be declared arguments.
///
/// A token that starts with any registered delimiter but matches no
/// declared command is reported, once per occurrence.
#[derive(Debug, Clone, Default)]
pub struct UnknownArgumentsRestriction;

impl UnknownArgumentsRestriction {
    pub fn new() -> Self {
        Self
    }
}

impl Restriction for UnknownArgumentsRestriction {
    fn kind(&self) -> &'static str {
        "UnknownArgumentsRestriction"
    }

    fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        let registry = matcher.registry();
        let comparison = matcher.comparison();
        tokens
            .iter()
            .filter(|token| {
                registry.has_known_delimiter(token, comparison)
                    && !registry.is_known_command(token, comparison)
            })
            .map(|token| Violation::new(self.kind(), token.as_str()))
            .collect()
    }
}

/// The first token must start with the root tier's delimiter.
///
/// An empty stream has no first token and is not reported here.
#[derive(Debug, Clone)]
pub struct FirstArgMustBeRootRestriction {
    root: Arc<Specification>,
}

impl FirstArgMustBeRootRestriction {
    pub fn new(root: Arc<Specification>) -> Self {
        Self { root }
    }
}

impl Restriction for FirstArgMustBeRootRestriction {
    fn kind(&self) -> &'static str {
        "FirstArgMustBeRootRestriction"
    }

    fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        match tokens.first() {
            Some(first) if !matcher.comparison().starts_with(first, self.root.delimiter()) => {
                vec![Violation::new(self.kind(), first.as_str())]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{convert_tool, tokens};
    use super::*;
    use crate::compare::StringComparison;

    fn convert_groupings(tool: &super::super::testing::ConvertTool) -> Vec<Grouping> {
        vec![
            Grouping::new(
                vec![tool.convert.clone()],
                vec![tool.input.clone(), tool.output.clone()],
            )
            .unwrap(),
            Grouping::single(tool.list.clone()),
        ]
    }

    #[test]
    fn test_legal_segments_pass() {
        let tool = convert_tool();
        let restriction = LegalArgumentsRestriction::new(convert_groupings(&tool));
        let stream = tokens(&["--convert", "-out", "b.cs", "-in", "a.txt", "--list"]);
        assert!(restriction
            .violations(&tool.registry.matcher(), &stream)
            .is_empty());
    }

    #[test]
    fn test_illegal_segment_reported_whole() {
        let tool = convert_tool();
        let restriction = LegalArgumentsRestriction::new(convert_groupings(&tool));
        let stream = tokens(&["--list", "--convert", "-in", "a.txt", "--list", "-out"]);
        let violations = restriction.violations(&tool.registry.matcher(), &stream);
        assert_eq!(
            violations,
            vec![
                Violation::new("LegalArgumentsRestriction", "--convert -in a.txt"),
                Violation::new("LegalArgumentsRestriction", "--list -out"),
            ]
        );
    }

    #[test]
    fn test_repeated_root_segments_reported_in_stream_order() {
        let tool = convert_tool();
        let restriction = LegalArgumentsRestriction::new(convert_groupings(&tool));
        let stream = tokens(&["--convert", "-in", "--list", "-in", "--convert", "-out"]);
        let violations = restriction.violations(&tool.registry.matcher(), &stream);
        assert_eq!(
            violations,
            vec![
                Violation::new("LegalArgumentsRestriction", "--convert -in"),
                Violation::new("LegalArgumentsRestriction", "--list -in"),
                Violation::new("LegalArgumentsRestriction", "--convert -out"),
            ]
        );
    }

    #[test]
    fn test_legal_arguments_ignore_unknown_tokens() {
        let tool = convert_tool();
        let restriction = LegalArgumentsRestriction::new(convert_groupings(&tool));
        let stream = tokens(&["--list", "-bogus"]);
        assert!(!restriction.is_violated(&tool.registry.matcher(), &stream));
    }

    #[test]
    fn test_unknown_arguments() {
        let tool = convert_tool();
        let matcher = tool.registry.matcher();
        let restriction = UnknownArgumentsRestriction::new();

        let stream = tokens(&["--convert", "-in", "a.txt", "-bogus", "--nope"]);
        assert_eq!(
            restriction.violations(&matcher, &stream),
            vec![
                Violation::new("UnknownArgumentsRestriction", "-bogus"),
                Violation::new("UnknownArgumentsRestriction", "--nope"),
            ]
        );
    }

    #[test]
    fn test_unknown_arguments_follow_comparison() {
        let tool = convert_tool();
        let restriction = UnknownArgumentsRestriction::new();
        let stream = tokens(&["--CONVERT", "-In"]);

        assert_eq!(
            restriction
                .violations(&tool.registry.matcher(), &stream)
                .len(),
            2
        );
        assert!(!restriction.is_violated(
            &tool.registry.matcher_with(StringComparison::OrdinalIgnoreCase),
            &stream
        ));
    }

    #[test]
    fn test_first_arg_must_be_root() {
        let tool = convert_tool();
        let matcher = tool.registry.matcher();
        let restriction = FirstArgMustBeRootRestriction::new(tool.root.clone());

        assert_eq!(
            restriction.violations(&matcher, &tokens(&["-in", "a.txt"])),
            vec![Violation::new("FirstArgMustBeRootRestriction", "-in")]
        );
        assert!(!restriction.is_violated(&matcher, &tokens(&["--convert", "-in"])));
        assert!(!restriction.is_violated(&matcher, &[]));
    }
}
