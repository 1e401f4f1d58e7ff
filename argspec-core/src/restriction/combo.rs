//! Restrictions pairing two groupings.

use crate::argument::Grouping;
use crate::matcher::Matcher;

use super::{Restriction, Violation};

fn pair_message(first: &Grouping, second: &Grouping) -> String {
    format!("{} | {}", first, second)
}

/// Two groupings that must not both be present.
#[derive(Debug, Clone)]
pub struct IllegalComboRestriction {
    first: Grouping,
    second: Grouping,
}

impl IllegalComboRestriction {
    pub fn new(first: Grouping, second: Grouping) -> Self {
        Self { first, second }
    }
}

impl Restriction for IllegalComboRestriction {
    fn kind(&self) -> &'static str {
        "IllegalComboRestriction"
    }

    fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        if matcher.is_grouping_present(&self.first, tokens)
            && matcher.is_grouping_present(&self.second, tokens)
        {
            vec![Violation::new(self.kind(), pair_message(&self.first, &self.second))]
        } else {
            Vec::new()
        }
    }
}

/// Two groupings that must appear together or not at all.
#[derive(Debug, Clone)]
pub struct MandatedComboRestriction {
    first: Grouping,
    second: Grouping,
}

impl MandatedComboRestriction {
    pub fn new(first: Grouping, second: Grouping) -> Self {
        Self { first, second }
    }
}

impl Restriction for MandatedComboRestriction {
    fn kind(&self) -> &'static str {
        "MandatedComboRestriction"
    }

    fn violations(&self, matcher: &Matcher<'_>, tokens: &[String]) -> Vec<Violation> {
        let first = matcher.is_grouping_present(&self.first, tokens);
        let second = matcher.is_grouping_present(&self.second, tokens);
        if first != second {
            vec![Violation::new(self.kind(), pair_message(&self.first, &self.second))]
        } else {
            Vec::new()
        }
    }
}
